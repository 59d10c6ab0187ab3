use argh::FromArgs;
use std::path::PathBuf;

use binmorph::{
    imgproc::{morphology::KernelShape, parallel::ExecutionStrategy},
    pipeline::{self, PipelineConfig},
};

#[derive(FromArgs)]
/// Binarize an image and save its dilation, erosion, opening and closing
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory where the results are written (default: results)
    #[argh(option, short = 'o', default = "PathBuf::from(\"results\")")]
    output_dir: PathBuf,

    /// intensities above this value are foreground (default: 127)
    #[argh(option, short = 't', default = "127")]
    threshold: u8,

    /// kernel size (default: 3)
    #[argh(option, short = 's', default = "3")]
    kernel_size: usize,

    /// kernel shape: box, cross, hline, vline (default: cross)
    #[argh(option, short = 'k', default = "String::from(\"cross\")")]
    kernel_shape: String,

    /// output file extension (default: png)
    #[argh(option, short = 'e', default = "String::from(\"png\")")]
    extension: String,

    /// compute the rows of each operation in parallel
    #[argh(switch, short = 'p')]
    parallel: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let size = args.kernel_size;
    let kernel = match args.kernel_shape.as_str() {
        "box" => KernelShape::Box { size },
        "cross" => KernelShape::Cross { size },
        "hline" => KernelShape::HorizontalLine { size },
        "vline" => KernelShape::VerticalLine { size },
        other => return Err(format!("unknown kernel shape: {other}").into()),
    };

    let mut config = PipelineConfig::new(args.image_path, args.output_dir);
    config.threshold = args.threshold;
    config.kernel = kernel;
    config.extension = args.extension;
    if args.parallel {
        config.strategy = ExecutionStrategy::ParallelRows;
    }

    log::info!(
        "Loading and binarizing: {} (threshold {})",
        config.input.display(),
        config.threshold
    );

    let outputs = pipeline::run(&config)?;

    for output in &outputs {
        log::info!("Running: {}", output.op);
        log::info!("  -> {} saved", output.path.display());
    }

    log::info!(
        "Processing finished, {} files written to {}",
        outputs.len(),
        config.output_dir.display()
    );

    Ok(())
}
