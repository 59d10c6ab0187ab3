use std::path::{Path, PathBuf};

use rayon::prelude::*;

use binmorph_image::BinaryField;
use binmorph_imgproc::morphology::{KernelShape, MorphOp, MorphologyError, StructuringElement};
use binmorph_imgproc::parallel::ExecutionStrategy;
use binmorph_imgproc::threshold::{gray_from_binary, threshold_binary};
use binmorph_io::{functional as F, IoError};

/// An error type for the pipeline module.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Error reading the input or writing a result image.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error building the structuring element.
    #[error("Invalid structuring element. {0}")]
    Morphology(#[from] MorphologyError),

    /// Error creating the output directory.
    #[error("Failed to create output directory {0}. {1}")]
    OutputDir(PathBuf, #[source] std::io::Error),
}

/// Parameters of a [`run`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the source image.
    pub input: PathBuf,
    /// Directory receiving one image per operation.
    pub output_dir: PathBuf,
    /// Intensities strictly above this value become foreground.
    pub threshold: u8,
    /// Shape of the structuring element.
    pub kernel: KernelShape,
    /// File extension, and thus encoding, of the result images.
    pub extension: String,
    /// Row execution strategy of each operation.
    pub strategy: ExecutionStrategy,
}

impl PipelineConfig {
    /// Create a config with a threshold of 127, a 3x3 cross and png outputs.
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            threshold: 127,
            kernel: KernelShape::default(),
            extension: String::from("png"),
            strategy: ExecutionStrategy::Serial,
        }
    }

    /// Path of the result image for `op`.
    pub fn output_path(&self, op: MorphOp) -> PathBuf {
        self.output_dir
            .join(format!("result_{}.{}", op.name(), self.extension))
    }
}

/// A result written by [`run`].
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The operation that produced the field.
    pub op: MorphOp,
    /// Where the field was written.
    pub path: PathBuf,
    /// The resulting field.
    pub field: BinaryField,
}

/// Apply every [`MorphOp`] to the same source.
///
/// The operations only read `src` and `element`, so they are evaluated concurrently.
/// The results keep the order of [`MorphOp::ALL`].
pub fn apply_all(
    src: &BinaryField,
    element: &StructuringElement,
    strategy: ExecutionStrategy,
) -> Vec<(MorphOp, BinaryField)> {
    MorphOp::ALL
        .par_iter()
        .map(|&op| (op, op.apply(src, element, strategy)))
        .collect()
}

/// Read, binarize and transform an image, writing one result per operation.
///
/// # Arguments
///
/// * `config` - Input path, output directory and processing parameters.
///
/// # Returns
///
/// The written results, in the order dilation, erosion, opening, closing. Results are
/// written in that order too, so a failed write leaves the earlier ones on disk.
pub fn run(config: &PipelineConfig) -> Result<Vec<PipelineOutput>, PipelineError> {
    let element = StructuringElement::from_shape(config.kernel)?;

    log::debug!(
        "Loading and binarizing: {} (threshold {})",
        config.input.display(),
        config.threshold
    );
    let gray = F::read_image_gray8(&config.input)?;
    let binary = threshold_binary(&gray, config.threshold, config.strategy);
    log::debug!(
        "{} foreground pixels out of {}",
        binary.count_foreground(),
        binary.size().area()
    );

    create_output_dir(&config.output_dir)?;

    apply_all(&binary, &element, config.strategy)
        .into_iter()
        .map(|(op, field)| {
            let path = config.output_path(op);
            log::debug!("Writing {op}: {}", path.display());
            F::write_image_gray8(&path, &gray_from_binary(&field))?;
            Ok::<_, PipelineError>(PipelineOutput { op, path, field })
        })
        .collect()
}

fn create_output_dir(dir: &Path) -> Result<(), PipelineError> {
    std::fs::create_dir_all(dir).map_err(|e| PipelineError::OutputDir(dir.to_path_buf(), e))
}
