use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use binmorph_image::{BinaryField, ImageSize};
use binmorph_imgproc::morphology::{KernelShape, MorphOp, StructuringElement};
use binmorph_imgproc::parallel::ExecutionStrategy;

fn create_test_field(width: usize, height: usize) -> BinaryField {
    let mut rng = StdRng::seed_from_u64(42);
    let size = ImageSize { width, height };
    let data = (0..size.area()).map(|_| rng.random_bool(0.5)).collect();
    BinaryField::new(size, data).unwrap()
}

fn bench_morphology(c: &mut Criterion) {
    let mut group = c.benchmark_group("Morphology");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        let src = create_test_field(*width, *height);

        for kernel_size in [3, 5, 7].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size) as u64,
            ));

            let element =
                StructuringElement::from_shape(KernelShape::Box { size: *kernel_size }).unwrap();
            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            for op in [MorphOp::Dilate, MorphOp::Erode] {
                for (label, strategy) in [
                    ("serial", ExecutionStrategy::Serial),
                    ("parallel_rows", ExecutionStrategy::ParallelRows),
                ] {
                    group.bench_with_input(
                        BenchmarkId::new(format!("{}_{}", op.name(), label), &parameter_string),
                        &(&src, &element),
                        |b, i| b.iter(|| black_box(op.apply(i.0, i.1, strategy))),
                    );
                }
            }
        }
    }

    group.finish();
}

criterion_group!(benches, bench_morphology);
criterion_main!(benches);
