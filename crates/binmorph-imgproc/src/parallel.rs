use rayon::prelude::*;

/// Controls how row-wise operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    ParallelRows,
}

/// Apply a function to each row of a row-major buffer.
///
/// The closure receives the row index and the mutable row slice. A zero `row_len`
/// leaves the buffer untouched.
///
/// # Arguments
///
/// * `dst` - The destination buffer, `row_len` elements per row.
/// * `row_len` - The number of elements in a row.
/// * `strategy` - Whether rows are visited serially or in parallel.
/// * `f` - The function applied to every row.
pub fn for_each_row_mut<T: Send>(
    dst: &mut [T],
    row_len: usize,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) {
    if row_len == 0 {
        return;
    }

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(row, chunk)| f(row, chunk));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(row_len)
                .enumerate()
                .for_each(|(row, chunk)| f(row, chunk));
        }
    }
}

/// Apply a function to each (source, destination) element pair.
///
/// Both slices are walked row by row; `row_len` is only used to split the work
/// when running in parallel.
pub fn for_each_pair<S: Sync, D: Send>(
    src: &[S],
    dst: &mut [D],
    row_len: usize,
    strategy: ExecutionStrategy,
    f: impl Fn(&S, &mut D) + Send + Sync,
) {
    match strategy {
        ExecutionStrategy::Serial => {
            src.iter().zip(dst.iter_mut()).for_each(|(s, d)| f(s, d));
        }
        ExecutionStrategy::ParallelRows => {
            let stride = row_len.max(1);
            src.par_chunks(stride)
                .zip(dst.par_chunks_mut(stride))
                .for_each(|(src_row, dst_row)| {
                    src_row.iter().zip(dst_row.iter_mut()).for_each(|(s, d)| f(s, d));
                });
        }
    }
}
