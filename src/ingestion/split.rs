//! Seeded train/test partitioning for [`crate::types::DataSet`].

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::{IngestionError, IngestionResult};
use crate::types::DataSet;

use super::config::SplitOptions;

/// Partition `dataset` into `(train, test)`.
///
/// The test subset gets `ceil(test_size * n)` rows and the train subset the remaining rows. Row
/// positions `0..n` are shuffled with a [`ChaCha8Rng`] seeded from `options.seed`; the first `n_test`
/// shuffled positions form the test subset and the rest the train subset, both in shuffled order.
/// The same input and seed always give the same partition, across builds and platforms.
///
/// Errors with [`IngestionError::InvalidSplit`] if `test_size` is outside `(0, 1)` or if either
/// subset would be empty.
pub fn train_test_split(dataset: &DataSet, options: &SplitOptions) -> IngestionResult<(DataSet, DataSet)> {
    let (train_idx, test_idx) = split_positions(dataset.row_count(), options)?;
    Ok((dataset.take_rows(&train_idx), dataset.take_rows(&test_idx)))
}

/// Compute the `(train, test)` row positions for a table with `n` rows.
pub fn split_positions(n: usize, options: &SplitOptions) -> IngestionResult<(Vec<usize>, Vec<usize>)> {
    let (n_train, n_test) = split_sizes(n, options.test_size)?;

    let mut positions: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    positions.shuffle(&mut rng);

    let train = positions.split_off(n_test);
    debug_assert_eq!(train.len(), n_train);
    Ok((train, positions))
}

fn split_sizes(n: usize, test_size: f64) -> IngestionResult<(usize, usize)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(IngestionError::InvalidSplit {
            message: format!("test_size must be in (0, 1), got {test_size}"),
        });
    }

    let n_test = ceil_tolerant(test_size * n as f64);
    let n_train = n.saturating_sub(n_test);
    if n_train == 0 || n_test == 0 {
        return Err(IngestionError::InvalidSplit {
            message: format!(
                "with {n} rows and test_size={test_size} the train subset would have {n_train} rows \
                 and the test subset {n_test}; both must be non-empty"
            ),
        });
    }
    Ok((n_train, n_test))
}

/// `ceil`, except values within float noise of an integer round to it (`0.2 * 15` is `3.0000000000000004`).
fn ceil_tolerant(x: f64) -> usize {
    let nearest = x.round();
    if (x - nearest).abs() < 1e-9 {
        nearest as usize
    } else {
        x.ceil() as usize
    }
}
