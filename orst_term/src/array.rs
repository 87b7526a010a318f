//! Random input arrays.

use std::ops::{Range, RangeInclusive};

use rand::Rng;

/// Values are drawn from this range so every bar has a visible, proportional height.
pub const VALUE_RANGE: Range<u32> = 5..105;

/// Sizes the terminal chart can show side by side.
pub const SIZE_RANGE: RangeInclusive<usize> = 5..=200;

pub const DEFAULT_SIZE: usize = 50;

/// Generates `size` values uniformly from [`VALUE_RANGE`].
///
/// # Usage
///```
/// use orst_term::array::{random_array, VALUE_RANGE};
///
/// let values = random_array(50, &mut rand::thread_rng());
/// assert_eq!(values.len(), 50);
/// assert!(values.iter().all(|v| VALUE_RANGE.contains(v)));
///```
pub fn random_array<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<u32> {
    (0..size).map(|_| rng.gen_range(VALUE_RANGE)).collect()
}
