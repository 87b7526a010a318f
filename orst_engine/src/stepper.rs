//! The shared step machinery every sorter goes through.
//!
//! A [`Stepper`] owns the mutable borrow of the array for the length of a run. Sorters never
//! touch the slice or the sink directly: they ask the stepper to compare, swap or place, and the
//! stepper reports the step, keeps the counters and suspends for the configured delay.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::time::Duration;

use crate::{Result, RunConfig, SortError, StepSink};

/// Anything the engine can sort: ordered (possibly partially, like floats), cloneable values.
pub trait Value: PartialOrd + Clone + Debug {}

impl<T> Value for T where T: PartialOrd + Clone + Debug {}

/// Counts of what a finished run actually reported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub renders: u64,
    /// Shuffle rounds taken by bogo sort. Always zero for the other algorithms.
    pub rounds: u64,
}

impl RunStats {
    pub fn steps(&self) -> u64 {
        self.comparisons + self.swaps
    }
}

pub struct Stepper<'a, T, S> {
    slice: &'a mut [T],
    sink: &'a mut S,
    delay: Duration,
    stats: RunStats,
}

impl<'a, T, S> Stepper<'a, T, S>
where
    T: Value,
    S: StepSink<T>,
{
    pub fn new(slice: &'a mut [T], sink: &'a mut S, config: &RunConfig) -> Self {
        Self {
            slice,
            sink,
            delay: config.delay(),
            stats: RunStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.slice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &*self.slice
    }

    pub(crate) fn stats(&self) -> RunStats {
        self.stats
    }

    pub(crate) fn record_round(&mut self) {
        self.stats.rounds += 1;
    }

    /// Reports a comparison of the current values at `i` and `j` and returns how they order.
    pub async fn compare(&mut self, i: usize, j: usize) -> Result<Ordering> {
        self.announce_compare(i, j).await?;
        order(&self.slice[i], &self.slice[j], i, j)
    }

    /// Reports a comparison between `i` and `j` without reading the array. For algorithms that
    /// decide on values held elsewhere, like the merge snapshot.
    pub async fn announce_compare(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;

        otrace!(i, j, "compare");
        self.sink.compare(i, j)?;
        self.stats.comparisons += 1;
        self.pause().await;
        Ok(())
    }

    /// Exchanges the values at `i` and `j`, then reports it and renders.
    pub async fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;

        self.slice.swap(i, j);
        otrace!(i, j, "swap");
        self.sink.swap(i, j)?;
        self.stats.swaps += 1;
        self.render().await
    }

    /// Writes `value`, taken from position `src` of a snapshot, into `dest`.
    pub async fn place(&mut self, dest: usize, src: usize, value: T) -> Result<()> {
        self.check(dest)?;
        self.check(src)?;

        self.slice[dest] = value;
        otrace!(dest, src, "place");
        self.sink.swap(dest, src)?;
        self.stats.swaps += 1;
        self.render().await
    }

    /// Checks the whole array for non-decreasing order without reporting anything.
    pub fn is_sorted(&self) -> Result<bool> {
        for (k, pair) in self.slice.windows(2).enumerate() {
            if order(&pair[0], &pair[1], k, k + 1)?.is_gt() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn render(&mut self) -> Result<()> {
        self.sink.render(&*self.slice)?;
        self.stats.renders += 1;
        self.pause().await;
        Ok(())
    }

    async fn pause(&self) {
        if self.delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.slice.len() {
            Ok(())
        } else {
            Err(SortError::OutOfRange {
                index,
                len: self.slice.len(),
            })
        }
    }
}

/// Orders two values that came from positions `i` and `j`.
pub(crate) fn order<T: PartialOrd>(a: &T, b: &T, i: usize, j: usize) -> Result<Ordering> {
    a.partial_cmp(b).ok_or(SortError::Incomparable { i, j })
}

/// Rejects arrays holding values that cannot even be ordered against themselves.
pub(crate) fn validate<T: PartialOrd>(slice: &[T]) -> Result<()> {
    match slice.iter().position(|value| value.partial_cmp(value).is_none()) {
        Some(index) => Err(SortError::InvalidInput { index }),
        None => Ok(()),
    }
}
