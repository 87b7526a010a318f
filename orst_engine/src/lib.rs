//! Sorting algorithms that show their work.
//!
//! Every sorter in this crate reports each comparison and each exchange to a [`StepSink`] while
//! it runs, and suspends for a configurable delay after every step so something else (a
//! terminal chart, a test, a recorder) can keep up with it. The array is sorted in place.
//!
//! # Example
//!
//! ```
//! use orst_engine::{BubbleSorter, NoopSink, RunConfig, Sorter};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let mut slice = vec![1, 3, 2, 5, 4];
//! let stats = BubbleSorter
//!     .run(&mut slice, &mut NoopSink, &RunConfig::new())
//!     .await
//!     .unwrap();
//!
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! assert_eq!(stats.comparisons, 10);
//! assert_eq!(stats.swaps, 2);
//! # });
//! ```

#[macro_use]
mod macros;

mod config;
mod error;
mod sink;
mod sorters;
mod stepper;

use std::fmt::{self, Display};
use std::str::FromStr;

pub use config::RunConfig;
pub use error::{Result, SortError};
pub use sink::{Callbacks, NoopSink, RecordingSink, StepEvent, StepSink};
pub use sorters::bogo_sorter::BogoSorter;
pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;
pub use stepper::{RunStats, Stepper, Value};

/// The sorting algorithm must implement the trait `Sorter`.
///
/// Implementors only write [`Sorter::sort`], driving the array through the [`Stepper`]. The
/// provided [`Sorter::run`] validates the input, skips arrays with fewer than two elements and
/// hands back the counts of what was reported.
#[allow(async_fn_in_trait)]
pub trait Sorter {
    async fn sort<T, S>(&self, steps: &mut Stepper<'_, T, S>) -> Result<()>
    where
        T: Value,
        S: StepSink<T>;

    async fn run<T, S>(&self, slice: &mut [T], sink: &mut S, config: &RunConfig) -> Result<RunStats>
    where
        T: Value,
        S: StepSink<T>,
    {
        stepper::validate(slice)?;

        let mut steps = Stepper::new(slice, sink, config);
        if steps.len() > 1 {
            self.sort(&mut steps).await?;
        }
        Ok(steps.stats())
    }
}

/// Every algorithm the engine knows. A caller picks exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Bogo,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bogo,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Bogo => "Bogo Sort",
        }
    }

    /// Sorts `slice` with this algorithm. See [`sort`].
    pub async fn sort<T, S>(self, slice: &mut [T], sink: &mut S, config: &RunConfig) -> Result<RunStats>
    where
        T: Value,
        S: StepSink<T>,
    {
        odebug!(algorithm = self.name(), len = slice.len(), "sort started");

        let stats = match self {
            Algorithm::Bubble => BubbleSorter.run(slice, sink, config).await,
            Algorithm::Selection => SelectionSorter.run(slice, sink, config).await,
            Algorithm::Insertion => InsertionSorter.run(slice, sink, config).await,
            Algorithm::Merge => MergeSorter.run(slice, sink, config).await,
            Algorithm::Quick => QuickSorter.run(slice, sink, config).await,
            Algorithm::Heap => HeapSorter.run(slice, sink, config).await,
            Algorithm::Bogo => BogoSorter::from(config).run(slice, sink, config).await,
        }?;

        odebug!(algorithm = self.name(), ?stats, "sort finished");
        Ok(stats)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not match any [`Algorithm`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sorting algorithm: `{0}`")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts `bubble`, `bubble-sort`, `bubble_sort` or `Bubble Sort`, in any case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        let name = normalized.strip_suffix(" sort").unwrap_or(&normalized);

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| {
                algorithm
                    .name()
                    .to_ascii_lowercase()
                    .strip_suffix(" sort")
                    .is_some_and(|short| short == name.trim())
            })
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Sorts `slice` in place with `algorithm`, reporting every step to `sink` and waiting
/// [`RunConfig::delay`] after each one.
///
/// Empty and single-element arrays complete immediately without reporting anything. Values that
/// cannot be ordered (`NaN`) are rejected with [`SortError::InvalidInput`] before anything moves.
///
/// # Usage
///```
/// use orst_engine::{sort, Algorithm, RecordingSink, RunConfig};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut slice = [4, 2, 2, 8];
/// let mut sink = RecordingSink::default();
/// sort(Algorithm::Merge, &mut slice, &mut sink, &RunConfig::new()).await.unwrap();
/// assert_eq!(slice, [2, 2, 4, 8]);
/// # });
///```
pub async fn sort<T, S>(
    algorithm: Algorithm,
    slice: &mut [T],
    sink: &mut S,
    config: &RunConfig,
) -> Result<RunStats>
where
    T: Value,
    S: StepSink<T>,
{
    algorithm.sort(slice, sink, config).await
}
