use futures::future::{FutureExt, LocalBoxFuture};

use crate::stepper::order;
use crate::{Result, Sorter, StepSink, Stepper, Value};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use orst_engine::{MergeSorter, NoopSink, RunConfig, Sorter};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.run(&mut slice, &mut NoopSink, &RunConfig::new()).await.unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
/// # });
///```
///
/// # Algorithm
///
/// Top-down merge sort: split the range in half, sort both halves, then merge them back
/// together. The merge copies the range into a scratch buffer once, before writing anything,
/// and then fills the range from that copy.
///
/// Writing a value into the range is reported as a swap `(dest, src)`, where `src` is the
/// position the value held when the copy was taken. A value that lands exactly where it
/// already was is not reported. Ties go to the left half, so the sort is stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

impl Sorter for MergeSorter {
    async fn sort<T, S>(&self, steps: &mut Stepper<'_, T, S>) -> Result<()>
    where
        T: Value,
        S: StepSink<T>,
    {
        let end = steps.len() - 1;
        merge_sort(steps, 0, end).await
    }
}

// Sorts the inclusive range `start..=end`.
fn merge_sort<'a, 'b, T, S>(
    steps: &'a mut Stepper<'b, T, S>,
    start: usize,
    end: usize,
) -> LocalBoxFuture<'a, Result<()>>
where
    T: Value + 'a,
    S: StepSink<T> + 'a,
    'b: 'a,
{
    async move {
        if start >= end {
            return Ok(());
        }

        let mid = start + (end - start) / 2;
        merge_sort(steps, start, mid).await?;
        merge_sort(steps, mid + 1, end).await?;
        merge(steps, start, mid, end).await
    }
    .boxed_local()
}

// Merges the sorted runs `start..=mid` and `mid + 1..=end`.
async fn merge<T, S>(steps: &mut Stepper<'_, T, S>, start: usize, mid: usize, end: usize) -> Result<()>
where
    T: Value,
    S: StepSink<T>,
{
    let snapshot = steps.values()[start..=end].to_vec();
    let at = |index: usize| &snapshot[index - start];

    let (mut i, mut j, mut k) = (start, mid + 1, start);

    while i <= mid && j <= end {
        steps.announce_compare(i, j).await?;
        let src = if order(at(i), at(j), i, j)?.is_le() {
            i += 1;
            i - 1
        } else {
            j += 1;
            j - 1
        };
        place(steps, k, src, at(src)).await?;
        k += 1;
    }

    for src in (i..=mid).chain(j..=end) {
        place(steps, k, src, at(src)).await?;
        k += 1;
    }

    Ok(())
}

async fn place<T, S>(steps: &mut Stepper<'_, T, S>, dest: usize, src: usize, value: &T) -> Result<()>
where
    T: Value,
    S: StepSink<T>,
{
    if dest == src {
        return Ok(());
    }
    steps.place(dest, src, value.clone()).await
}
