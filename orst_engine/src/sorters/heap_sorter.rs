use futures::future::{FutureExt, LocalBoxFuture};

use crate::{Result, Sorter, StepSink, Stepper, Value};

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
///
/// # Usage
///```
/// use orst_engine::{HeapSorter, NoopSink, RunConfig, Sorter};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut slice = [1, 5, 4, 2, 3];
/// HeapSorter.run(&mut slice, &mut NoopSink, &RunConfig::new()).await.unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
/// # });
///```
///
/// # Algorithm
///
/// The array is first rearranged bottom-up into a max-heap, where every parent at `i` is at
/// least as large as its children at `2i + 1` and `2i + 2`. The root, the largest value left, is
/// then exchanged with the last element of the heap, the heap shrinks by one and the root is
/// sifted back down. Repeating this fills the array from the back.
///
/// Sifting down compares each child that exists against the largest seen so far, then exchanges
/// the parent with the larger child if needed and keeps sifting from there. Even an already
/// sorted array gets exchanged around, since building the heap reverses it.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter;

impl Sorter for HeapSorter {
    async fn sort<T, S>(&self, steps: &mut Stepper<'_, T, S>) -> Result<()>
    where
        T: Value,
        S: StepSink<T>,
    {
        let n = steps.len();

        for root in (0..n / 2).rev() {
            heapify(steps, n, root).await?;
        }

        for last in (1..n).rev() {
            steps.swap(0, last).await?;
            heapify(steps, last, 0).await?;
        }
        Ok(())
    }
}

// Restores the max-heap property for the subtree at `root`, considering only the first `size`
// elements.
fn heapify<'a, 'b, T, S>(
    steps: &'a mut Stepper<'b, T, S>,
    size: usize,
    root: usize,
) -> LocalBoxFuture<'a, Result<()>>
where
    T: Value + 'a,
    S: StepSink<T> + 'a,
    'b: 'a,
{
    async move {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < size && steps.compare(left, largest).await?.is_gt() {
            largest = left;
        }

        if right < size && steps.compare(right, largest).await?.is_gt() {
            largest = right;
        }

        if largest != root {
            steps.swap(root, largest).await?;
            heapify(steps, size, largest).await?;
        }
        Ok(())
    }
    .boxed_local()
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sorters::test_util::{run, run_recorded};
    use crate::StepEvent;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        run(&HeapSorter, &mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        run(&HeapSorter, &mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        run(&HeapSorter, &mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn missing_children_are_not_compared() {
        let mut slice = [1, 2];
        let (_, sink) = run_recorded(&HeapSorter, &mut slice);
        assert_eq!(
            sink.events(),
            &[
                StepEvent::Compare(1, 0),
                StepEvent::Swap(0, 1),
                StepEvent::Swap(0, 1),
            ]
        );
        assert_eq!(slice, [1, 2]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        run(&HeapSorter, &mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        run(&HeapSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        run(&HeapSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        run(&HeapSorter, &mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
