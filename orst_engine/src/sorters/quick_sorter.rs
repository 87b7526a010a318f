use crate::{Result, Sorter, StepSink, Stepper, Value};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use orst_engine::{NoopSink, QuickSorter, RunConfig, Sorter};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.run(&mut slice, &mut NoopSink, &RunConfig::new()).await.unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
/// # });
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm.
/// It works by selecting a 'pivot' element from
/// the array and partitioning the other elements into two sub
/// -arrays, according to whether they are less than
/// or greater than the pivot. The sub-arrays are then sorted recursively.
///
/// This version uses the Lomuto partition scheme and always takes the last element of the range
/// as the pivot, so already sorted or reversed input hits the quadratic worst case. Exchanges of
/// a position with itself are not reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

impl Sorter for QuickSorter {
    async fn sort<T, S>(&self, steps: &mut Stepper<'_, T, S>) -> Result<()>
    where
        T: Value,
        S: StepSink<T>,
    {
        // Pending inclusive ranges. The left range is pushed last so it is partitioned first.
        let mut ranges = vec![(0, steps.len() - 1)];

        while let Some((low, high)) = ranges.pop() {
            if low >= high {
                continue;
            }

            let pivot = partition(steps, low, high).await?;
            ranges.push((pivot + 1, high));
            if pivot > low {
                ranges.push((low, pivot - 1));
            }
        }
        Ok(())
    }
}

// Moves everything smaller than `slice[high]` in front of it and returns where the pivot ended
// up.
async fn partition<T, S>(steps: &mut Stepper<'_, T, S>, low: usize, high: usize) -> Result<usize>
where
    T: Value,
    S: StepSink<T>,
{
    let mut store = low;

    for scan in low..high {
        if steps.compare(scan, high).await?.is_lt() {
            if store != scan {
                steps.swap(store, scan).await?;
            }
            store += 1;
        }
    }

    if store != high {
        steps.swap(store, high).await?;
    }
    Ok(store)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sorters::test_util::{run, run_recorded};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        run(&QuickSorter, &mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        let (stats, _) = run_recorded(&QuickSorter, &mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
        assert_eq!(stats.comparisons, 36);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        run(&QuickSorter, &mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn worst_case_inputs_do_not_nest() {
        let mut reversed = (0..5000).rev().collect::<Vec<u32>>();
        run(&QuickSorter, &mut reversed);
        assert_eq!(reversed, (0..5000).collect::<Vec<_>>());

        let mut equal = vec![7u32; 3000];
        let (stats, _) = run_recorded(&QuickSorter, &mut equal);
        // Every partition moves the pivot from the end to the front of its range.
        assert_eq!(stats.swaps, 2999);
        assert_eq!(stats.comparisons, 3000 * 2999 / 2);
    }

    #[test]
    fn left_range_is_partitioned_first() {
        let mut slice = [2, 1, 5, 4, 3];
        let (_, sink) = run_recorded(&QuickSorter, &mut slice);
        assert_eq!(
            sink.comparisons().collect::<Vec<_>>(),
            vec![(0, 4), (1, 4), (2, 4), (3, 4), (0, 1), (3, 4)]
        );
        assert_eq!(sink.swaps().collect::<Vec<_>>(), vec![(2, 4), (0, 1)]);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn pivot_is_the_last_element() {
        let mut slice = [9, 1, 1, 1];
        let (_, sink) = run_recorded(&QuickSorter, &mut slice);

        let compares = sink.comparisons().collect::<Vec<_>>();
        assert_eq!(&compares[..3], &[(0, 3), (1, 3), (2, 3)]);
        assert_eq!(sink.swaps().next(), Some((0, 3)));
        assert!(sink
            .comparisons()
            .chain(sink.swaps())
            .all(|(i, j)| i < 4 && j < 4));
        assert_eq!(slice, [1, 1, 1, 9]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        run(&QuickSorter, &mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        run(&QuickSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        run(&QuickSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        run(&QuickSorter, &mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
