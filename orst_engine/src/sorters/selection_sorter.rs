use crate::{Result, Sorter, StepSink, Stepper, Value};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use orst_engine::{NoopSink, RunConfig, SelectionSorter, Sorter};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.run(&mut slice, &mut NoopSink, &RunConfig::new()).await.unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
/// # });
///```
/// # Algorithm
///
/// The algorithm divides the input list into two parts:
/// a sorted sublist of items which is built
/// up from left to right at the front of the list and a sublist of
/// the remaining unsorted items. It finds the smallest
/// element in the unsorted sublist, exchanges it with the leftmost
/// unsorted element, and moves the sublist boundary one element to the right.
///
/// Every candidate in the unsorted part is compared against the smallest seen so far. The
/// exchange is skipped entirely when the smallest element is already in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

impl Sorter for SelectionSorter {
    async fn sort<T, S>(&self, steps: &mut Stepper<'_, T, S>) -> Result<()>
    where
        T: Value,
        S: StepSink<T>,
    {
        let n = steps.len();

        for unsorted in 0..(n - 1) {
            let mut smallest_in_rest = unsorted;
            for i in (unsorted + 1)..n {
                if steps.compare(smallest_in_rest, i).await?.is_gt() {
                    smallest_in_rest = i;
                }
            }
            if unsorted != smallest_in_rest {
                steps.swap(unsorted, smallest_in_rest).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sorters::test_util::{run, run_recorded};
    use crate::StepEvent;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        run(&SelectionSorter, &mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        let (stats, _) = run_recorded(&SelectionSorter, &mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
        assert_eq!(stats.comparisons, 36);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.renders, 0);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..200).rev().collect::<Vec<_>>();
        run(&SelectionSorter, &mut slice);
        assert_eq!(slice, (1..200).collect::<Vec<_>>());
    }

    #[test]
    fn one_swap_per_misplaced_position() {
        let mut slice = [2, 1, 3];
        let (_, sink) = run_recorded(&SelectionSorter, &mut slice);
        assert_eq!(
            sink.events(),
            &[
                StepEvent::Compare(0, 1),
                StepEvent::Compare(1, 2),
                StepEvent::Swap(0, 1),
                StepEvent::Compare(1, 2),
            ]
        );
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        run(&SelectionSorter, &mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        run(&SelectionSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        run(&SelectionSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        run(&SelectionSorter, &mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
