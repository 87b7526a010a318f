use crate::{Result, Sorter, StepSink, Stepper, Value};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array one
/// item at a time.
///
/// Sorting is done in-place, by iterating up the array, growing the sorted list behind
/// it. At each array-position, it checks the value there against the largest value in the sorted
/// list (which happens to be next to it, in the previous array-position checked). If larger, it
/// leaves the element in place and moves to the next. If smaller, it walks the element to the
/// left one exchange at a time until its predecessor is no longer greater.
///
/// Each of those single exchanges is its own step, so moving an element `d` positions costs `d`
/// comparisons and `d` swaps, plus the comparison that stops it.
///
/// # Usage
///```
/// use orst_engine::{InsertionSorter, NoopSink, RunConfig, Sorter};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.run(&mut slice, &mut NoopSink, &RunConfig::new()).await.unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
/// # });
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    async fn sort<T, S>(&self, steps: &mut Stepper<'_, T, S>) -> Result<()>
    where
        T: Value,
        S: StepSink<T>,
    {
        for unsorted in 1..steps.len() {
            let mut i = unsorted;
            while i > 0 && steps.compare(i, i - 1).await?.is_lt() {
                steps.swap(i, i - 1).await?;
                i -= 1;
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
        run(&InsertionSorter, &mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        let (stats, _) = run_recorded(&InsertionSorter, &mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
        assert_eq!(stats.comparisons, 8);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..200).rev().collect::<Vec<_>>();
        run(&InsertionSorter, &mut slice);
        assert_eq!(slice, (1..200).collect::<Vec<_>>());
    }

    #[test]
    fn shifts_one_position_per_swap() {
        let mut slice = [2, 3, 1];
        let (_, sink) = run_recorded(&InsertionSorter, &mut slice);
        assert_eq!(
            sink.events(),
            &[
                StepEvent::Compare(1, 0),
                StepEvent::Compare(2, 1),
                StepEvent::Swap(2, 1),
                StepEvent::Compare(1, 0),
                StepEvent::Swap(1, 0),
            ]
        );
        assert_eq!(slice, [1, 2, 3]);
    }

    #[test]
    fn equal_elements_do_not_move() {
        let mut slice = [1, 1, 1];
        let (stats, _) = run_recorded(&InsertionSorter, &mut slice);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        run(&InsertionSorter, &mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        run(&InsertionSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        run(&InsertionSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        run(&InsertionSorter, &mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
