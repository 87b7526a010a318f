use crate::{Result, Sorter, StepSink, Stepper, Value};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
///
/// # Usage
///```
/// use orst_engine::{BubbleSorter, NoopSink, RunConfig, Sorter};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter.run(&mut slice, &mut NoopSink, &RunConfig::new()).await.unwrap();
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
/// # });
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order. After every pass the
/// largest remaining element has "bubbled" to the end, so the
/// next pass can stop one position earlier.
///
/// This version always runs all `n` passes. A pass without any swap does not end the sort
/// early, so every comparison of every pass shows up.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    async fn sort<T, S>(&self, steps: &mut Stepper<'_, T, S>) -> Result<()>
    where
        T: Value,
        S: StepSink<T>,
    {
        let n = steps.len();

        for pass in 0..n {
            for j in 0..(n - pass - 1) {
                if steps.compare(j, j + 1).await?.is_gt() {
                    steps.swap(j, j + 1).await?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::sorters::test_util::{run, run_recorded};

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        run(&BubbleSorter, &mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        let (stats, _) = run_recorded(&BubbleSorter, &mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
        assert_eq!(stats.comparisons, 36);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..200).rev().collect::<Vec<_>>();
        run(&BubbleSorter, &mut slice);
        assert_eq!(slice, (1..200).collect::<Vec<_>>());
    }

    #[test]
    fn swaps_follow_each_pass() {
        let mut slice = [5, 3, 8, 1];
        let (_, sink) = run_recorded(&BubbleSorter, &mut slice);
        assert_eq!(
            sink.swaps().collect::<Vec<_>>(),
            vec![(0, 1), (2, 3), (1, 2), (0, 1)]
        );
        assert_eq!(slice, [1, 3, 5, 8]);
    }

    #[test]
    fn simple_edge_cases() {
        let mut one = vec![1];
        run(&BubbleSorter, &mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![1, 2];
        run(&BubbleSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut two = vec![2, 1];
        run(&BubbleSorter, &mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        run(&BubbleSorter, &mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }
}
