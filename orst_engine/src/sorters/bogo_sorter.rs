use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Result, RunConfig, SortError, Sorter, StepSink, Stepper, Value};

/// An implementation of [Bogo Sort](https://en.wikipedia.org/wiki/Bogosort)
///
/// # Explanation
///
/// Check whether the array is sorted. If it is not, shuffle it and check again. The expected
/// number of rounds grows factorially with the length of the array and there is no upper bound,
/// so anything beyond a handful of elements should be given a `budget`.
///
/// Each round reports one comparison `(0, n - 1)` standing for the whole "is it sorted" check,
/// followed by a full [Fisher–Yates shuffle](https://en.wikipedia.org/wiki/Fisher%E2%80%93Yates_shuffle)
/// that reports one swap per shuffle step. The final, successful check is reported as well.
///
/// # Usage
///```
/// use orst_engine::{BogoSorter, NoopSink, RunConfig, Sorter};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let mut slice = [3, 1, 2];
/// let sorter = BogoSorter { budget: Some(10_000), seed: Some(42) };
/// let stats = sorter.run(&mut slice, &mut NoopSink, &RunConfig::new()).await.unwrap();
///
/// assert_eq!(slice, [1, 2, 3]);
/// assert_eq!(stats.comparisons, stats.rounds + 1);
/// # });
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct BogoSorter {
    /// Most shuffle rounds to try before giving up with [`SortError::BudgetExhausted`].
    pub budget: Option<u64>,
    /// Seed for the shuffles. Fresh entropy when absent.
    pub seed: Option<u64>,
}

impl From<&RunConfig> for BogoSorter {
    fn from(config: &RunConfig) -> Self {
        Self {
            budget: config.bogo_budget(),
            seed: config.seed(),
        }
    }
}

impl Sorter for BogoSorter {
    async fn sort<T, S>(&self, steps: &mut Stepper<'_, T, S>) -> Result<()>
    where
        T: Value,
        S: StepSink<T>,
    {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let n = steps.len();
        let mut rounds = 0;

        loop {
            steps.announce_compare(0, n - 1).await?;
            if steps.is_sorted()? {
                return Ok(());
            }

            if self.budget.is_some_and(|budget| rounds >= budget) {
                return Err(SortError::BudgetExhausted { rounds });
            }

            for i in (1..n).rev() {
                let j = rng.gen_range(0..=i);
                steps.swap(i, j).await?;
            }
            steps.record_round();
            rounds += 1;
        }
    }
}
