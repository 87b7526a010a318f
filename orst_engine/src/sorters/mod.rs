pub mod bogo_sorter;
pub mod bubble_sorter;
pub mod heap_sorter;
pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod selection_sorter;

#[cfg(test)]
pub(crate) mod test_util {
    use crate::{RecordingSink, RunConfig, RunStats, Sorter, Value};

    /// Runs `sorter` over `slice` without delay, returning the recorded steps.
    pub fn run_recorded<T: Value>(sorter: &impl Sorter, slice: &mut [T]) -> (RunStats, RecordingSink) {
        let mut sink = RecordingSink::default();
        let stats = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(sorter.run(slice, &mut sink, &RunConfig::new()))
            .unwrap();
        (stats, sink)
    }

    pub fn run<T: Value>(sorter: &impl Sorter, slice: &mut [T]) {
        run_recorded(sorter, slice);
    }
}
