//! # Introduction
//!
//! A terminal frontend for [`orst_engine`]: random arrays, a live bar chart and a step-count
//! benchmark. The argument structs plug into the `orst` binary.

pub mod array;
pub mod benchmark;
pub mod chart;

use std::io::{self, Write};

use anyhow::bail;
use clap::{Args, ValueEnum};
use colored::Colorize;
use orst_engine::{Algorithm, RunConfig, RunStats, SortError};
use rand::{rngs::StdRng, SeedableRng};

use array::{random_array, DEFAULT_SIZE, SIZE_RANGE};
use chart::BarChart;

/// Arrays longer than this are not handed to bogo sort unless a budget caps it.
const BOGO_UNBOUNDED_LIMIT: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Repeated adjacent-pair passes
    Bubble,
    /// Pick the minimum of the rest, one swap per position
    Selection,
    /// Walk each element left one swap at a time
    Insertion,
    /// Top-down merge sort with a scratch copy per merge
    Merge,
    /// Lomuto partition, last element as pivot
    Quick,
    /// Max-heap, then repeated extraction
    Heap,
    /// Shuffle until sorted
    Bogo,
}

impl From<AlgorithmChoice> for Algorithm {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::Bubble => Algorithm::Bubble,
            AlgorithmChoice::Selection => Algorithm::Selection,
            AlgorithmChoice::Insertion => Algorithm::Insertion,
            AlgorithmChoice::Merge => Algorithm::Merge,
            AlgorithmChoice::Quick => Algorithm::Quick,
            AlgorithmChoice::Heap => Algorithm::Heap,
            AlgorithmChoice::Bogo => Algorithm::Bogo,
        }
    }
}

/// Watch one algorithm sort a random array. Install the `orst` crate and run
/// `orst visualize --help` to see what options are available
#[derive(Debug, Args)]
pub struct VisualizeArgs {
    /// The algorithm to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmChoice::Bubble)]
    algorithm: AlgorithmChoice,

    /// Number of bars
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE, value_parser = parse_size)]
    size: usize,

    /// Delay after every step, in milliseconds
    #[arg(short, long, default_value_t = 50)]
    speed: u64,

    /// Rows the tallest bar takes up
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Seed for the array and for bogo sort shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// Give up on bogo sort after this many shuffles
    #[arg(long)]
    bogo_budget: Option<u64>,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if SIZE_RANGE.contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "size must be between {} and {}",
            SIZE_RANGE.start(),
            SIZE_RANGE.end()
        ))
    }
}

impl VisualizeArgs {
    pub fn config(&self) -> RunConfig {
        let mut config = RunConfig::new().with_delay_ms(self.speed);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(budget) = self.bogo_budget {
            config = config.with_bogo_budget(budget);
        }
        config
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let algorithm = Algorithm::from(self.algorithm);
        if algorithm == Algorithm::Bogo
            && self.bogo_budget.is_none()
            && self.size > BOGO_UNBOUNDED_LIMIT
        {
            bail!(
                "Bogo sort on {} elements may never finish. Pass --bogo-budget or use --size {} or less",
                self.size,
                BOGO_UNBOUNDED_LIMIT
            );
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut values = random_array(self.size, &mut rng);
        let config = self.config();

        let mut chart = BarChart::new(io::stdout().lock(), &values, self.height);
        chart.start()?;

        match animate(algorithm, &mut values, &mut chart, &config).await {
            Ok(stats) => println!(
                "\n{} {} in {} comparisons and {} swaps",
                "==>".green().bold(),
                algorithm.name().bold(),
                stats.comparisons.to_string().bold().cyan(),
                stats.swaps.to_string().bold().cyan()
            ),
            Err(SortError::BudgetExhausted { rounds }) => println!(
                "\n{} {} gave up after {} shuffles",
                "==>".yellow().bold(),
                algorithm.name().bold(),
                rounds.to_string().bold().cyan()
            ),
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }
}

/// Sorts `values` on `chart` and draws the final frame. When the sort itself failed, that error
/// wins over a failed final frame.
pub async fn animate<W: Write>(
    algorithm: Algorithm,
    values: &mut [u32],
    chart: &mut BarChart<W>,
    config: &RunConfig,
) -> Result<RunStats, SortError> {
    let result = algorithm.sort(values, chart, config).await;
    let finished = chart.finish().map_err(SortError::sink);

    let stats = result?;
    finished?;
    Ok(stats)
}

/// Compare how many steps each algorithm takes on the same random arrays.
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Array sizes to measure
    #[arg(long, value_delimiter = ',', default_values_t = benchmark::DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Seed for the arrays
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl BenchArgs {
    pub async fn run(self) -> anyhow::Result<()> {
        benchmark::run_orst(&self.sizes, self.seed).await
    }
}

/// Prints every algorithm the engine knows.
pub fn print_algorithms() {
    for choice in AlgorithmChoice::value_variants() {
        let algorithm = Algorithm::from(*choice);
        let name = choice
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default();
        println!(
            "{} {:<10} {}",
            "==>".green().bold(),
            name.bold().cyan(),
            algorithm.name()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_outside_the_chart_are_rejected() {
        assert_eq!(parse_size("50"), Ok(50));
        assert_eq!(parse_size("5"), Ok(5));
        assert!(parse_size("4").is_err());
        assert!(parse_size("201").is_err());
        assert!(parse_size("lots").is_err());
    }

    #[test]
    fn every_choice_maps_to_its_algorithm() {
        for (choice, algorithm) in AlgorithmChoice::value_variants().iter().zip(Algorithm::ALL) {
            assert_eq!(Algorithm::from(*choice), algorithm);
        }
    }

    #[test]
    fn config_carries_the_flags() {
        let args = VisualizeArgs {
            algorithm: AlgorithmChoice::Bogo,
            size: 6,
            speed: 10,
            height: 20,
            seed: Some(3),
            bogo_budget: Some(100),
        };
        let config = args.config();

        assert_eq!(config.delay(), std::time::Duration::from_millis(10));
        assert_eq!(config.seed(), Some(3));
        assert_eq!(config.bogo_budget(), Some(100));
    }

    // Accepts a fixed number of writes, then reports a closed pipe.
    struct ClosesAfter(usize);

    impl Write for ClosesAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.0 == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.0 -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn sort_error_beats_a_failed_last_frame() {
        let mut values = [3, 1, 2];
        let config = RunConfig::new().with_bogo_budget(0).with_seed(1);
        // One frame for the first sortedness check, then the output closes.
        let mut chart = BarChart::new(ClosesAfter(1), &values, 4);

        let err = animate(Algorithm::Bogo, &mut values, &mut chart, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, SortError::BudgetExhausted { rounds: 0 }));
    }

    #[tokio::test]
    async fn failed_last_frame_is_reported_after_a_good_sort() {
        let mut values = [2, 1];
        let mut chart = BarChart::new(ClosesAfter(3), &values, 4);

        // compare, swap and render each draw one frame; the closing frame fails.
        let err = animate(Algorithm::Bubble, &mut values, &mut chart, &RunConfig::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SortError::Sink(_)));
        assert_eq!(values, [1, 2]);
    }

    #[tokio::test]
    async fn unbounded_bogo_on_large_arrays_is_refused() {
        let args = VisualizeArgs {
            algorithm: AlgorithmChoice::Bogo,
            size: 50,
            speed: 0,
            height: 20,
            seed: None,
            bogo_budget: None,
        };
        assert!(args.run().await.is_err());
    }
}
