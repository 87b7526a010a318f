//! Step counts for every algorithm over the same random arrays.

use std::time::{Duration, Instant};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use orst_engine::{Algorithm, NoopSink, RunConfig, RunStats, SortError};
use prettytable::{row, Table};
use rand::{rngs::StdRng, SeedableRng};

use crate::array::random_array;

const TEN_THOUSAND: usize = 10_000;
const BOGO_LIMIT: usize = 8;

pub const DEFAULT_SIZES: [usize; 3] = [10, 100, 1_000];

/// One algorithm on one array.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub stats: RunStats,
    pub elapsed: Duration,
}

/// Sizes past which an algorithm is not worth waiting for.
pub fn worth_running(algorithm: Algorithm, n: usize) -> bool {
    match algorithm {
        Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => n <= TEN_THOUSAND,
        Algorithm::Bogo => n <= BOGO_LIMIT,
        Algorithm::Merge | Algorithm::Quick | Algorithm::Heap => true,
    }
}

/// Sorts a copy of `values` with every algorithm worth running at that size.
pub async fn measure(values: &[u32], seed: u64) -> Result<Vec<Measurement>, SortError> {
    let config = RunConfig::new().with_seed(seed);
    let mut measurements = Vec::new();

    for algorithm in Algorithm::ALL {
        if !worth_running(algorithm, values.len()) {
            continue;
        }

        let mut slice = values.to_vec();
        let now = Instant::now();
        let stats = algorithm.sort(&mut slice, &mut NoopSink, &config).await?;

        measurements.push(Measurement {
            algorithm,
            stats,
            elapsed: now.elapsed(),
        });
    }

    Ok(measurements)
}

pub async fn run_orst(sizes: &[usize], seed: u64) -> anyhow::Result<()> {
    let mut random = StdRng::seed_from_u64(seed);

    let pb = ProgressBar::new(sizes.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "Benchmark -> {spinner:.green} [{elapsed_precise}] [{bar:50.cyan/blue}] On Size: ({pos}/{len}, ETA: {eta})",
    )?);

    let mut tables = Vec::with_capacity(sizes.len());
    for &n in sizes {
        let values = random_array(n, &mut random);
        let measurements = measure(&values, seed).await?;
        tables.push((n, table_for(n, &measurements)));
        pb.inc(1);
    }
    pb.finish_and_clear();

    for (n, table) in tables {
        println!(
            "{} {}",
            "List Size -> ".bold().underline().blue(),
            n.to_string().bold()
        );
        table.printstd();
        println!();
    }

    Ok(())
}

fn table_for(n: usize, measurements: &[Measurement]) -> Table {
    let mut table = Table::new();
    table.add_row(row![
        "Sorter".bold(),
        "Comparisons Made".bold(),
        "Swaps Made".bold(),
        "Time Taken".bold()
    ]);

    for algorithm in Algorithm::ALL {
        match measurements.iter().find(|m| m.algorithm == algorithm) {
            Some(m) => table.add_row(row![
                algorithm.name(),
                m.stats.comparisons.to_string(),
                m.stats.swaps.to_string(),
                format!("{:?}", m.elapsed)
            ]),
            None => table.add_row(row![
                algorithm.name(),
                "Not Doing It".red(),
                "-",
                format!("It is Stupid at {n} elements")
            ]),
        };
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_sorts_stop_at_ten_thousand() {
        assert!(worth_running(Algorithm::Bubble, TEN_THOUSAND));
        assert!(!worth_running(Algorithm::Insertion, TEN_THOUSAND + 1));
        assert!(worth_running(Algorithm::Quick, TEN_THOUSAND * 10));
        assert!(!worth_running(Algorithm::Bogo, 9));
    }

    #[tokio::test]
    async fn measures_every_algorithm_on_small_arrays() {
        let values = random_array(8, &mut StdRng::seed_from_u64(2));
        let measurements = measure(&values, 2).await.unwrap();

        assert_eq!(measurements.len(), Algorithm::ALL.len());
        for m in &measurements {
            assert!(m.stats.comparisons > 0, "{} compared nothing", m.algorithm);
        }
    }

    #[tokio::test]
    async fn skips_what_is_not_worth_running() {
        let values = random_array(100, &mut StdRng::seed_from_u64(2));
        let measurements = measure(&values, 2).await.unwrap();

        assert!(measurements.iter().all(|m| m.algorithm != Algorithm::Bogo));
        assert_eq!(table_for(100, &measurements).len(), Algorithm::ALL.len() + 1);
    }
}
