//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial starts from a fully blocked grid and opens sites chosen
//! uniformly at random until the system percolates; the fraction of open
//! sites at that point is an estimate of the percolation threshold.

use super::percolation::{num_sites, Percolation, PercolationError};
use dsi_progress_logger::ProgressLog;
use kahan::KahanSum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::ThreadPool;

/// The result of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// The side of the grid.
    pub n: usize,
    /// The number of sites opened.
    pub opened: usize,
    /// The number of random sites drawn, including those already open.
    pub attempts: usize,
    /// Whether the system percolates at the end of the trial. It does not
    /// only if the trial was stopped by its budget.
    pub percolated: bool,
}

impl TrialOutcome {
    /// Returns the fraction of open sites.
    pub fn threshold(&self) -> f64 {
        self.opened as f64 / (self.n * self.n) as f64
    }
}

/// Runs a single trial on an *n*×*n* grid.
///
/// Sites are drawn uniformly at random using `rng`. The trial stops as soon
/// as the system percolates or, if `max_open` is given, as soon as more than
/// `max_open` sites have been opened.
pub fn run_trial(
    n: usize,
    rng: &mut impl Rng,
    max_open: Option<usize>,
) -> Result<TrialOutcome, PercolationError> {
    let mut perc = Percolation::new(n)?;
    let mut attempts = 0;

    while !perc.percolates() {
        if max_open.is_some_and(|max_open| perc.num_open_sites() > max_open) {
            break;
        }
        attempts += 1;
        let row = rng.random_range(1..=n);
        let col = rng.random_range(1..=n);
        if perc.is_open(row, col)? {
            continue;
        }
        perc.open(row, col)?;
    }

    Ok(TrialOutcome {
        n,
        opened: perc.num_open_sites(),
        attempts,
        percolated: perc.percolates(),
    })
}

/// A batch of independent trials.
///
/// Every trial owns its grid and a [`StdRng`] seeded with the batch seed plus
/// the index of the trial, so outcomes do not depend on the number of threads
/// running the batch.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use percolation_algo::algo::trials::{Trials, TrialStats};
///
/// let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build()?;
/// let outcomes = Trials::new(20).num_trials(10).seed(0).run(&pool, no_logging![])?;
/// assert_eq!(outcomes.len(), 10);
/// assert!(outcomes.iter().all(|outcome| outcome.percolated));
///
/// let stats = TrialStats::from_outcomes(&outcomes);
/// assert!(stats.mean > 0.3 && stats.mean < 0.9);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Trials {
    n: usize,
    num_trials: usize,
    seed: u64,
    max_open: Option<usize>,
}

impl Trials {
    /// Creates a batch of one trial on an *n*×*n* grid with seed 0 and no
    /// budget.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            num_trials: 1,
            seed: 0,
            max_open: None,
        }
    }

    /// Sets the number of trials.
    pub fn num_trials(mut self, num_trials: usize) -> Self {
        self.num_trials = num_trials;
        self
    }

    /// Sets the base seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Stops each trial after more than `max_open` sites have been opened.
    pub fn max_open(mut self, max_open: usize) -> Self {
        self.max_open = Some(max_open);
        self
    }

    /// Stops each trial after more than the given fraction of the sites
    /// has been opened.
    ///
    /// # Errors
    ///
    /// [`PercolationError::InvalidArgument`] if the grid size is invalid.
    pub fn max_open_fraction(self, fraction: f64) -> Result<Self, PercolationError> {
        let num_sites = num_sites(self.n)?;
        Ok(self.max_open((fraction * num_sites as f64) as usize))
    }

    /// Runs the trials on the given thread pool.
    ///
    /// Outcomes are returned in trial order.
    pub fn run(
        &self,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<Vec<TrialOutcome>, PercolationError> {
        // Fail before spawning anything
        num_sites(self.n)?;

        pl.item_name("trial");
        pl.expected_updates(Some(self.num_trials));
        pl.start(format!(
            "Running {} trials on a {}x{} grid...",
            self.num_trials, self.n, self.n
        ));

        let outcomes = thread_pool.install(|| {
            (0..self.num_trials)
                .into_par_iter()
                .map(|trial| {
                    let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(trial as u64));
                    run_trial(self.n, &mut rng, self.max_open)
                })
                .collect::<Result<Vec<_>, _>>()
        })?;

        pl.done_with_count(self.num_trials);
        Ok(outcomes)
    }
}

/// Statistics about the thresholds of a batch of trials.
///
/// Only trials that percolated contribute to the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialStats {
    pub num_trials: usize,
    pub num_percolated: usize,
    /// Sample mean of the thresholds; NaN if no trial percolated.
    pub mean: f64,
    /// Sample standard deviation of the thresholds; NaN if fewer than two
    /// trials percolated.
    pub stddev: f64,
    /// Lower end of the 95% confidence interval.
    pub confidence_lo: f64,
    /// Upper end of the 95% confidence interval.
    pub confidence_hi: f64,
}

const CONFIDENCE_95: f64 = 1.96;

impl TrialStats {
    pub fn from_outcomes(outcomes: &[TrialOutcome]) -> Self {
        let thresholds: Vec<f64> = outcomes
            .iter()
            .filter(|outcome| outcome.percolated)
            .map(TrialOutcome::threshold)
            .collect();
        let count = thresholds.len() as f64;

        let mut sum = KahanSum::new();
        for &t in &thresholds {
            sum += t;
        }
        let mean = sum.sum() / count;

        let mut squares = KahanSum::new();
        for &t in &thresholds {
            squares += (t - mean) * (t - mean);
        }
        let stddev = if thresholds.len() < 2 {
            f64::NAN
        } else {
            (squares.sum() / (count - 1.0)).sqrt()
        };

        let half_width = CONFIDENCE_95 * stddev / count.sqrt();
        Self {
            num_trials: outcomes.len(),
            num_percolated: thresholds.len(),
            mean,
            stddev,
            confidence_lo: mean - half_width,
            confidence_hi: mean + half_width,
        }
    }
}
