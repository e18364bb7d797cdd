//! CLI result presenter.

use std::time::Duration;

use primecalc_orchestration::interfaces::{ComputationResult, ResultPresenter, SieveOutcome};

use crate::output::{format_duration, format_number, print_error};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        outcome: &SieveOutcome,
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            println!("{}", outcome.value);
            return;
        }

        println!("Method: {algorithm}");
        println!("Duration: {}", format_duration(duration));

        if details || self.verbose {
            println!(
                "Primes produced: {}",
                format_number(outcome.primes_found as u64)
            );
        }

        println!(
            "p({}) = {}",
            format_number(n),
            format_number(outcome.value)
        );
    }

    fn present_comparison(&self, results: &[ComputationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            println!(
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
