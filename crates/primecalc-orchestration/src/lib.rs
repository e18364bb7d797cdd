//! # primecalc-orchestration
//!
//! Sieve selection, execution, and result analysis for PrimeCalc.

pub mod interfaces;
pub mod orchestrator;
pub mod selection;

pub use interfaces::{ComputationResult, ProgressReporter, ResultPresenter, SieveOutcome};
pub use orchestrator::{analyze_comparison_results, execute_sieves, validate_request};
pub use selection::get_sieves_to_run;
