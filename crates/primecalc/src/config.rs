//! Application configuration from CLI flags and environment.

use clap::Parser;

/// PrimeCalc-rs — n-th prime calculator.
#[derive(Parser, Debug)]
#[command(name = "primecalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// 1-indexed position of the prime to compute.
    #[arg(short, long, env = "PRIMECALC_N", required_unless_present = "completion")]
    pub n: Option<u64>,

    /// Sieve method: atkin, eratosthenes, or all.
    #[arg(short, long, default_value = "eratosthenes")]
    pub method: String,

    /// Batch width for the sieving passes (defaults per method).
    #[arg(short = 'b', long)]
    pub batch_size: Option<usize>,

    /// Verbose output (includes a live progress bar).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Timeout duration (e.g., "5m", "1h").
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse timeout string into Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> std::time::Duration {
        parse_duration(&self.timeout).unwrap_or(std::time::Duration::from_secs(300))
    }
}

/// Parse a duration string like "5m", "1h", "30s".
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 3600))
    } else if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    }
}
