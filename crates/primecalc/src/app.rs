//! Application entry point and dispatch.

use anyhow::Result;

use primecalc_cli::output::write_to_file;
use primecalc_cli::presenter::CLIResultPresenter;
use primecalc_core::observers::ChannelObserver;
use primecalc_core::options::Options;
use primecalc_core::progress::CancellationToken;
use primecalc_core::registry::DefaultFactory;
use primecalc_orchestration::interfaces::ResultPresenter;
use primecalc_orchestration::orchestrator::{
    analyze_comparison_results, execute_sieves, execute_sieves_with_observer, validate_request,
};
use primecalc_orchestration::selection::get_sieves_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        primecalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let Some(n) = config.n else {
        anyhow::bail!("missing required argument: -n");
    };

    let opts = Options {
        batch_size: config.batch_size,
        verbose: config.verbose,
        details: config.details,
    };
    opts.validate()?;

    // All validation happens before any sieve executes
    let factory = DefaultFactory::new();
    let sieves = get_sieves_to_run(&config.method, &factory)?;
    validate_request(n, &sieves)?;

    let cancel = CancellationToken::new();

    // Set up Ctrl+C handler
    let cancel_clone = cancel.clone();
    ctrlc_handler(cancel_clone);

    let timeout = Some(config.timeout_duration());

    let results = if config.verbose && !config.quiet {
        // Feed a live progress bar from a channel observer
        let (tx, rx) = crossbeam_channel::unbounded();
        let observer = ChannelObserver::new(tx);
        let bar = std::thread::spawn(move || primecalc_cli::progress::run_progress_bar(&rx));
        let results =
            execute_sieves_with_observer(&sieves, n, &opts, &cancel, timeout, &observer);
        // Dropping the observer closes the channel so the bar thread exits
        drop(observer);
        let _ = bar.join();
        results
    } else {
        execute_sieves(&sieves, n, &opts, &cancel, timeout)
    };

    // Analyze results
    if results.len() > 1 {
        if let Err(e) = analyze_comparison_results(&results) {
            eprintln!("Warning: {e}");
        }
    }

    // Present results
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    for result in &results {
        match &result.outcome {
            Ok(outcome) => presenter.present_result(
                &result.algorithm,
                n,
                outcome,
                result.duration,
                config.details,
            ),
            Err(error) => presenter.present_error(&format!("{}: {error}", result.algorithm)),
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(outcome) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, outcome.value)?;
        }
    }

    // A run with no successful result is a failure
    if results.iter().all(|r| r.outcome.is_err()) {
        if let Some(error) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
            return Err(error.clone().into());
        }
    }

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .expect("Error setting Ctrl+C handler");
}
