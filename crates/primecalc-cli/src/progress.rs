//! Live progress display fed by a channel observer.

use crossbeam_channel::Receiver;
use indicatif::{ProgressBar, ProgressStyle};

use primecalc_core::progress::ProgressUpdate;

/// Drain progress updates from `rx` into a terminal progress bar until the
/// channel closes (all senders dropped).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn run_progress_bar(rx: &Receiver<ProgressUpdate>) {
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {percent:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for update in rx.iter() {
        bar.set_position((update.progress * 100.0) as u64);
        bar.set_message(update.algorithm);
        if update.done {
            bar.set_position(100);
        }
    }
    bar.finish_and_clear();
}
