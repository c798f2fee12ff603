use crate::ports::outbound::SyncObserver;
use crate::shared::error::FetchError;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// StderrObserver adapter for reporting sync progress to stderr.
///
/// Implements the SyncObserver port, writing progress to stderr so it
/// never interferes with stdout. Uses indicatif for a per-year
/// progress bar over the errata fetch loop.
pub struct StderrObserver {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrObserver {
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet,
        }
    }

    fn println(&self, message: &str) {
        if self.quiet {
            return;
        }
        // Route through the live bar, if any, to keep the line intact.
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.println(message),
            None => eprintln!("{}", message),
        }
    }
}

impl SyncObserver for StderrObserver {
    fn on_run_started(&self, definition_count: usize) {
        self.println(&format!(
            "📖 Parsed OVAL document, found {} definition(s)",
            definition_count
        ));
    }

    fn on_year_started(&self, year: &str, ref_id_count: usize) {
        if self.quiet {
            return;
        }
        let pb = ProgressBar::new(ref_id_count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
                .expect("Failed to set progress bar template")
                .progress_chars("=>-"),
        );
        pb.set_message(format!("Fetching errata for {}", year));
        *self.progress_bar.borrow_mut() = Some(pb);
    }

    fn on_item_fetched(&self, _ref_id: &str) {
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.inc(1);
        }
    }

    fn on_item_skipped(&self, ref_id: &str, reason: &FetchError) {
        self.println(&format!("⚠️  Skipping {}: {}", ref_id, reason));
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.inc(1);
        }
    }

    fn on_year_persisted(&self, year: &str, count: usize) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
        self.println(&format!(
            "✅ Persisted {} errata record(s) for year {}",
            count, year
        ));
    }
}
