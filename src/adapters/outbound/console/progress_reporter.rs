use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// ConsoleProgressReporter adapter for reporting progress to the terminal
///
/// This adapter implements the ProgressReporter port. Progress, warnings and
/// spinners go to stderr; completion messages (the saved file paths) go to
/// stdout so scripts can pick them up.
/// Long-running tasks are shown with an indicatif spinner.
pub struct ConsoleProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn create_spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn start_task(&self, message: &str) {
        let mut spinner = self.spinner.borrow_mut();
        if let Some(previous) = spinner.take() {
            previous.finish_and_clear();
        }
        *spinner = Some(Self::create_spinner(message));
    }

    fn finish_task(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_task();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_task();
        println!("{}", message);
    }
}
