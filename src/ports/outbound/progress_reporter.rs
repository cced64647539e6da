/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to the terminal)
/// to provide user feedback during long-running operations.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate task such as a download
    ///
    /// The task stays active until `finish_task` is called.
    fn start_task(&self, message: &str);

    /// Finishes the task started by `start_task`, if any
    fn finish_task(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// Completion messages name the files produced and are meant for stdout.
    fn report_completion(&self, message: &str);
}
