use escolaryx_models::{contact::ContactSubmission, email_address::EmailAddress};
use thiserror::Error;

/// Runs work after the current request has been answered.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TaskService: Send + Sync + 'static {
    /// Schedule the delivery of a confirmation email.
    ///
    /// Returns as soon as the task has been handed to the executor. The
    /// outcome of the delivery is only logged.
    fn schedule_confirmation(&self, task: ConfirmationTask) -> Result<(), TaskScheduleError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationTask {
    pub submission: ContactSubmission,
    pub recipient: EmailAddress,
    pub subject: String,
}

#[derive(Debug, Error)]
pub enum TaskScheduleError {
    #[error("No async runtime is available to run the task.")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

#[cfg(feature = "mock")]
impl MockTaskService {
    pub fn with_schedule_confirmation(
        mut self,
        task: ConfirmationTask,
        result: Result<(), TaskScheduleError>,
    ) -> Self {
        self.expect_schedule_confirmation()
            .once()
            .with(mockall::predicate::eq(task))
            .return_once(move |_| result);
        self
    }
}
