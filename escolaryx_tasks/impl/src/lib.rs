use escolaryx_di::Build;
use escolaryx_email_contracts::confirmation::ConfirmationEmailService;
use escolaryx_tasks_contracts::{ConfirmationTask, TaskScheduleError, TaskService};
use escolaryx_utils::trace_instrument;
use tokio::runtime::Handle;
use tracing::{error, info, info_span, Instrument};

/// Spawns one tokio task per scheduled confirmation on the runtime of the
/// caller. Tasks are detached and never awaited.
#[derive(Debug, Clone, Build)]
pub struct TaskServiceImpl<Confirmation> {
    confirmation: Confirmation,
}

impl<Confirmation> TaskService for TaskServiceImpl<Confirmation>
where
    Confirmation: ConfirmationEmailService + Clone,
{
    #[trace_instrument(skip(self, task), fields(recipient = %task.recipient))]
    fn schedule_confirmation(&self, task: ConfirmationTask) -> Result<(), TaskScheduleError> {
        let runtime = Handle::try_current()?;
        let span = info_span!("confirmation", recipient = %task.recipient);
        runtime.spawn(deliver_confirmation(self.confirmation.clone(), task).instrument(span));
        Ok(())
    }
}

/// Returns whether the email was delivered. Failures are logged, never raised.
async fn deliver_confirmation(
    confirmation: impl ConfirmationEmailService,
    task: ConfirmationTask,
) -> bool {
    let ConfirmationTask {
        submission,
        recipient,
        subject,
    } = task;

    match confirmation
        .send_confirmation(submission, recipient, subject)
        .await
    {
        Ok(()) => {
            info!("Delivered confirmation email");
            true
        }
        Err(err) => {
            let err = anyhow::Error::from(err);
            error!("Failed to deliver confirmation email: {err:#}");
            false
        }
    }
}
