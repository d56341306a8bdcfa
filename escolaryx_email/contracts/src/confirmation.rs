use std::future::Future;

use escolaryx_models::{contact::ContactSubmission, email_address::EmailAddress};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ConfirmationEmailService: Send + Sync + 'static {
    /// Compose the confirmation for `submission` and deliver it to
    /// `recipient`.
    fn send_confirmation(
        &self,
        submission: ContactSubmission,
        recipient: EmailAddress,
        subject: String,
    ) -> impl Future<Output = Result<(), ConfirmationSendError>> + Send;
}

#[derive(Debug, Error)]
pub enum ConfirmationSendError {
    #[error("Failed to load the banner image from {path}.")]
    Banner {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("The relay did not accept the confirmation email.")]
    Rejected,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockConfirmationEmailService {
    pub fn with_send_confirmation(
        mut self,
        submission: ContactSubmission,
        recipient: EmailAddress,
        subject: String,
        result: Result<(), ConfirmationSendError>,
    ) -> Self {
        self.expect_send_confirmation()
            .once()
            .with(
                mockall::predicate::eq(submission),
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(subject),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(result)));
        self
    }
}
