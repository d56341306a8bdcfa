use std::future::Future;

use escolaryx_models::email_address::EmailAddressWithName;

pub mod confirmation;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Send the given email over a fresh relay session.
    ///
    /// Returns whether the relay accepted the message.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Open a session to the relay and authenticate without sending anything.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub body: String,
    pub content_type: ContentType,
    /// Plain text version offered next to an html `body`.
    pub alternative_text: Option<String>,
    /// Resources referenced from the html `body` via `cid:` urls.
    pub inline_images: Vec<InlineImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Html,
}

#[derive(Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// Content-ID without angle brackets.
    pub content_id: String,
    /// MIME type, e.g. `image/png`.
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for InlineImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineImage")
            .field("content_id", &self.content_id)
            .field("mime_type", &self.mime_type)
            .field("data", &format_args!("<{} bytes>", self.data.len()))
            .finish()
    }
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    /// Expect exactly one call and hand the email to `inspect` instead of
    /// comparing it against a fixed value.
    pub fn with_send_inspect(
        mut self,
        inspect: impl FnOnce(&Email) + Send + 'static,
        result: bool,
    ) -> Self {
        self.expect_send().once().return_once(move |email| {
            inspect(&email);
            Box::pin(std::future::ready(Ok(result)))
        });
        self
    }

    pub fn with_send_error(mut self, error: anyhow::Error) -> Self {
        self.expect_send()
            .once()
            .return_once(move |_| Box::pin(std::future::ready(Err(error))));
        self
    }
}
