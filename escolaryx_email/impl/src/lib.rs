use anyhow::anyhow;
use escolaryx_email_contracts::{ContentType, Email, EmailService};
use escolaryx_models::email_address::EmailAddress;
use lettre::{
    message::{header, Attachment, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub mod confirmation;

/// Sends emails through an authenticated STARTTLS relay.
///
/// Every call to [`EmailService::send`] opens its own SMTP session and closes
/// it again afterwards, whether the transmission succeeded or not.
#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    /// The sender address doubles as the SMTP username.
    pub fn new(host: &str, port: u16, from: EmailAddress, password: String) -> anyhow::Result<Self> {
        let credentials = Credentials::new(from.as_str().into(), password);
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(credentials)
            .build();

        Ok(Self { from, transport })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = build_message(&self.from, email)?;

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(from: &EmailAddress, email: Email) -> anyhow::Result<Message> {
    let builder = Message::builder()
        .from(from.0.clone().into())
        .to(email.recipient.0)
        .subject(email.subject);

    let body = match email.content_type {
        ContentType::Text => SinglePart::plain(email.body),
        ContentType::Html => SinglePart::html(email.body),
    };

    if email.inline_images.is_empty() && email.alternative_text.is_none() {
        return builder.singlepart(body).map_err(Into::into);
    }

    let related = email.inline_images.into_iter().try_fold(
        MultiPart::related().singlepart(body),
        |related, image| {
            let content_type = header::ContentType::parse(&image.mime_type)?;
            let part = Attachment::new_inline(image.content_id).body(image.data, content_type);
            anyhow::Ok(related.singlepart(part))
        },
    )?;

    let message = match email.alternative_text {
        Some(text) => builder.multipart(
            MultiPart::alternative()
                .singlepart(SinglePart::plain(text))
                .multipart(related),
        )?,
        None => builder.multipart(related)?,
    };

    Ok(message)
}
