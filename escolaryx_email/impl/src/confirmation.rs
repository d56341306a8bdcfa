use std::{path::PathBuf, sync::Arc};

use escolaryx_di::Build;
use escolaryx_email_contracts::{
    confirmation::{ConfirmationEmailService, ConfirmationSendError},
    ContentType, Email, EmailService, InlineImage,
};
use escolaryx_models::{contact::ContactSubmission, email_address::EmailAddress};
use escolaryx_templates_contracts::{
    ContactConfirmationTemplate, ContactConfirmationTextTemplate, TemplateService,
};
use escolaryx_utils::trace_instrument;

/// Content-ID under which the banner is attached and referenced from the
/// html body.
pub const BANNER_CONTENT_ID: &str = "banner_image";

#[derive(Debug, Clone, Build)]
pub struct ConfirmationEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ConfirmationEmailServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ConfirmationEmailServiceConfig {
    /// Read on every send, relative to the working directory.
    pub banner_path: Arc<PathBuf>,
}

impl<EmailS, TemplateS> ConfirmationEmailService for ConfirmationEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    #[trace_instrument(skip(self, submission, recipient), fields(%recipient))]
    async fn send_confirmation(
        &self,
        submission: ContactSubmission,
        recipient: EmailAddress,
        subject: String,
    ) -> Result<(), ConfirmationSendError> {
        let banner_path = &*self.config.banner_path;
        let banner = tokio::fs::read(banner_path)
            .await
            .map_err(|source| ConfirmationSendError::Banner {
                path: banner_path.display().to_string(),
                source,
            })?;

        let template = ContactConfirmationTemplate {
            name: submission.name.into_inner(),
            last_name: submission.last_name.into_inner(),
            message: submission.message.into_inner(),
            banner_cid: BANNER_CONTENT_ID.into(),
        };
        let body = self.template.render(&template)?;
        let alternative_text = self
            .template
            .render(&ContactConfirmationTextTemplate(template))?;

        let email = Email {
            recipient: recipient.into(),
            subject,
            body,
            content_type: ContentType::Html,
            alternative_text: Some(alternative_text),
            inline_images: vec![InlineImage {
                content_id: BANNER_CONTENT_ID.into(),
                mime_type: image_mime_type(banner_path).into(),
                data: banner,
            }],
        };

        if !self.email.send(email).await? {
            return Err(ConfirmationSendError::Rejected);
        }

        Ok(())
    }
}

fn image_mime_type(path: &std::path::Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|x| x.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use escolaryx_demo::{ANA, MALLORY, SUBJECT};
    use escolaryx_email_contracts::MockEmailService;
    use escolaryx_templates_contracts::MockTemplateService;
    use escolaryx_templates_impl::TemplateServiceImpl;
    use escolaryx_utils::assert_matches;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const BANNER: &[u8] = b"\x89PNG\r\n\x1a\nbanner";

    fn banner_dir() -> (TempDir, ConfirmationEmailServiceConfig) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("escolaryx-banner.png");
        std::fs::write(&path, BANNER).unwrap();
        let config = ConfirmationEmailServiceConfig {
            banner_path: Arc::new(path),
        };
        (dir, config)
    }

    fn ana_template() -> ContactConfirmationTemplate {
        ContactConfirmationTemplate {
            name: "Ana".into(),
            last_name: "Lopez".into(),
            message: "Hello, I need more info please.".into(),
            banner_cid: "banner_image".into(),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let (_dir, config) = banner_dir();

        let template = MockTemplateService::new()
            .with_render(ana_template(), "<html>".into())
            .with_render(ContactConfirmationTextTemplate(ana_template()), "text".into());

        let email = MockEmailService::new().with_send(
            Email {
                recipient: "ana@example.com".parse().unwrap(),
                subject: SUBJECT.into(),
                body: "<html>".into(),
                content_type: ContentType::Html,
                alternative_text: Some("text".into()),
                inline_images: vec![InlineImage {
                    content_id: "banner_image".into(),
                    mime_type: "image/png".into(),
                    data: BANNER.into(),
                }],
            },
            true,
        );

        let sut = ConfirmationEmailServiceImpl {
            email,
            template,
            config,
        };

        // Act
        let result = sut
            .send_confirmation(ANA.clone(), ANA.email.clone(), SUBJECT.into())
            .await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn composed_message_contents() {
        // Arrange
        let (_dir, config) = banner_dir();
        let sent = Arc::new(Mutex::new(None));

        let email = MockEmailService::new().with_send_inspect(
            {
                let sent = Arc::clone(&sent);
                move |email| *sent.lock().unwrap() = Some(email.clone())
            },
            true,
        );

        let sut = ConfirmationEmailServiceImpl {
            email,
            template: TemplateServiceImpl::default(),
            config,
        };

        // Act
        let result = sut
            .send_confirmation(ANA.clone(), ANA.email.clone(), SUBJECT.into())
            .await;

        // Assert
        result.unwrap();
        let email = sent.lock().unwrap().take().unwrap();
        assert_eq!(email.recipient.0.email.to_string(), "ana@example.com");
        assert_eq!(email.subject, SUBJECT);
        assert!(email.body.contains("Ana Lopez"));
        assert!(email.body.contains("Hello, I need more info please."));
        assert!(email.body.contains("cid:banner_image"));
        let text = email.alternative_text.unwrap();
        assert!(text.contains("Ana Lopez"));
        assert!(text.contains("Hello, I need more info please."));
        assert_eq!(email.inline_images.len(), 1);
        assert_eq!(email.inline_images[0].content_id, BANNER_CONTENT_ID);
        assert_eq!(email.inline_images[0].data, BANNER);
    }

    #[tokio::test]
    async fn html_body_escapes_user_input() {
        // Arrange
        let (_dir, config) = banner_dir();
        let sent = Arc::new(Mutex::new(None));

        let email = MockEmailService::new().with_send_inspect(
            {
                let sent = Arc::clone(&sent);
                move |email| *sent.lock().unwrap() = Some(email.body.clone())
            },
            true,
        );

        let sut = ConfirmationEmailServiceImpl {
            email,
            template: TemplateServiceImpl::default(),
            config,
        };

        // Act
        let result = sut
            .send_confirmation(MALLORY.clone(), MALLORY.email.clone(), SUBJECT.into())
            .await;

        // Assert
        result.unwrap();
        let body = sent.lock().unwrap().take().unwrap();
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn missing_banner() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let config = ConfirmationEmailServiceConfig {
            banner_path: Arc::new(dir.path().join("missing.png")),
        };

        let sut = ConfirmationEmailServiceImpl {
            email: MockEmailService::new(),
            template: MockTemplateService::new(),
            config,
        };

        // Act
        let result = sut
            .send_confirmation(ANA.clone(), ANA.email.clone(), SUBJECT.into())
            .await;

        // Assert
        assert_matches!(result, Err(ConfirmationSendError::Banner { .. }));
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let (_dir, config) = banner_dir();

        let sut = ConfirmationEmailServiceImpl {
            email: MockEmailService::new().with_send_inspect(|_| (), false),
            template: TemplateServiceImpl::default(),
            config,
        };

        // Act
        let result = sut
            .send_confirmation(ANA.clone(), ANA.email.clone(), SUBJECT.into())
            .await;

        // Assert
        assert_matches!(result, Err(ConfirmationSendError::Rejected));
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let (_dir, config) = banner_dir();

        let sut = ConfirmationEmailServiceImpl {
            email: MockEmailService::new()
                .with_send_error(anyhow::anyhow!("authentication rejected")),
            template: TemplateServiceImpl::default(),
            config,
        };

        // Act
        let result = sut
            .send_confirmation(ANA.clone(), ANA.email.clone(), SUBJECT.into())
            .await;

        // Assert
        assert_matches!(result, Err(ConfirmationSendError::Other(_)));
    }

    #[test]
    fn mime_types() {
        for (path, expected) in [
            ("assets/escolaryx-banner.png", "image/png"),
            ("banner.JPG", "image/jpeg"),
            ("banner", "application/octet-stream"),
        ] {
            assert_eq!(image_mime_type(std::path::Path::new(path)), expected);
        }
    }
}
