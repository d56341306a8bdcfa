use escolaryx_config::Config;
use escolaryx_email_contracts::{ContentType, Email, EmailService};
use escolaryx_models::email_address::EmailAddressWithName;
use anyhow::ensure;
use clap::Subcommand;
use tracing::info;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
    /// Open and authenticate an SMTP session without sending anything
    Ping,
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
            EmailCommand::Ping => ping(config).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = email::connect(&config)?;

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            content_type: ContentType::Text,
            alternative_text: None,
            inline_images: Vec::new(),
        })
        .await?;

    ensure!(ok, "Failed to send email");
    info!("Test email sent");

    Ok(())
}

async fn ping(config: Config) -> anyhow::Result<()> {
    email::connect(&config)?.ping().await?;
    info!("Connected to {}:{}", config.smtp.host, config.smtp.port);
    Ok(())
}
