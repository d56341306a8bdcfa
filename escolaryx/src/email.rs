use escolaryx_config::Config;
use escolaryx_email_impl::EmailServiceImpl;
use anyhow::Context;

/// Prepare the SMTP transport. No connection is opened until the first send.
pub fn connect(config: &Config) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(
        &config.smtp.host,
        config.smtp.port,
        config.sender.email.clone(),
        config.sender.password.clone(),
    )
    .with_context(|| format!("Failed to set up SMTP transport for {}", config.smtp.host))
}
