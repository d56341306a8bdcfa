use std::{
    env::VarError,
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use config::{File, FileFormat};
use escolaryx_models::email_address::EmailAddress;
use serde::Deserialize;

/// The bundled configuration, always loaded first.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATHS_VAR: &str = "ESCOLARYX_CONFIG";
pub const SENDER_EMAIL_VAR: &str = "SENDER_EMAIL";
pub const SENDER_PASSWORD_VAR: &str = "SENDER_PASSWORD";

/// Load the configuration from the bundled defaults, the files listed in
/// `ESCOLARYX_CONFIG` and the sender credentials in the environment.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_VAR)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();

    let sender_email = env_var(SENDER_EMAIL_VAR)?;
    let sender_password = env_var(SENDER_PASSWORD_VAR)?;

    load_from(&paths, sender_email, sender_password)
}

pub fn load_from(
    paths: &[impl AsRef<Path>],
    sender_email: Option<String>,
    sender_password: Option<String>,
) -> anyhow::Result<Config> {
    let config = paths
        .iter()
        .try_fold(
            config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
            |builder, path| {
                let path = path.as_ref();
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file at {}", path.display()))?;
                let source = File::from_str(&content, FileFormat::Toml);
                anyhow::Ok(builder.add_source(source))
            },
        )?
        .set_override_option("sender.email", sender_email)?
        .set_override_option("sender.password", sender_password)?
        .build()?;

    for (key, var) in [
        ("sender.email", SENDER_EMAIL_VAR),
        ("sender.password", SENDER_PASSWORD_VAR),
    ] {
        if config.get_string(key).map_or(true, |value| value.is_empty()) {
            bail!("Missing {key}, set the {var} environment variable");
        }
    }

    config.try_deserialize().context("Failed to load config")
}

fn env_var(name: &str) -> anyhow::Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("Failed to read {name}")),
    }
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub smtp: SmtpConfig,
    pub sender: SenderConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct SenderConfig {
    pub email: EmailAddress,
    pub password: String,
}

impl std::fmt::Debug for SenderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenderConfig")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub subject: String,
    pub banner_path: PathBuf,
}
