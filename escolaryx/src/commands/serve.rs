use escolaryx_config::Config;
use escolaryx_di::Provide;
use tracing::{info, warn};

use crate::{
    email,
    environment::{types::RestServer, ConfigProvider, Provider},
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    if !config.contact.banner_path.is_file() {
        warn!(
            "Banner image not found at {}, confirmation emails will fail until it exists",
            config.contact.banner_path.display()
        );
    }

    let email = email::connect(&config)?;

    let config_provider = ConfigProvider::new(&config);
    let mut provider = Provider::new(config_provider, email);
    let server: RestServer = provider.provide();
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve().await
}
