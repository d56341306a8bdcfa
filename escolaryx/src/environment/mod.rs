use std::{net::SocketAddr, sync::Arc};

use escolaryx_api_rest::RestServerConfig;
use escolaryx_config::Config;
use escolaryx_core_contact_impl::ContactFeatureConfig;
use escolaryx_di::provider;
use escolaryx_email_impl::confirmation::ConfirmationEmailServiceConfig;
use types::Email;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        email: Email,
        ..config: ConfigProvider {
            RestServerConfig,
            ContactFeatureConfig,
            ConfirmationEmailServiceConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, email: Email) -> Self {
        Self {
            _cache: Default::default(),
            email,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        rest_server_config: RestServerConfig,
        contact_feature_config: ContactFeatureConfig,
        confirmation_email_service_config: ConfirmationEmailServiceConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> Self {
        let rest_server_config = RestServerConfig {
            addr: SocketAddr::new(config.http.host, config.http.port),
        };

        let contact_feature_config = ContactFeatureConfig {
            subject: config.contact.subject.clone().into(),
        };

        let confirmation_email_service_config = ConfirmationEmailServiceConfig {
            banner_path: Arc::new(config.contact.banner_path.clone()),
        };

        Self {
            _cache: Default::default(),
            rest_server_config,
            contact_feature_config,
            confirmation_email_service_config,
        }
    }
}
