use std::sync::LazyLock;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants;

static SETTINGS: LazyLock<RegistrationServiceSetting> = LazyLock::new(|| {
    RegistrationServiceSetting::build().expect("Failed to load configuration")
});

/// Service configuration, layered as defaults < `configuration.json` file <
/// `REGISTRATION__*` environment variables, with `DATABASE_URL` and
/// `POSTMARK_AUTH_TOKEN` honored as direct overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationServiceSetting {
    pub app: AppSetting,
    pub postgres: PostgresSetting,
    pub email_client: EmailClientSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSetting {
    pub address: String,
    pub confirmation_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSetting {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    pub timeout_in_millis: u64,
}

impl RegistrationServiceSetting {
    pub fn load() -> &'static Self {
        &SETTINGS
    }

    fn build() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("app.address", constants::prod::APP_ADDRESS)?
            .set_default("app.confirmation_url", constants::prod::CONFIRMATION_URL)?
            .set_default("postgres.url", constants::prod::postgres::URL)?
            .set_default(
                "email_client.base_url",
                constants::prod::email_client::BASE_URL,
            )?
            .set_default("email_client.sender", constants::prod::email_client::SENDER)?
            .set_default("email_client.auth_token", "")?
            .set_default(
                "email_client.timeout_in_millis",
                constants::prod::email_client::TIMEOUT_IN_MILLIS,
            )?
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("REGISTRATION").separator("__"));

        if let Ok(url) = std::env::var(constants::env::DATABASE_URL_ENV_VAR) {
            builder = builder.set_override("postgres.url", url)?;
        }
        if let Ok(token) = std::env::var(constants::env::POSTMARK_AUTH_TOKEN_ENV_VAR) {
            builder = builder.set_override("email_client.auth_token", token)?;
        }

        builder.build()?.try_deserialize()
    }
}
