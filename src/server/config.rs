use std::{net::SocketAddr, path::PathBuf};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_CLIENT_URL: &str = "http://localhost:8081";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: SocketAddr,
    pub upload_dir: PathBuf,

    /// Base URL of the client app, used for the Stripe redirect pages.
    pub client_url: String,

    pub stripe_secret_key: Option<String>,

    pub chat_api_url: Option<String>,
    pub chat_api_key: Option<String>,

    pub sms_gateway_url: Option<String>,

    pub smsa_api_url: Option<String>,
    pub aramex_api_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Blank values are treated as unset so that an empty line in `.env` does not
    /// enable an integration with an empty URL or key.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let client_url = var("CLIENT_URL").unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string());
        Url::parse(&client_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "CLIENT_URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_addr,
            upload_dir: PathBuf::from(
                var("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            ),
            client_url: client_url.trim_end_matches('/').to_string(),
            stripe_secret_key: var("STRIPE_SECRET_KEY"),
            chat_api_url: var("CHAT_API_URL"),
            chat_api_key: var("CHAT_API_KEY"),
            sms_gateway_url: var("SMS_GATEWAY_URL"),
            smsa_api_url: var("SMSA_API_URL"),
            aramex_api_url: var("ARAMEX_API_URL"),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    /// Tests that only the database URL and the token secret are required.
    ///
    /// Expected: Ok with defaults for address, upload directory and client URL
    #[test]
    fn applies_defaults() {
        let config = config_from(&[("DATABASE_URL", "sqlite::memory:"), ("JWT_SECRET", "s")])
            .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.client_url, "http://localhost:8081");
        assert!(config.stripe_secret_key.is_none());
        assert!(config.chat_api_url.is_none());
    }

    /// Tests a missing token secret.
    ///
    /// Expected: Err(MissingEnvVar) naming JWT_SECRET
    #[test]
    fn fails_without_jwt_secret() {
        let result = config_from(&[("DATABASE_URL", "sqlite::memory:")]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "JWT_SECRET"
        ));
    }

    /// Tests that a blank optional value counts as unset.
    ///
    /// Expected: stripe_secret_key is None
    #[test]
    fn treats_blank_values_as_unset() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "s"),
            ("STRIPE_SECRET_KEY", "  "),
        ])
        .unwrap();

        assert!(config.stripe_secret_key.is_none());
    }

    /// Tests a malformed client URL.
    ///
    /// Expected: Err(InvalidEnvVar)
    #[test]
    fn rejects_invalid_client_url() {
        let result = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "s"),
            ("CLIENT_URL", "not a url"),
        ]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }

    /// Tests that a trailing slash on the client URL is dropped.
    ///
    /// Expected: redirect URLs can be built with a plain `/`
    #[test]
    fn strips_trailing_slash_from_client_url() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "s"),
            ("CLIENT_URL", "https://shop.example.com/"),
        ])
        .unwrap();

        assert_eq!(config.client_url, "https://shop.example.com");
    }
}
