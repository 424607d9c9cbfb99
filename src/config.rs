use std::env;

use anyhow::Context;

use crate::services::places_client::places_service::{Options, PlacesService};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Proxy settings, read from the environment.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub api_key: String,
    pub places_host: Option<String>,
    pub auth_key: Option<String>,
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_PLACES_API_KEY")
            .filter(|key| !key.is_empty())
            .context("GOOGLE_PLACES_API_KEY must be set")?;

        Ok(Self {
            api_key,
            places_host: lookup("GOOGLE_PLACES_HOST"),
            auth_key: lookup("AUTH_KEY"),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }

    pub fn places_service(&self) -> PlacesService {
        let service = PlacesService::new(Options::new(self.api_key.clone()));
        match self.places_host {
            Some(ref host) => service.with_host(host.clone()),
            None => service,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn requires_api_key() {
        assert!(ServerConfig::from_lookup(lookup(&[])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("GOOGLE_PLACES_API_KEY", "")])).is_err());
    }

    #[test]
    fn applies_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("GOOGLE_PLACES_API_KEY", "k")])).unwrap();

        assert_eq!(config.api_key, "k");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.auth_key.is_none());
        assert!(config.places_host.is_none());
        assert_eq!(config.places_service().options().key, "k");
    }

    #[test]
    fn reads_optional_settings() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("GOOGLE_PLACES_API_KEY", "k"),
            ("AUTH_KEY", "secret"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("GOOGLE_PLACES_HOST", "http://localhost:9999"),
        ]))
        .unwrap();

        assert_eq!(config.auth_key.as_deref(), Some("secret"));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.places_host.as_deref(), Some("http://localhost:9999"));
    }
}
