//! Configuration types for the quote engine.
//!
//! These structures are deserialized from the YAML files in a configuration
//! directory. Tax and margin rates are not configurable and live as
//! constants in [`crate::calculation`].

use serde::Deserialize;

fn default_document_title() -> String {
    "International Shipping Rates".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// The company issuing quotes, shown on exported documents.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyProfile {
    /// Registered company name.
    pub name: String,
    /// GST identification number.
    #[serde(default)]
    pub gstin: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    /// Heading printed at the top of exported quotes.
    #[serde(default = "default_document_title")]
    pub document_title: String,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// The `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct QuoteConfig {
    company: CompanyProfile,
    server: ServerConfig,
}

impl QuoteConfig {
    /// Creates a new QuoteConfig from its component parts.
    pub fn new(company: CompanyProfile, server: ServerConfig) -> Self {
        Self { company, server }
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_profile_defaults() {
        let yaml = "name: Leo Packers and Movers\n";
        let company: CompanyProfile = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(company.name, "Leo Packers and Movers");
        assert!(company.gstin.is_none());
        assert!(company.address.is_none());
        assert_eq!(company.document_title, "International Shipping Rates");
    }

    #[test]
    fn test_server_config_defaults() {
        let server: ServerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(server.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_config_overrides() {
        let yaml = "host: 0.0.0.0\nport: 9000\n";
        let server: ServerConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(server.bind_address(), "0.0.0.0:9000");
    }
}
