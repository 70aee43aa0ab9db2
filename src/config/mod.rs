//! Site configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TITLE: &str = "Amazon EKS Guide";
pub const DEFAULT_TAGLINE: &str = "Patterns and practices for running Kubernetes on AWS";
pub const DEFAULT_CTA_LABEL: &str = "Get Started";
pub const DEFAULT_CTA_HREF: &str = "/docs/intro";
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    pub title: String,
    pub tagline: String,
    pub cta_label: String,
    pub cta_href: String,
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            cta_label: DEFAULT_CTA_LABEL.to_string(),
            cta_href: DEFAULT_CTA_HREF.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_value = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            title: get("SITE_TITLE", DEFAULT_TITLE),
            tagline: get("SITE_TAGLINE", DEFAULT_TAGLINE),
            cta_label: get("SITE_CTA_LABEL", DEFAULT_CTA_LABEL),
            cta_href: get("SITE_CTA_HREF", DEFAULT_CTA_HREF),
            static_dir: PathBuf::from(get("STATIC_DIR", DEFAULT_STATIC_DIR)),
        })
    }
}
