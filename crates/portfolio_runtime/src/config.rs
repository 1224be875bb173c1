//! Build-time site configuration and the catalog credential.

use std::sync::OnceLock;

use platform_host::AssetBaseRule;
use serde::Deserialize;
use thiserror::Error;

use crate::{catalog::CatalogEndpoint, reveal::RevealConfig};

include!(concat!(env!("OUT_DIR"), "/site_config_generated.rs"));

// Read at build time; `build.rs` reruns when it changes.
const BUILD_CATALOG_API_KEY: Option<&str> = option_env!("PORTFOLIO_CATALOG_API_KEY");

/// Error raised when a site configuration payload cannot be decoded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The payload is not valid configuration JSON.
    #[error("invalid site configuration: {0}")]
    Decode(#[from] serde_json::Error),
    /// The payload uses an unsupported schema version.
    #[error("unsupported site configuration schema {found}")]
    Schema {
        /// Schema version found in the payload.
        found: u32,
    },
}

/// Labelled outbound link shown in the hero, navbar, and footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileLink {
    /// Visible label.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Site owner profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileConfig {
    /// Owner display name.
    pub name: String,
    /// Greeting revealed character by character in the hero.
    pub greeting: String,
    /// Hero headline.
    pub headline: String,
    /// Hero description paragraph.
    pub description: String,
    /// Portrait images cycled by clicking the hero portrait.
    #[serde(default)]
    pub portraits: Vec<String>,
    /// Contact and social links.
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
struct RevealSection {
    speed_ms: i64,
    start_delay_ms: i64,
}

/// Remote catalog settings for the hero player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Catalog API base URL.
    pub base_url: String,
    /// Collection loaded on mount.
    pub collection_id: String,
    /// Maximum number of items requested.
    pub max_items: u32,
}

/// Contact relay settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactConfig {
    /// Form relay endpoint receiving `POST` submissions.
    pub relay_url: String,
}

/// Embedded player settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerConfig {
    /// DOM id of the node the player embed replaces.
    pub mount_id: String,
    /// Opacity of the video layer behind the hero.
    pub overlay_opacity: f32,
}

/// Parsed site configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    schema_version: u32,
    /// Owner profile.
    pub profile: ProfileConfig,
    reveal: RevealSection,
    /// Catalog settings.
    pub catalog: CatalogConfig,
    /// Contact relay settings.
    pub contact: ContactConfig,
    /// Player settings.
    pub player: PlayerConfig,
    /// Deploy base-path rule for static assets.
    pub assets: AssetBaseRule,
}

impl SiteConfig {
    /// Decodes a configuration payload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or an unsupported schema version.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.schema_version != 1 {
            return Err(ConfigError::Schema {
                found: config.schema_version,
            });
        }
        Ok(config)
    }

    /// Reveal timing for the hero greeting.
    pub fn reveal(&self) -> RevealConfig {
        RevealConfig::new(self.reveal.speed_ms, self.reveal.start_delay_ms)
    }

    /// Catalog endpoint using the build-time credential.
    pub fn catalog_endpoint(&self) -> CatalogEndpoint {
        CatalogEndpoint::new(
            self.catalog.base_url.clone(),
            BUILD_CATALOG_API_KEY.map(str::to_string),
        )
    }
}

/// Returns the generated site configuration JSON payload.
pub fn site_config_json() -> &'static str {
    SITE_CONFIG_JSON
}

/// Returns the build-time site configuration.
pub fn site_config() -> &'static SiteConfig {
    static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        SiteConfig::from_json(SITE_CONFIG_JSON).expect("generated site configuration should parse")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_config_parses_with_expected_defaults() {
        let config = site_config();
        assert_eq!(config.catalog.max_items, 50);
        assert_eq!(config.reveal(), RevealConfig::new(80, 500));
        assert!(!config.profile.greeting.is_empty());
        assert!(!config.player.mount_id.is_empty());
        assert_eq!(config.assets.base_path, "/portfolio");
    }

    #[test]
    fn rejects_unknown_schema_versions() {
        let mut value: serde_json::Value =
            serde_json::from_str(site_config_json()).expect("generated json");
        value["schema_version"] = serde_json::json!(2);
        let err = SiteConfig::from_json(&value.to_string()).expect_err("schema 2 rejected");
        assert!(matches!(err, ConfigError::Schema { found: 2 }));
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(matches!(
            SiteConfig::from_json("{\"schema_version\":1}"),
            Err(ConfigError::Decode(_))
        ));
    }
}
