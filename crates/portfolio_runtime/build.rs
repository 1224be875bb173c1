use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProfileLink {
    label: String,
    href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Profile {
    name: String,
    greeting: String,
    headline: String,
    description: String,
    #[serde(default)]
    portraits: Vec<String>,
    #[serde(default)]
    links: Vec<ProfileLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Reveal {
    speed_ms: i64,
    start_delay_ms: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Catalog {
    base_url: String,
    collection_id: String,
    max_items: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Contact {
    relay_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Player {
    mount_id: String,
    overlay_opacity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Assets {
    host_suffix: String,
    base_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteConfigFile {
    schema_version: u32,
    profile: Profile,
    reveal: Reveal,
    catalog: Catalog,
    contact: Contact,
    player: Player,
    assets: Assets,
}

fn validate(config: &SiteConfigFile, path: &str) {
    if config.schema_version != 1 {
        panic!(
            "site config schema mismatch in {path}: expected 1 found {}",
            config.schema_version
        );
    }
    if config.reveal.speed_ms <= 0 {
        panic!("reveal.speed_ms in {path} must be positive");
    }
    if config.catalog.collection_id.trim().is_empty() {
        panic!("catalog.collection_id in {path} must not be empty");
    }
    if !(1..=50).contains(&config.catalog.max_items) {
        panic!(
            "catalog.max_items in {path} must be within 1..=50, found {}",
            config.catalog.max_items
        );
    }
    if !config.catalog.base_url.starts_with("https://") {
        panic!("catalog.base_url in {path} must be an https URL");
    }
    if config.player.mount_id.trim().is_empty() {
        panic!("player.mount_id in {path} must not be empty");
    }
    if !(0.0..=1.0).contains(&config.player.overlay_opacity) {
        panic!("player.overlay_opacity in {path} must be within 0.0..=1.0");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("portfolio.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed=PORTFOLIO_CATALOG_API_KEY");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: SiteConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path.display().to_string());

    let json = serde_json::to_string_pretty(&config).expect("serialize site config");
    let generated = format!(
        "/// Build-time generated site configuration JSON.\n\
pub const SITE_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("site_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
