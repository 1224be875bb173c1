//! Portfolio site runtime: typed text reveal, playlist loading, player widget state, and the page
//! components that render them.

pub mod catalog;
pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod duration;
mod effect_executor;
pub mod host;
pub mod model;
pub mod player_session;
pub mod reducer;
pub mod reveal;
pub mod runtime_context;

pub use catalog::{CatalogClient, CatalogEndpoint, CatalogError};
pub use components::{PortfolioPage, ProjectDetail};
pub use config::{site_config, SiteConfig};
pub use duration::{format_duration, parse_duration_token};
pub use model::*;
pub use reducer::{reduce_player, PlayerAction, PlayerEffect, PlayerError};
pub use reveal::{run_reveal, use_typed_reveal, RevealConfig, RevealPhase, RevealState};
pub use runtime_context::{use_portfolio_runtime, PortfolioProvider, PortfolioRuntimeContext};
