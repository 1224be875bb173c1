//! Shared host-bundle and capability models for browser and headless runtime composition.

use std::rc::Rc;

use crate::{HttpService, MediaPlayerService, TimerService};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Non-browser composition (native builds, tests) with no network or embeds.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host availability state for one optional capability domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is available.
    Available,
    /// Capability is not implemented or not supported on the active host.
    Unavailable,
    /// Capability exists but stays inactive until an explicit user gesture.
    RequiresUserActivation,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns whether the capability can be used at all on this host.
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unavailable)
    }
}

/// Host capability snapshot exposed to runtime wiring and components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Outbound HTTP (catalog lookups, form relay).
    pub network: CapabilityStatus,
    /// Embedded media player. Browsers only start audio after a user gesture.
    pub embedded_player: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser-default capability posture.
    pub const fn browser() -> Self {
        Self {
            network: CapabilityStatus::Available,
            embedded_player: CapabilityStatus::RequiresUserActivation,
        }
    }

    /// Headless capability posture.
    pub const fn headless() -> Self {
        Self {
            network: CapabilityStatus::Unavailable,
            embedded_player: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle injected into the portfolio runtime.
#[derive(Clone)]
pub struct HostServices {
    /// HTTP service for catalog lookups and the contact relay.
    pub http: Rc<dyn HttpService>,
    /// Cooperative timer service.
    pub timers: Rc<dyn TimerService>,
    /// Embedded media player factory.
    pub media_player: Rc<dyn MediaPlayerService>,
    /// Host availability snapshot for optional capability domains.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("capabilities", &self.capabilities)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_player_needs_a_gesture_but_is_supported() {
        let caps = HostCapabilities::browser();
        assert!(caps.network.is_available());
        assert!(!caps.embedded_player.is_available());
        assert!(caps.embedded_player.is_supported());
    }

    #[test]
    fn headless_host_supports_nothing() {
        let caps = HostCapabilities::headless();
        assert!(!caps.network.is_supported());
        assert!(!caps.embedded_player.is_supported());
        assert_eq!(HostStrategy::Headless.as_str(), "headless");
    }
}
