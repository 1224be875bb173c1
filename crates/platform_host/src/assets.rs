//! Static asset path resolution for sites served under a sub-path on some hosts.

use serde::{Deserialize, Serialize};

/// Rule describing when static asset paths need a base-path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBaseRule {
    /// Host-name suffix that triggers the prefix (for example `github.io`).
    pub host_suffix: String,
    /// Base path prepended to root-relative asset paths (for example `/portfolio`).
    pub base_path: String,
}

/// Resolves a root-relative asset path for the current host.
///
/// When `host_name` ends with the rule's host suffix and `path` is not already under the base
/// path, the base path is prepended. Otherwise `path` is returned unchanged.
pub fn resolve_asset_path(path: &str, host_name: &str, rule: &AssetBaseRule) -> String {
    let base = rule.base_path.trim_end_matches('/');
    if base.is_empty() || rule.host_suffix.is_empty() || !host_name.ends_with(&rule.host_suffix) {
        return path.to_string();
    }
    if path == base || path.starts_with(&format!("{base}/")) {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages_rule() -> AssetBaseRule {
        AssetBaseRule {
            host_suffix: "github.io".to_string(),
            base_path: "/portfolio".to_string(),
        }
    }

    #[test]
    fn prefixes_paths_on_matching_host() {
        assert_eq!(
            resolve_asset_path("/projects/Align.png", "someone.github.io", &pages_rule()),
            "/portfolio/projects/Align.png"
        );
    }

    #[test]
    fn leaves_already_prefixed_paths_alone() {
        assert_eq!(
            resolve_asset_path("/portfolio/me.jpg", "someone.github.io", &pages_rule()),
            "/portfolio/me.jpg"
        );
    }

    #[test]
    fn other_hosts_use_paths_as_is() {
        assert_eq!(
            resolve_asset_path("/me.jpg", "portfolio.vercel.app", &pages_rule()),
            "/me.jpg"
        );
        assert_eq!(resolve_asset_path("/me.jpg", "localhost", &pages_rule()), "/me.jpg");
    }
}
