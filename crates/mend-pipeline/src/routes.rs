//! Source-file to audit-URL resolution.
//!
//! An optional JSON route map (relative source path -> route or absolute
//! URL) takes priority; otherwise the route is derived from the file's
//! position under the pages root.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Explicit route overrides, loaded from `route-map.json`.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    entries: HashMap<String, String>,
}

impl RouteMap {
    /// Load the route map. A missing file is an empty map; invalid JSON is
    /// ignored with a diagnostic, never fatal.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("routes: cannot read {}: {e}, ignoring", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(entries) => Self { entries },
            Err(e) => {
                tracing::warn!(
                    "routes: {} is not a valid JSON route map: {e}, ignoring",
                    path.display()
                );
                Self::default()
            }
        }
    }

    #[cfg(test)]
    fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Resolve a source file to its audit URL.
    ///
    /// Lookup order: the path relative to the pages root, then the path as
    /// given (both with forward slashes). Without a mapping the route is
    /// derived as `/<dir>/<stem>` with no extension. Mapped absolute URLs
    /// pass through; everything else is joined onto the base URL.
    pub fn resolve(&self, pages_root: &Path, source: &Path, base_url: &str) -> String {
        let relative = source.strip_prefix(pages_root).unwrap_or(source);
        let key_relative = relative.to_string_lossy().replace('\\', "/");
        let key_full = source.to_string_lossy().replace('\\', "/");

        let route = self
            .entries
            .get(&key_relative)
            .or_else(|| self.entries.get(&key_full))
            .cloned()
            .unwrap_or_else(|| {
                let stem = relative.with_extension("");
                format!("/{}", stem.to_string_lossy().replace('\\', "/"))
            });

        if route.starts_with("http://") || route.starts_with("https://") {
            return route;
        }
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn map(pairs: &[(&str, &str)]) -> RouteMap {
        RouteMap::from_entries(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn explicit_mapping_wins() {
        let routes = map(&[("a/b.jsx", "/custom")]);
        let url = routes.resolve(
            Path::new("pages"),
            &PathBuf::from("pages/a/b.jsx"),
            "http://x/",
        );
        assert_eq!(url, "http://x/custom");
    }

    #[test]
    fn unmapped_file_derives_route_from_path() {
        let routes = map(&[("a/b.jsx", "/custom")]);
        let url = routes.resolve(
            Path::new("pages"),
            &PathBuf::from("pages/a/c.jsx"),
            "http://x/",
        );
        assert_eq!(url, "http://x/a/c");
    }

    #[test]
    fn absolute_mapped_url_passes_through() {
        let routes = map(&[("a/b.jsx", "https://staging.example.com/b")]);
        let url = routes.resolve(
            Path::new("pages"),
            &PathBuf::from("pages/a/b.jsx"),
            "http://x/",
        );
        assert_eq!(url, "https://staging.example.com/b");
    }

    #[test]
    fn full_path_key_is_second_lookup() {
        let routes = map(&[("pages/a/b.jsx", "/by-full-path")]);
        let url = routes.resolve(
            Path::new("pages"),
            &PathBuf::from("pages/a/b.jsx"),
            "http://x",
        );
        assert_eq!(url, "http://x/by-full-path");
    }
}
