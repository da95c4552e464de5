//! core::paths
//!
//! Local-to-server path rewriting.
//!
//! GeoServer resolves a coverage store's `url` field against its own
//! filesystem, so the path a store is created with must follow the server's
//! mount convention, not the client's. The mapping is a pure string rewrite:
//! a `file:` prefix plus an ordered table of substring substitutions.
//!
//! The default table encodes the deployment this tool was written for, where
//! the client's `./mapbiomas/` tree is mounted at `/data/mapbiomas/mapbiomas/`
//! on the server.

use std::path::Path;

/// Rules for rewriting a local raster path into a server-visible `file:` URL.
///
/// Substitutions are applied in table order, each replacing every
/// occurrence. The rewrite is pure; no filesystem access happens here.
#[derive(Debug, Clone)]
pub struct ServerPathRules {
    /// Prefix prepended to the local path before substitution.
    prefix: String,
    /// Ordered (from, to) substring substitutions.
    substitutions: Vec<(String, String)>,
}

impl Default for ServerPathRules {
    fn default() -> Self {
        ServerPathRules {
            prefix: "file:./data/".to_string(),
            substitutions: vec![
                // Windows separators are meaningless to the server.
                ("\\".to_string(), "/".to_string()),
                // Client-relative mapbiomas tree → server mount point.
                (
                    "/./mapbiomas/".to_string(),
                    "/data/mapbiomas/mapbiomas/".to_string(),
                ),
            ],
        }
    }
}

impl ServerPathRules {
    /// Build rules with an explicit prefix and substitution table.
    pub fn new(prefix: impl Into<String>, substitutions: Vec<(String, String)>) -> Self {
        ServerPathRules {
            prefix: prefix.into(),
            substitutions,
        }
    }

    /// Rewrite a local path into the URL the server should open.
    ///
    /// # Example
    ///
    /// ```
    /// use geopub::core::paths::ServerPathRules;
    /// use std::path::Path;
    ///
    /// let rules = ServerPathRules::default();
    /// assert_eq!(
    ///     rules.to_server_url(Path::new("rasters/mapbiomas_2020_tiled.tif")),
    ///     "file:./data/rasters/mapbiomas_2020_tiled.tif"
    /// );
    /// ```
    pub fn to_server_url(&self, local: &Path) -> String {
        let mut url = format!("{}{}", self.prefix, local.display());
        for (from, to) in &self.substitutions {
            url = url.replace(from.as_str(), to.as_str());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_with_file_data() {
        let rules = ServerPathRules::default();
        assert_eq!(
            rules.to_server_url(Path::new("a/b.tif")),
            "file:./data/a/b.tif"
        );
    }

    #[test]
    fn normalizes_backslashes() {
        let rules = ServerPathRules::default();
        assert_eq!(
            rules.to_server_url(Path::new(r"rasters\2020\map.tif")),
            "file:./data/rasters/2020/map.tif"
        );
    }

    #[test]
    fn rewrites_mapbiomas_mount() {
        let rules = ServerPathRules::default();
        assert_eq!(
            rules.to_server_url(Path::new("/./mapbiomas/map_tiled.tif")),
            "file:./data//data/mapbiomas/mapbiomas/map_tiled.tif"
        );
    }

    #[test]
    fn substitutions_apply_in_table_order() {
        // Backslash normalization runs first, so a Windows-style spelling of
        // the mapbiomas tree still hits the mount rule.
        let rules = ServerPathRules::default();
        assert_eq!(
            rules.to_server_url(Path::new(r"\.\mapbiomas\map.tif")),
            "file:./data//data/mapbiomas/mapbiomas/map.tif"
        );
    }

    #[test]
    fn custom_rules() {
        let rules = ServerPathRules::new(
            "file:",
            vec![("/mnt/share/".to_string(), "/srv/gis/".to_string())],
        );
        assert_eq!(
            rules.to_server_url(Path::new("/mnt/share/dem.tif")),
            "file:/srv/gis/dem.tif"
        );
    }
}
