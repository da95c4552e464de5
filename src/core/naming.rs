//! core::naming
//!
//! Store and layer naming rules.
//!
//! Identifiers are derived deterministically from the raster's file name:
//! the store name is the file stem folded to ASCII lowercase, and the layer
//! name is the store name with a trailing `_tiled` marker stripped. Two
//! distinct input files are expected not to collide after folding; nothing
//! here enforces that.

use std::path::Path;

/// Marker appended to tiled raster file names; stripped to form layer names.
const TILED_SUFFIX: &str = "_tiled";

/// File extensions treated as publishable rasters (matched case-insensitively).
const RASTER_EXTENSIONS: &[&str] = &["tif", "tiff"];

/// Store and layer identifiers derived from one raster file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishNames {
    /// Coverage store name: file stem, lower-cased.
    pub store: String,
    /// Layer name: store name with the `_tiled` suffix stripped.
    pub layer: String,
}

impl PublishNames {
    /// Derive names from a raster file path.
    ///
    /// Returns `None` for paths without a file stem or with a non-UTF-8
    /// file name.
    ///
    /// # Example
    ///
    /// ```
    /// use geopub::core::naming::PublishNames;
    /// use std::path::Path;
    ///
    /// let names = PublishNames::from_path(Path::new("rasters/Mapbiomas_2020_tiled.tif")).unwrap();
    /// assert_eq!(names.store, "mapbiomas_2020_tiled");
    /// assert_eq!(names.layer, "mapbiomas_2020");
    /// ```
    pub fn from_path(path: &Path) -> Option<PublishNames> {
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }

        let store = stem.to_ascii_lowercase();
        let layer = store
            .strip_suffix(TILED_SUFFIX)
            .unwrap_or(store.as_str())
            .to_string();

        Some(PublishNames { store, layer })
    }
}

/// Check whether a path carries a raster-image extension.
///
/// # Example
///
/// ```
/// use geopub::core::naming::is_raster_file;
/// use std::path::Path;
///
/// assert!(is_raster_file(Path::new("a/b.tif")));
/// assert!(is_raster_file(Path::new("a/b.TIFF")));
/// assert!(!is_raster_file(Path::new("a/b.png")));
/// ```
pub fn is_raster_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            RASTER_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_store_and_layer() {
        let names = PublishNames::from_path(Path::new("mapbiomas_2020_tiled.tif")).unwrap();
        assert_eq!(names.store, "mapbiomas_2020_tiled");
        assert_eq!(names.layer, "mapbiomas_2020");
    }

    #[test]
    fn folds_case() {
        let names = PublishNames::from_path(Path::new("/data/MapBiomas_2020_TILED.tif")).unwrap();
        assert_eq!(names.store, "mapbiomas_2020_tiled");
        assert_eq!(names.layer, "mapbiomas_2020");
    }

    #[test]
    fn untiled_names_keep_layer_equal_to_store() {
        let names = PublishNames::from_path(Path::new("elevation.tif")).unwrap();
        assert_eq!(names.store, "elevation");
        assert_eq!(names.layer, "elevation");
    }

    #[test]
    fn suffix_is_stripped_only_at_the_end() {
        let names = PublishNames::from_path(Path::new("x_tiled_v2.tif")).unwrap();
        assert_eq!(names.store, "x_tiled_v2");
        assert_eq!(names.layer, "x_tiled_v2");
    }

    #[test]
    fn empty_stem_yields_none() {
        assert!(PublishNames::from_path(Path::new("")).is_none());
    }

    #[test]
    fn raster_extension_check() {
        assert!(is_raster_file(Path::new("a.tif")));
        assert!(is_raster_file(Path::new("a.tiff")));
        assert!(is_raster_file(Path::new("a.TIF")));
        assert!(!is_raster_file(Path::new("a.tif.aux.xml")));
        assert!(!is_raster_file(Path::new("a.shp")));
        assert!(!is_raster_file(Path::new("noext")));
    }
}
