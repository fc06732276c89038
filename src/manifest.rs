//! Project manifest (recolor.yaml) parsing.
//!
//! The manifest lists the design's screen colours, the replacement palette
//! and default options for the command line.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RecolorError, Result};
use crate::types::{Palette, PaletteColor, ScreenColor, DEFAULT_TOLERANCE};

/// Default manifest file name.
pub const MANIFEST_FILENAME: &str = "recolor.yaml";

/// Project manifest loaded from recolor.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Per-channel match tolerance (0-255).
    #[serde(default = "default_tolerance")]
    pub tolerance: u8,

    /// Output directory for recoloured images.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Design number used to name downloaded matchings.
    #[serde(default)]
    pub design_number: Option<String>,

    #[serde(default)]
    pub screen_colors: Vec<ScreenColor>,

    #[serde(default)]
    pub palette: Vec<PaletteColor>,
}

fn default_tolerance() -> u8 {
    DEFAULT_TOLERANCE
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            output: default_output(),
            design_number: None,
            screen_colors: vec![],
            palette: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a recolor.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RecolorError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RecolorError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check recolor.yaml syntax; colours must be #RGB or #RRGGBB".to_string()),
        })
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorValue;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert_eq!(manifest.tolerance, 5);
        assert!(manifest.screen_colors.is_empty());
        assert!(manifest.design_number.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
tolerance: 8
output: dist/matches
design_number: "0042"
screen_colors:
  - id: s1
    hex: "#FF0000"
    name: Red
  - id: s2
    hex: "#fff"
    name: White
palette:
  - id: p1
    hex: "#000080"
    name: Navy
"##;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.tolerance, 8);
        assert_eq!(manifest.output, PathBuf::from("dist/matches"));
        assert_eq!(manifest.design_number.as_deref(), Some("0042"));
        assert_eq!(manifest.screen_colors.len(), 2);
        assert_eq!(manifest.screen_colors[1].hex, ColorValue::WHITE);
        assert_eq!(
            manifest.palette().get("p1").map(|c| c.hex),
            Some(ColorValue::rgb(0, 0, 0x80))
        );
    }

    #[test]
    fn test_parse_rejects_bad_hex() {
        let yaml = r#"
screen_colors:
  - id: s1
    hex: red
    name: Red
"#;
        assert!(matches!(
            Manifest::parse(yaml),
            Err(RecolorError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_tolerance_overflow() {
        assert!(Manifest::parse("tolerance: 300").is_err());
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert_eq!(manifest.tolerance, DEFAULT_TOLERANCE);
    }
}
