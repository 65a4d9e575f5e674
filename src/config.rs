//! Configuration file loading (`fivec.toml`).
//!
//! Every key is optional; a missing file means defaults. An explicitly
//! requested file that cannot be read, or any file that fails to parse,
//! is an error rather than a silent fallback.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
const CONFIG_FILE: &str = "fivec.toml";

pub const DEFAULT_DATASET_SHEET: &str = "Sample dataset";
pub const DEFAULT_SUBSET_SHEET: &str = "5C";
const DEFAULT_DIVISOR: f64 = 1000.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workbook: WorkbookConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkbookConfig {
    /// Default workbook path used when the CLI gives none.
    pub path: Option<PathBuf>,
    #[serde(default = "default_dataset_sheet")]
    pub dataset_sheet: String,
    #[serde(default = "default_subset_sheet")]
    pub subset_sheet: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_divisor")]
    pub cost_divisor: f64,
    #[serde(default = "default_divisor")]
    pub carbon_divisor: f64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SamplingConfig {
    /// Seed for the radar-sample shuffle; unset means non-deterministic.
    pub seed: Option<u64>,
}

fn default_dataset_sheet() -> String {
    DEFAULT_DATASET_SHEET.to_string()
}

fn default_subset_sheet() -> String {
    DEFAULT_SUBSET_SHEET.to_string()
}

fn default_divisor() -> f64 {
    DEFAULT_DIVISOR
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        WorkbookConfig {
            path: None,
            dataset_sheet: default_dataset_sheet(),
            subset_sheet: default_subset_sheet(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            cost_divisor: DEFAULT_DIVISOR,
            carbon_divisor: DEFAULT_DIVISOR,
        }
    }
}

impl Config {
    /// Load from an explicit path, else `./fivec.toml` when present, else
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
        let (content, origin) = match path {
            Some(p) => {
                let content = fs::read_to_string(p)
                    .map_err(|e| format!("cannot read config {}: {e}", p.display()))?;
                (content, p.display().to_string())
            }
            None => match fs::read_to_string(CONFIG_FILE) {
                Ok(content) => (content, CONFIG_FILE.to_string()),
                Err(_) => return Ok(Config::default()),
            },
        };
        toml::from_str(&content).map_err(|e| format!("invalid config {origin}: {e}").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let cfg: Config = toml::from_str(
            r#"
            [workbook]
            path = "data/options.xlsx"
            dataset_sheet = "All options"
            subset_sheet = "Exemplars"

            [display]
            cost_divisor = 100.0
            carbon_divisor = 10.0

            [sampling]
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(cfg.workbook.path, Some(PathBuf::from("data/options.xlsx")));
        assert_eq!(cfg.workbook.dataset_sheet, "All options");
        assert_eq!(cfg.workbook.subset_sheet, "Exemplars");
        assert!((cfg.display.cost_divisor - 100.0).abs() < 1e-9);
        assert!((cfg.display.carbon_divisor - 10.0).abs() < 1e-9);
        assert_eq!(cfg.sampling.seed, Some(42));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert!(cfg.workbook.path.is_none());
        assert_eq!(cfg.workbook.dataset_sheet, DEFAULT_DATASET_SHEET);
        assert_eq!(cfg.workbook.subset_sheet, DEFAULT_SUBSET_SHEET);
        assert!((cfg.display.cost_divisor - 1000.0).abs() < 1e-9);
        assert!(cfg.sampling.seed.is_none());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg: Config = toml::from_str("[display]\ncost_divisor = 1.0\n").unwrap();
        assert!((cfg.display.cost_divisor - 1.0).abs() < 1e-9);
        assert!((cfg.display.carbon_divisor - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn missing_default_file_is_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prev = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let cfg = Config::load(None).unwrap();
        std::env::set_current_dir(prev).unwrap();
        assert!(cfg.workbook.path.is_none());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(
            err.to_string().contains("cannot read config"),
            "should report the read failure, got: {err}"
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fivec.toml");
        fs::write(&path, "not valid = = toml").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(
            err.to_string().contains("invalid config"),
            "should report the parse failure, got: {err}"
        );
    }
}
