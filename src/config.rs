/// Dataset configuration
///
/// JSON-serializable description of where samples live and how they are
/// exposed, shared by evaluation tooling and the inspection binary.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::{DataError, Result};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DataConfig {
    /// Directory of per-sample `.mat` files (directory loader).
    pub data_dir: PathBuf,

    /// Optional stacked-batch container (monolithic loader).
    #[serde(default)]
    pub stack_file: Option<PathBuf>,

    /// Expose each directory sample under all eight geometric modes.
    #[serde(default)]
    pub augment: bool,

    /// Emit (1, C, H, W) samples from the monolithic loader.
    #[serde(default)]
    pub volumetric: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            stack_file: None,
            augment: false,
            volumetric: false,
        }
    }
}

impl DataConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field combinations.
    pub fn validate(&self) -> Result<()> {
        if self.volumetric && self.stack_file.is_none() {
            return Err(DataError::Config(
                "volumetric output requires a stack_file".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let json = r#"{
            "data_dir": "data/cave/test",
            "augment": true
        }"#;

        let config: DataConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data/cave/test"));
        assert!(config.augment);
        assert!(config.stack_file.is_none());
        assert!(!config.volumetric);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_volumetric_requires_stack_file() {
        let config = DataConfig {
            volumetric: true,
            ..DataConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, DataError::Config(_)));
    }
}
