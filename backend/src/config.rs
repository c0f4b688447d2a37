use shared::DetectorConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid detector config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid PORT value: {0}")]
    Port(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub detector_config: PathBuf,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `PORT`, `FRONTEND_DIR` and `DETECTOR_CONFIG` through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let root = match lookup("CARGO_MANIFEST_DIR") {
            Some(manifest_dir) => Path::new(&manifest_dir).join(".."),
            None => PathBuf::from("/usr/src/app"),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Port(raw))?,
            None => 8081,
        };

        Ok(Self {
            port,
            frontend_dir: lookup("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("frontend/dist")),
            detector_config: lookup("DETECTOR_CONFIG")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("config/detector.yaml")),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

pub fn parse_detector_config(path: &Path, raw: &str) -> Result<DetectorConfig, ConfigError> {
    // An empty file deserializes to unit, not to a map.
    if raw.trim().is_empty() {
        return Ok(DetectorConfig::default());
    }
    serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the detector settings. A missing file means defaults.
pub fn load_detector_config(path: &Path) -> Result<DetectorConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => parse_detector_config(path, &raw),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!(
                "No detector config at {}, using defaults",
                path.display()
            );
            Ok(DetectorConfig::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let settings = ServerSettings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.port, 8081);
        assert_eq!(settings.frontend_dir, PathBuf::from("/usr/src/app/frontend/dist"));
        assert_eq!(
            settings.detector_config,
            PathBuf::from("/usr/src/app/config/detector.yaml")
        );
        assert_eq!(settings.bind_address(), "0.0.0.0:8081");
    }

    #[test]
    fn environment_overrides() {
        let settings = ServerSettings::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("FRONTEND_DIR", "/srv/dist"),
            ("CARGO_MANIFEST_DIR", "/work/backend"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.frontend_dir, PathBuf::from("/srv/dist"));
        assert_eq!(
            settings.detector_config,
            Path::new("/work/backend").join("..").join("config/detector.yaml")
        );
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerSettings::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Port(ref p) if p == "eighty"));
    }

    #[test]
    fn yaml_overrides_only_given_fields() {
        let config = parse_detector_config(
            Path::new("detector.yaml"),
            "stage_delay_ms: 250\nmodel_version: \"ReaCheck-test\"\n",
        )
        .unwrap();
        assert_eq!(config.stage_delay_ms, 250);
        assert_eq!(config.model_version, "ReaCheck-test");
        assert_eq!(config.max_file_size, DetectorConfig::default().max_file_size);
    }

    #[test]
    fn empty_yaml_means_defaults() {
        let config = parse_detector_config(Path::new("detector.yaml"), "  \n").unwrap();
        assert_eq!(config, DetectorConfig::default());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = parse_detector_config(Path::new("bad.yaml"), "stage_delay_ms: [1, 2").unwrap_err();
        assert!(err.to_string().starts_with("Invalid detector config in bad.yaml"));
    }

    #[test]
    fn missing_file_means_defaults() {
        let path = std::env::temp_dir().join("reacheck-missing-detector-config.yaml");
        let config = load_detector_config(&path).unwrap();
        assert_eq!(config, DetectorConfig::default());
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../config/detector.yaml");
        let config = load_detector_config(&path).unwrap();
        assert_eq!(config, DetectorConfig::default());
    }
}
