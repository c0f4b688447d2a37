use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::FileRef;
use crate::error::DetectorError;

/// One entry of the upload whitelist: a MIME pattern (`image/*` style
/// wildcards allowed) and the file extensions that go with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedType {
    pub mime: String,
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl AcceptedType {
    fn new(mime: &str, extensions: &[&str]) -> Self {
        Self {
            mime: mime.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn matches(&self, file: &FileRef) -> bool {
        let mime_match = match self.mime.strip_suffix("/*") {
            Some(family) => file
                .mime_type
                .split_once('/')
                .is_some_and(|(f, _)| f.eq_ignore_ascii_case(family)),
            None => file.mime_type.eq_ignore_ascii_case(&self.mime),
        };

        mime_match
            || file.extension().is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(&ext))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub stage_delay_ms: u64,
    pub max_file_size: u64,
    pub accepted_types: Vec<AcceptedType>,
    pub analysis_time_label: String,
    pub model_version: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            stage_delay_ms: 800,
            max_file_size: 10 * 1024 * 1024,
            accepted_types: vec![
                AcceptedType::new("image/*", &["png", "jpg", "jpeg", "gif", "webp"]),
                AcceptedType::new("text/*", &["txt", "md"]),
                AcceptedType::new("application/pdf", &["pdf"]),
                AcceptedType::new("application/msword", &["doc"]),
                AcceptedType::new(
                    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                    &["docx"],
                ),
            ],
            analysis_time_label: "2.0s".to_string(),
            model_version: "ReaCheck-model".to_string(),
        }
    }
}

impl DetectorConfig {
    pub fn stage_delay(&self) -> Duration {
        Duration::from_millis(self.stage_delay_ms)
    }

    pub fn max_file_size_mb(&self) -> u64 {
        self.max_file_size / (1024 * 1024)
    }

    pub fn accepts(&self, file: &FileRef) -> bool {
        self.accepted_types.iter().any(|t| t.matches(file))
    }

    pub fn validate_file(&self, file: &FileRef) -> Result<(), DetectorError> {
        if !self.accepts(file) {
            let shown = if file.mime_type.is_empty() {
                file.name.clone()
            } else {
                file.mime_type.clone()
            };
            return Err(DetectorError::UnsupportedFileType(shown));
        }
        if file.size > self.max_file_size {
            return Err(DetectorError::FileTooLarge {
                size: file.size,
                limit: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Value for the `accept` attribute of a file input.
    pub fn accept_attribute(&self) -> String {
        self.accepted_types
            .iter()
            .flat_map(|t| {
                std::iter::once(t.mime.clone()).chain(
                    t.extensions
                        .iter()
                        .map(|e| format!(".{}", e.trim_start_matches('.'))),
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
