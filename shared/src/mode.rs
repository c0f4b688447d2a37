use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Screen the detector is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMode {
    #[default]
    Menu,
    UrlInput,
    FileUpload,
    TextInput,
    Results,
}

impl DetectionMode {
    /// Input screens own exactly one input field each.
    pub fn is_input(self) -> bool {
        matches!(
            self,
            DetectionMode::UrlInput | DetectionMode::FileUpload | DetectionMode::TextInput
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_three_screens_take_input() {
        let inputs: Vec<_> = DetectionMode::iter().filter(|m| m.is_input()).collect();
        assert_eq!(
            inputs,
            vec![
                DetectionMode::UrlInput,
                DetectionMode::FileUpload,
                DetectionMode::TextInput
            ]
        );
    }

    #[test]
    fn starts_on_menu() {
        assert_eq!(DetectionMode::default(), DetectionMode::Menu);
    }
}
