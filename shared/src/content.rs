use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    Image,
    Text,
    Document,
    Webpage,
}

/// Metadata of a picked file. The file content itself never reaches the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Lowercased extension of the file name, without the dot.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    pub fn size_kb(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}

/// What a single analysis run looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    Text(String),
    Url(String),
    File(FileRef),
}

impl Descriptor {
    pub fn content_type(&self) -> ContentType {
        match self {
            Descriptor::Text(_) => ContentType::Text,
            Descriptor::Url(_) => ContentType::Webpage,
            Descriptor::File(file) if file.is_image() => ContentType::Image,
            Descriptor::File(_) => ContentType::Document,
        }
    }

    /// String handed to the verdict algorithm. URLs and files are not fetched
    /// or read, so their payload is a label built from the raw input.
    pub fn payload(&self) -> String {
        match self {
            Descriptor::Text(text) => text.clone(),
            Descriptor::Url(url) => format!("Content from: {}", url),
            Descriptor::File(file) if file.is_image() => format!("Image file: {}", file.name),
            Descriptor::File(file) => format!("Document: {}", file.name),
        }
    }

    /// Text and URLs need at least one non-whitespace character.
    pub fn is_blank(&self) -> bool {
        match self {
            Descriptor::Text(s) | Descriptor::Url(s) => s.trim().is_empty(),
            Descriptor::File(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_payload_is_prefixed() {
        let descriptor = Descriptor::Url("https://x.com".into());
        assert_eq!(descriptor.payload(), "Content from: https://x.com");
        assert_eq!(descriptor.content_type(), ContentType::Webpage);
    }

    #[test]
    fn files_split_on_mime_type() {
        let image = Descriptor::File(FileRef::new("cat.png", 2048, "image/png"));
        assert_eq!(image.content_type(), ContentType::Image);
        assert_eq!(image.payload(), "Image file: cat.png");

        let doc = Descriptor::File(FileRef::new("essay.pdf", 4096, "application/pdf"));
        assert_eq!(doc.content_type(), ContentType::Document);
        assert_eq!(doc.payload(), "Document: essay.pdf");
    }

    #[test]
    fn whitespace_only_input_is_blank() {
        assert!(Descriptor::Text(String::new()).is_blank());
        assert!(Descriptor::Text(" \n\t ".into()).is_blank());
        assert!(Descriptor::Url("   ".into()).is_blank());
        assert!(!Descriptor::Text(" a ".into()).is_blank());
        assert!(!Descriptor::File(FileRef::new("", 0, "")).is_blank());
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(FileRef::new("Report.DOCX", 1, "").extension().as_deref(), Some("docx"));
        assert_eq!(FileRef::new("README", 1, "").extension(), None);
        assert_eq!(FileRef::new("trailing.", 1, "").extension(), None);
    }

    #[test]
    fn content_type_displays_lowercase() {
        assert_eq!(ContentType::Webpage.to_string(), "webpage");
        assert_eq!(ContentType::Image.to_string().to_uppercase(), "IMAGE");
    }
}
