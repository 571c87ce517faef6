//! Form value objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Gender radio options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Field-of-work checkbox options
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldOfWork {
    Frontend,
    Backend,
}

impl FieldOfWork {
    pub const ALL: [FieldOfWork; 2] = [FieldOfWork::Frontend, FieldOfWork::Backend];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Front end",
            Self::Backend => "Back end",
        }
    }
}

/// Failure to attach an image file
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("File not found")]
    NotFound,
    #[error("Not a file")]
    NotAFile,
    #[error("Cannot read file: {0}")]
    Io(#[from] std::io::Error),
}

/// A file picked for upload, described by its path, size and MIME type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl ImageRef {
    /// Read file metadata for `path` and build a reference to it.
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ImageError::NotFound,
            _ => ImageError::Io(e),
        })?;
        if !metadata.is_file() {
            return Err(ImageError::NotAFile);
        }

        Ok(Self {
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
            mime_type: mime_type_for(path).to_string(),
        })
    }
}

/// Media type guessed from the file extension
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// The record of all current field inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub gender: Option<Gender>,
    pub field: BTreeSet<FieldOfWork>,
}

/// Names of the validated fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Username,
    Password,
    Image,
    Gender,
    Field,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Username,
        FieldName::Password,
        FieldName::Image,
        FieldName::Gender,
        FieldName::Field,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::Image => "image",
            Self::Gender => "gender",
            Self::Field => "field",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_mime_type_for_known_extensions() {
        assert_eq!(mime_type_for(Path::new("a.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("a.JPEG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("a.gif")), "image/gif");
        assert_eq!(mime_type_for(Path::new("a.webp")), "image/webp");
    }

    #[test]
    fn test_mime_type_for_unknown_extension() {
        assert_eq!(mime_type_for(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(mime_type_for(Path::new("no_extension")), "application/octet-stream");
    }

    #[test]
    fn test_image_ref_from_path_reads_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 512]).unwrap();

        let image = ImageRef::from_path(&path).unwrap();
        assert_eq!(image.size_bytes, 512);
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.path, path);
    }

    #[test]
    fn test_image_ref_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageRef::from_path(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, ImageError::NotFound));
        assert_eq!(err.to_string(), "File not found");
    }

    #[test]
    fn test_image_ref_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageRef::from_path(dir.path()).unwrap_err();
        assert!(matches!(err, ImageError::NotAFile));
    }

    #[test]
    fn test_values_serialize_like_the_form() {
        let mut values = FormValues {
            username: "Al".to_string(),
            password: "Abcdef1!".to_string(),
            gender: Some(Gender::Male),
            ..Default::default()
        };
        values.field.insert(FieldOfWork::Frontend);

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "Al",
                "password": "Abcdef1!",
                "gender": "male",
                "field": ["Frontend"],
            })
        );
    }

    #[test]
    fn test_field_name_display_matches_json_keys() {
        let names: Vec<String> = FieldName::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["username", "password", "image", "gender", "field"]);
    }
}
