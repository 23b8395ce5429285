use thiserror::Error;

use crate::domain::{MAX_UPLOAD_BYTES, REQUIRED_EXTENSION};

/// Why a picked file was refused for a slot. Nothing is sent over the network
/// for any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{name} is not a .txt file")]
    NotText { name: String },
    #[error("{name} is {size} bytes, over the 10 MiB limit")]
    TooLarge { name: String, size: u64 },
    #[error("{name} is empty")]
    Empty { name: String },
}

impl SelectionError {
    pub fn file_name(&self) -> &str {
        match self {
            SelectionError::NotText { name }
            | SelectionError::TooLarge { name, .. }
            | SelectionError::Empty { name } => name,
        }
    }
}

/// Checks a candidate file against the upload rules, extension first.
pub fn validate_selection(name: &str, size: u64) -> Result<(), SelectionError> {
    if !name.ends_with(REQUIRED_EXTENSION) {
        return Err(SelectionError::NotText {
            name: name.to_string(),
        });
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(SelectionError::TooLarge {
            name: name.to_string(),
            size,
        });
    }
    if size == 0 {
        return Err(SelectionError::Empty {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_file_within_limit() {
        assert_eq!(validate_selection("story.txt", 12), Ok(()));
        assert_eq!(validate_selection("edge.txt", MAX_UPLOAD_BYTES), Ok(()));
    }

    #[test]
    fn extension_match_is_case_sensitive_suffix() {
        for name in ["story.TXT", "story.md", "story.txt.bak", "txt"] {
            assert!(
                matches!(
                    validate_selection(name, 10),
                    Err(SelectionError::NotText { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_oversized_regardless_of_extension() {
        let err = validate_selection("big.txt", MAX_UPLOAD_BYTES + 1).expect_err("too large");
        assert_eq!(
            err,
            SelectionError::TooLarge {
                name: "big.txt".into(),
                size: MAX_UPLOAD_BYTES + 1
            }
        );
        assert!(validate_selection("big.bin", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn rejects_empty_file() {
        assert!(matches!(
            validate_selection("blank.txt", 0),
            Err(SelectionError::Empty { .. })
        ));
    }
}
