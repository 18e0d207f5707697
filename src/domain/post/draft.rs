//! Post draft, attached media, and the local validation policy.

use crate::domain::foundation::ValidationError;

/// Media types the service accepts.
///
/// The allow-list is deliberately explicit; anything without a matching
/// extension is rejected before a byte goes over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Png,
    Jpeg,
}

impl MediaType {
    /// Resolves a media type from a file name's extension, case-insensitive.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some(MediaType::Png),
            "jpg" | "jpeg" => Some(MediaType::Jpeg),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Png => "image/png",
            MediaType::Jpeg => "image/jpeg",
        }
    }

    /// Human-readable accepted extensions, for validation messages.
    pub fn accepted_extensions() -> &'static str {
        "png, jpg, jpeg"
    }
}

/// A media file chosen by the user, held in memory until the attempt
/// resolves so a rejected draft can be amended and resubmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn media_type(&self) -> Option<MediaType> {
        MediaType::from_file_name(&self.file_name)
    }
}

/// User input for one post-creation attempt. Mutable while idle, cloned
/// into an immutable snapshot at dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub description: String,
    pub media: Option<MediaFile>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the draft after an accepted submission.
    pub fn clear(&mut self) {
        self.description.clear();
        self.media = None;
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.media.is_none()
    }
}

/// Validation bounds applied locally before any network call.
#[derive(Debug, Clone)]
pub struct MediaPolicy {
    /// Upper bound on the media file size in bytes.
    pub max_file_bytes: usize,

    /// Upper bound on the description length in characters. An empty
    /// description is allowed.
    pub max_description_chars: usize,
}

impl Default for MediaPolicy {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024,
            max_description_chars: 500,
        }
    }
}

impl MediaPolicy {
    /// Checks a draft against the policy. The first violated rule wins.
    pub fn validate(&self, draft: &PostDraft) -> Result<(), ValidationError> {
        let media = draft.media.as_ref().ok_or(ValidationError::MissingMedia)?;

        if media.media_type().is_none() {
            let extension = media
                .file_name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .unwrap_or_default();
            return Err(ValidationError::unsupported_media_type(
                extension,
                MediaType::accepted_extensions(),
            ));
        }

        if media.bytes.len() > self.max_file_bytes {
            return Err(ValidationError::FileTooLarge {
                limit: self.max_file_bytes,
                actual: media.bytes.len(),
            });
        }

        let description_chars = draft.description.chars().count();
        if description_chars > self.max_description_chars {
            return Err(ValidationError::DescriptionTooLong {
                limit: self.max_description_chars,
                actual: description_chars,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(file_name: &str, bytes: Vec<u8>) -> PostDraft {
        PostDraft {
            description: "hello".to_string(),
            media: Some(MediaFile::new(file_name, bytes)),
        }
    }

    #[test]
    fn media_type_resolves_known_extensions_case_insensitive() {
        assert_eq!(MediaType::from_file_name("a.png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_file_name("a.JPG"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_file_name("a.Jpeg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_file_name("a.gif"), None);
        assert_eq!(MediaType::from_file_name("no-extension"), None);
    }

    #[test]
    fn validate_accepts_png_within_bounds() {
        let policy = MediaPolicy::default();
        assert!(policy.validate(&draft_with("photo.png", vec![0; 128])).is_ok());
    }

    #[test]
    fn validate_requires_media() {
        let policy = MediaPolicy::default();
        let draft = PostDraft {
            description: "text only".to_string(),
            media: None,
        };
        assert_eq!(policy.validate(&draft), Err(ValidationError::MissingMedia));
    }

    #[test]
    fn validate_rejects_unsupported_extension() {
        let policy = MediaPolicy::default();
        let result = policy.validate(&draft_with("clip.gif", vec![0; 8]));
        assert!(matches!(
            result,
            Err(ValidationError::UnsupportedMediaType { .. })
        ));
    }

    #[test]
    fn validate_rejects_oversized_file() {
        let policy = MediaPolicy {
            max_file_bytes: 16,
            ..MediaPolicy::default()
        };
        let result = policy.validate(&draft_with("photo.jpg", vec![0; 17]));
        assert_eq!(
            result,
            Err(ValidationError::FileTooLarge {
                limit: 16,
                actual: 17
            })
        );
    }

    #[test]
    fn validate_allows_empty_description() {
        let policy = MediaPolicy::default();
        let draft = PostDraft {
            description: String::new(),
            media: Some(MediaFile::new("photo.png", vec![0; 8])),
        };
        assert!(policy.validate(&draft).is_ok());
    }

    #[test]
    fn validate_rejects_overlong_description() {
        let policy = MediaPolicy {
            max_description_chars: 5,
            ..MediaPolicy::default()
        };
        let result = policy.validate(&draft_with("photo.png", vec![0; 8]));
        assert!(result.is_ok());

        let mut draft = draft_with("photo.png", vec![0; 8]);
        draft.description = "toolong".to_string();
        assert_eq!(
            policy.validate(&draft),
            Err(ValidationError::DescriptionTooLong {
                limit: 5,
                actual: 7
            })
        );
    }

    #[test]
    fn clear_resets_draft() {
        let mut draft = draft_with("photo.png", vec![1, 2, 3]);
        draft.clear();
        assert!(draft.is_empty());
    }
}
