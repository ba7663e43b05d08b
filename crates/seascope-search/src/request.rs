use seascope_common::ImageFile;

use crate::mode::SearchMode;

/// Used when the user asks to analyze by description but typed nothing.
pub const PLACEHOLDER_DESCRIPTION: &str = "the uploaded marine image";

/// The single backend call a search resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Free-text question for `/ai-search`.
    TextQuery { text: String },
    /// Raw image for `/classify-image`.
    ImageUpload { file: ImageFile },
    /// Textual stand-in for an image, sent to `/ai-search` as a prompt.
    /// `fallback_notice` is set when [`PLACEHOLDER_DESCRIPTION`] was substituted.
    ImageDescription { description: String, fallback_notice: bool },
}

impl SearchRequest {
    /// Build an [`SearchRequest::ImageDescription`], substituting the placeholder
    /// for a blank description.
    pub fn describe(description: &str) -> Self {
        let description = description.trim();
        if description.is_empty() {
            SearchRequest::ImageDescription {
                description: PLACEHOLDER_DESCRIPTION.to_string(),
                fallback_notice: true,
            }
        } else {
            SearchRequest::ImageDescription {
                description: description.to_string(),
                fallback_notice: false,
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchRequest::TextQuery { .. } => "text_query",
            SearchRequest::ImageUpload { .. } => "image_upload",
            SearchRequest::ImageDescription { .. } => "image_description",
        }
    }

    pub fn mode(&self) -> SearchMode {
        match self {
            SearchRequest::TextQuery { .. } => SearchMode::Text,
            SearchRequest::ImageUpload { .. } | SearchRequest::ImageDescription { .. } => {
                SearchMode::Image
            }
        }
    }
}

/// Natural-language prompt used to analyze an image from its description.
pub fn description_prompt(description: &str) -> String {
    format!(
        "Analyze this marine image description: {description}. Please identify any marine \
         species, habitat characteristics, behaviors, and provide scientific insights."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_description_uses_placeholder() {
        for blank in ["", "   ", "\n\t"] {
            assert_eq!(
                SearchRequest::describe(blank),
                SearchRequest::ImageDescription {
                    description: PLACEHOLDER_DESCRIPTION.to_string(),
                    fallback_notice: true,
                }
            );
        }
    }

    #[test]
    fn test_description_is_trimmed() {
        assert_eq!(
            SearchRequest::describe("  a colorful coral reef with tropical fish "),
            SearchRequest::ImageDescription {
                description: "a colorful coral reef with tropical fish".to_string(),
                fallback_notice: false,
            }
        );
    }

    #[test]
    fn test_prompt_embeds_description() {
        let prompt = description_prompt("a manta ray gliding over sand");
        assert!(prompt.starts_with("Analyze this marine image description: a manta ray gliding over sand."));
        assert!(prompt.contains("marine species"));
        assert!(prompt.contains("habitat"));
        assert!(prompt.contains("behaviors"));
    }

    #[test]
    fn test_request_mode() {
        let text = SearchRequest::TextQuery { text: "tuna".to_string() };
        assert_eq!(text.mode(), SearchMode::Text);
        assert_eq!(SearchRequest::describe("kelp").mode(), SearchMode::Image);
        assert_eq!(SearchRequest::describe("kelp").kind(), "image_description");
    }
}
