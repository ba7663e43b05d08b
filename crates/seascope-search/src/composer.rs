//! Query composer: turns the landing page's input state into one request.

use tracing::debug;

use seascope_common::{ImageFile, ValidationError};

use crate::mode::SearchMode;
use crate::preview::{PreviewHandle, PreviewRegistry};
use crate::request::SearchRequest;

/// An accepted image selection together with its preview reference.
#[derive(Debug)]
pub struct SelectedImage {
    file: ImageFile,
    preview: PreviewHandle,
}

impl SelectedImage {
    pub fn file(&self) -> &ImageFile {
        &self.file
    }

    pub fn preview_url(&self) -> &str {
        self.preview.url()
    }
}

/// Input state of the search box.
///
/// The description and the "use description" toggle only exist alongside the
/// image selection they refer to: removing the image or leaving image mode
/// clears all three.
#[derive(Debug, Default)]
pub struct QueryComposer {
    mode: SearchMode,
    text: String,
    image: Option<SelectedImage>,
    description: String,
    use_description: bool,
    previews: PreviewRegistry,
}

impl QueryComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composer whose previews are tracked in `previews`.
    pub fn with_previews(previews: PreviewRegistry) -> Self {
        Self { previews, ..Self::default() }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        if mode == self.mode {
            return;
        }
        debug!(from = self.mode.id(), to = mode.id(), "search mode switched");
        self.remove_image();
        self.mode = mode;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Accept `file` as the image to analyze. Non-image files are rejected and
    /// leave the current selection untouched.
    pub fn select_image(&mut self, file: ImageFile) -> Result<&SelectedImage, ValidationError> {
        if !file.is_image() {
            debug!(file = file.name(), mime = file.mime_type(), "rejected non-image selection");
            return Err(ValidationError::NotAnImage { mime_type: file.mime_type().to_string() });
        }
        let preview = self.previews.create(&file);
        // The previous selection, if any, drops here and releases its preview.
        Ok(&*self.image.insert(SelectedImage { file, preview }))
    }

    pub fn remove_image(&mut self) {
        self.image = None;
        self.description.clear();
        self.use_description = false;
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    /// The preview to show: hidden while the description is used instead.
    pub fn visible_preview(&self) -> Option<&str> {
        match &self.image {
            Some(image) if !self.use_description => Some(image.preview_url()),
            _ => None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn use_description(&self) -> bool {
        self.use_description
    }

    pub fn set_use_description(&mut self, enabled: bool) {
        self.use_description = enabled;
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// Build the request for the current state, or the validation error that
    /// stops it from being sent.
    pub fn compose(&self) -> Result<SearchRequest, ValidationError> {
        match self.mode {
            SearchMode::Text => {
                let text = self.text.trim();
                if text.is_empty() {
                    return Err(ValidationError::EmptyQuery);
                }
                Ok(SearchRequest::TextQuery { text: text.to_string() })
            }
            SearchMode::Image => {
                let has_description = !self.description.trim().is_empty();
                match &self.image {
                    None if !has_description => Err(ValidationError::MissingImage),
                    Some(image) if !self.use_description => {
                        Ok(SearchRequest::ImageUpload { file: image.file.clone() })
                    }
                    _ => Ok(SearchRequest::describe(&self.description)),
                }
            }
        }
    }
}
