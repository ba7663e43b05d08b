/// Which search affordance is active on the landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchMode {
    #[default]
    Text,
    Image,
}

impl SearchMode {
    /// Stable string identifier for the mode.
    pub const fn id(self) -> &'static str {
        match self {
            SearchMode::Text => "text",
            SearchMode::Image => "image",
        }
    }

    /// All modes in tab order.
    pub const fn all() -> [SearchMode; 2] {
        [SearchMode::Text, SearchMode::Image]
    }

    /// Label of the submit button.
    pub const fn action_label(self) -> &'static str {
        match self {
            SearchMode::Text => "Search",
            SearchMode::Image => "Analyze",
        }
    }

    /// Shown while a request from this mode is in flight.
    pub const fn busy_label(self) -> &'static str {
        match self {
            SearchMode::Text => "Fetching AI insights...",
            SearchMode::Image => "Analyzing image...",
        }
    }

    /// Badge shown above a successful result.
    pub const fn result_label(self) -> &'static str {
        match self {
            SearchMode::Text => "AI Insights",
            SearchMode::Image => "Image Analysis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_text() {
        assert_eq!(SearchMode::default(), SearchMode::Text);
        assert_eq!(SearchMode::all()[0], SearchMode::Text);
    }

    #[test]
    fn test_labels_differ_per_mode() {
        assert_eq!(SearchMode::Text.action_label(), "Search");
        assert_eq!(SearchMode::Image.action_label(), "Analyze");
        assert_ne!(SearchMode::Text.busy_label(), SearchMode::Image.busy_label());
        assert_eq!(SearchMode::Image.result_label(), "Image Analysis");
    }
}
