/// Normalized result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// `note` is informational (e.g. a partial-success caveat), never an error.
    Success { result_text: String, note: Option<String> },
    Failure { message: String },
}

impl SearchOutcome {
    pub fn success(result_text: impl Into<String>, note: Option<String>) -> Self {
        SearchOutcome::Success {
            result_text: result_text.into(),
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        SearchOutcome::Failure { message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success { .. })
    }

    pub fn result_text(&self) -> Option<&str> {
        match self {
            SearchOutcome::Success { result_text, .. } => Some(result_text),
            SearchOutcome::Failure { .. } => None,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            SearchOutcome::Success { note, .. } => note.as_deref(),
            SearchOutcome::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SearchOutcome::Failure { message } => Some(message),
            SearchOutcome::Success { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome = SearchOutcome::success("Clownfish", Some("low confidence".to_string()));
        assert!(outcome.is_success());
        assert_eq!(outcome.result_text(), Some("Clownfish"));
        assert_eq!(outcome.note(), Some("low confidence"));
        assert_eq!(outcome.error_message(), None);
    }

    #[test]
    fn test_blank_note_is_dropped() {
        let outcome = SearchOutcome::success("Tuna", Some(String::new()));
        assert_eq!(outcome.note(), None);
    }

    #[test]
    fn test_failure_accessors() {
        let outcome = SearchOutcome::failure("unsupported format");
        assert!(!outcome.is_success());
        assert_eq!(outcome.error_message(), Some("unsupported format"));
        assert_eq!(outcome.result_text(), None);
        assert_eq!(outcome.note(), None);
    }
}
