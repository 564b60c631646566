use std::error::Error as StdError;
use std::fmt;

/// Crate error. Every failure is terminal for the submission that caused
/// it; nothing here is retried or fatal to the process.
#[derive(Debug)]
pub enum SearchError {
    /// The query was empty after trimming. Nothing was sent.
    EmptyQuery,

    /// The server answered, but no course matched the query.
    NotFound,

    /// Network failure, non-2xx status, or a body that did not decode.
    Transport {
        message: String,
        source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    },
}

impl SearchError {
    pub fn transport(message: impl Into<String>) -> Self {
        SearchError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Inner error, when there is one.
    pub fn source_error(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SearchError::Transport { source, .. } => {
                source.as_deref().map(|err| err as &(dyn StdError + 'static))
            }
            _ => None,
        }
    }
}

// Display doubles as the user-visible alert text.
impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyQuery => write!(f, "Please enter a course name"),
            SearchError::NotFound => write!(f, "Course not found"),
            SearchError::Transport { message, .. } => write!(f, "{}", message),
        }
    }
}

impl StdError for SearchError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source_error()
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<reqwest_middleware::Error> for SearchError {
    fn from(err: reqwest_middleware::Error) -> Self {
        SearchError::Transport {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
