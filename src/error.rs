// Copyright (C) 2020-2026 Andy Kurnia.

// fatal outcomes of building a puzzle. retries and growth are handled internally
// and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("No valid {width}x{height} grid found and not allowed to grow more")]
    Construction { width: usize, height: usize },

    #[error("No valid grid found even after trying {branches} word lists with up to {allowed_missing_words} words dropped: {source}")]
    LaxExhausted {
        allowed_missing_words: u32,
        branches: usize,
        #[source]
        source: Box<PuzzleError>,
    },
}

impl PuzzleError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::InvalidInput { .. } => "W001",
            PuzzleError::Construction { .. } => "W002",
            PuzzleError::LaxExhausted { .. } => "W003",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::InvalidInput { .. } => None,
            PuzzleError::Construction { .. } => {
                Some("Allow more orientations, raise maxGridGrowth, or start from a bigger grid")
            }
            PuzzleError::LaxExhausted { .. } => {
                Some("Raise allowedMissingWords or remove words that cannot share the grid")
            }
        }
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self.help() {
            Some(help) => format!("{} ({})\n{}", self, self.code(), help),
            None => format!("{} ({})", self, self.code()),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        PuzzleError::InvalidInput {
            reason: reason.into(),
        }
    }
}

// for glue code that mixes io, json and puzzle errors.
pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}
