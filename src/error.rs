use std::fmt;

/// The main error type for path parsing, document loading and typed access.
#[derive(Debug, Clone, PartialEq)]
pub enum ScryError {
    /// Raised when a path expression cannot be parsed.
    SyntaxError {
        message: String,
        offset: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a document is not well-formed JSON.
    ParseError {
        message: String,
        offset: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when typed access matches nothing. An empty match set from
    /// a plain query is not an error; only `get`-style access reports it.
    NotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl ScryError {
    /// Character offset into the offending input, when the error carries one.
    ///
    /// Feed it to [`crate::locate::locate`] to get a line/column for display.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ScryError::SyntaxError { offset, .. } | ScryError::ParseError { offset, .. } => {
                Some(*offset)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ScryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScryError::SyntaxError { message, offset, hint, code } =>
                write!(f, "[SCRY] Syntax Error at offset {}: {}{}{}",
                    offset, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            ScryError::ParseError { message, offset, hint, code } =>
                write!(f, "[SCRY] Parse Error at offset {}: {}{}{}",
                    offset, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            ScryError::FileError { message, path, hint, code } =>
                write!(f, "[SCRY] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            ScryError::NotFound { path, hint, code } =>
                write!(f, "[SCRY] Not Found: path '{}' matched nothing{}{}",
                    path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            ScryError::TypeError { message, hint, code } =>
                write!(f, "[SCRY] Type Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for ScryError {}
