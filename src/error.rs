use std::fmt;

/// Error type for template compilation
#[derive(Debug, Clone)]
pub enum MatchError {
    /// The pattern translated from a template was rejected by the regex engine.
    /// Literal text is always escaped before translation, so in practice this
    /// means a caller-supplied `<name:constraint>` fragment is malformed.
    Pattern {
        template: String,
        source: regex::Error,
    },
}

impl MatchError {
    /// Create a pattern error carrying the offending template
    pub fn pattern(template: impl Into<String>, source: regex::Error) -> Self {
        MatchError::Pattern {
            template: template.into(),
            source,
        }
    }

    /// The template that failed to compile
    pub fn template(&self) -> &str {
        match self {
            MatchError::Pattern { template, .. } => template,
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Pattern { template, source } => {
                write!(f, "Invalid pattern in template '{}': {}", template, source)
            }
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Pattern { source, .. } => Some(source),
        }
    }
}

/// Result type alias for matcher operations
pub type MatchResult<T> = Result<T, MatchError>;
