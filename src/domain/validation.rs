use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    NotASequence {
        field: &'static str,
    },
    InvalidElement {
        field: &'static str,
        index: usize,
        reason: String,
    },
    InvalidHost {
        input: String,
    },
    InvalidHeaderValue {
        header: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NotASequence { field } => write!(f, "{field} is not array"),
            Self::InvalidElement {
                field,
                index,
                reason,
            } => write!(f, "{field}[{index}] is invalid: {reason}"),
            Self::InvalidHost { input } => write!(f, "invalid host URL: {input}"),
            Self::InvalidHeaderValue { header } => {
                write!(f, "value is not allowed in the {header} header")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
