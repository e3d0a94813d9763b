use std::fmt;

use crate::model::ParameterField;

/// A parameter value outside its documented domain.
///
/// Validation runs before any calculation; the calculator itself never
/// produces this error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: ParameterField,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {} and {} {}, got {}",
            self.field.label(),
            self.min,
            self.max,
            self.field.unit(),
            self.value
        )
    }
}

impl std::error::Error for ValidationError {}

/// Text that does not name a known network type, modulation, or coding scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseParameterError {
    NetworkType(String),
    Modulation(String),
    ChannelCoding(String),
}

impl fmt::Display for ParseParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseParameterError::NetworkType(s) => {
                write!(f, "unknown network type {s:?} (expected 4G or 5G)")
            }
            ParseParameterError::Modulation(s) => write!(
                f,
                "unknown modulation {s:?} (expected QPSK, 16-QAM, 64-QAM or 256-QAM)"
            ),
            ParseParameterError::ChannelCoding(s) => {
                write!(f, "unknown channel coding {s:?} (expected None, Hamming or LDPC)")
            }
        }
    }
}

impl std::error::Error for ParseParameterError {}

/// Message shown to the user whenever a suggestion request fails
pub const SUGGESTION_FAILED_MESSAGE: &str = "Failed to get AI suggestions. Please try again.";

pub type ProviderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from the parameter suggestion flow
#[derive(Debug)]
pub enum SuggestionError {
    /// The provider call failed. Displayed generically; the cause is kept for logs.
    Provider(ProviderError),
    /// The suggestion named a modulation this model does not know
    UnknownModulation(ParseParameterError),
    /// The suggested values fall outside the parameter domains
    Invalid(ValidationError),
}

impl SuggestionError {
    /// Whether re-issuing the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, SuggestionError::Provider(_))
    }
}

impl fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionError::Provider(_) => write!(f, "{SUGGESTION_FAILED_MESSAGE}"),
            SuggestionError::UnknownModulation(e) => {
                write!(f, "suggestion cannot be applied: {e}")
            }
            SuggestionError::Invalid(e) => write!(f, "suggestion cannot be applied: {e}"),
        }
    }
}

impl std::error::Error for SuggestionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuggestionError::Provider(e) => Some(e.as_ref()),
            SuggestionError::UnknownModulation(e) => Some(e),
            SuggestionError::Invalid(e) => Some(e),
        }
    }
}

impl From<ParseParameterError> for SuggestionError {
    fn from(err: ParseParameterError) -> Self {
        SuggestionError::UnknownModulation(err)
    }
}

impl From<ValidationError> for SuggestionError {
    fn from(err: ValidationError) -> Self {
        SuggestionError::Invalid(err)
    }
}
