use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    InvalidInput(&'static str),
    Extraction(&'static str),
    Parse(&'static str),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidInput(message) => write!(f, "invalid input: {message}"),
            CoreError::Extraction(message) => write!(f, "cookie extraction error: {message}"),
            CoreError::Parse(message) => write!(f, "language parse error: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::CoreError;
    use alloc::string::ToString;

    #[test]
    fn display_formats_invalid_input() {
        let err = CoreError::InvalidInput("token");
        assert_eq!(err.to_string(), "invalid input: token");
    }

    #[test]
    fn display_formats_extraction() {
        let err = CoreError::Extraction("cookie value is not a string");
        assert_eq!(
            err.to_string(),
            "cookie extraction error: cookie value is not a string"
        );
    }

    #[test]
    fn display_formats_parse() {
        let err = CoreError::Parse("header value is not a string");
        assert_eq!(
            err.to_string(),
            "language parse error: header value is not a string"
        );
    }
}
