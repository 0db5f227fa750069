/// Errors that can occur while splitting a raw URL into components.
///
/// Canonicalization and formatting never fail; only the lenient parser
/// can reject an input, and even then the top-level `surt` entry point
/// recovers by returning the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty after trimming
    EmptyInput,
    /// Invalid scheme format
    InvalidScheme,
    /// Invalid port number (non-numeric or out of range)
    InvalidPort,
    /// Unbalanced `[` / `]` around a bracketed host
    InvalidIpv6,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidPort => "Invalid port",
            Self::InvalidIpv6 => "Invalid IPv6 host",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ParseError::InvalidPort.to_string(), "Invalid port");
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty input");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ParseError::InvalidIpv6, ParseError::InvalidIpv6);
        assert_ne!(ParseError::InvalidPort, ParseError::InvalidScheme);
    }
}
