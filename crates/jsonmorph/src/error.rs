use core::fmt;

/// Errors raised by format conversion.
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum ConvertError {
    /// CSV conversion requires the top-level value to be an array of objects.
    ExpectedArray,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ExpectedArray => {
                f.write_str("CSV conversion requires an array of objects")
            }
        }
    }
}

impl std::error::Error for ConvertError {}
