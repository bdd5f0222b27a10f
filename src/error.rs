use core::fmt;

/// Error returned when a lamp update is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LampError {
    /// Color is not exactly six hexadecimal digits
    InvalidColorFormat,
    /// Lamp index is outside the strip
    IndexOutOfRange(usize),
}

/// Error returned by driver operations.
///
/// `E` is the error type of the pin capability and is passed through
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Color is not exactly six hexadecimal digits
    InvalidColorFormat,
    /// Lamp index is outside the strip
    IndexOutOfRange(usize),
    /// The pin capability rejected a write or release
    Gpio(E),
}

impl<E> From<LampError> for Error<E> {
    fn from(error: LampError) -> Self {
        match error {
            LampError::InvalidColorFormat => Self::InvalidColorFormat,
            LampError::IndexOutOfRange(index) => Self::IndexOutOfRange(index),
        }
    }
}

impl fmt::Display for LampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat => f.write_str("color must be six hex digits"),
            Self::IndexOutOfRange(index) => write!(f, "lamp index {} is out of range", index),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat => f.write_str("color must be six hex digits"),
            Self::IndexOutOfRange(index) => write!(f, "lamp index {} is out of range", index),
            Self::Gpio(error) => write!(f, "gpio error: {:?}", error),
        }
    }
}
