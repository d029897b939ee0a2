use core::fmt;

/// Returned by [`Maybe::get`](crate::Maybe::get) when the value is `None`.
///
/// Carries no payload; every instance renders the same message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoValueError;

impl NoValueError {
    pub const DEFAULT_MESSAGE: &'static str = "Attempting to unwrap an empty option!";

    pub fn message(&self) -> &'static str {
        Self::DEFAULT_MESSAGE
    }
}

impl fmt::Display for NoValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::DEFAULT_MESSAGE)
    }
}

impl core::error::Error for NoValueError {}

#[cfg(test)]
mod tests {
    use super::NoValueError;
    use alloc::format;

    #[test]
    fn display_uses_default_message() {
        assert_eq!(format!("{}", NoValueError), "Attempting to unwrap an empty option!");
        assert_eq!(NoValueError.message(), NoValueError::DEFAULT_MESSAGE);
    }
}
