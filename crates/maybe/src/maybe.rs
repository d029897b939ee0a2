use crate::error::NoValueError;

/// A value that is either present (`Some`) or absent (`None`).
///
/// `None` is declared first so the derived ordering puts absent values
/// before present ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    None,
    Some(A),
}

impl<A> Maybe<A> {
    /// Constructs a `Maybe::Some(value)` variant.
    pub fn some(value: A) -> Self {
        Maybe::Some(value)
    }

    /// Constructs a `Maybe::None` variant.
    pub fn none() -> Self {
        Maybe::None
    }

    /// Returns true if the value is `Some`.
    pub fn is_defined(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns true if the value is `None`.
    pub fn is_empty(&self) -> bool {
        !self.is_defined()
    }

    /// Same as [`is_defined`](Self::is_defined).
    pub fn non_empty(&self) -> bool {
        self.is_defined()
    }

    /// Returns the contained value, or [`NoValueError`] if empty.
    ///
    /// ```
    /// use maybe::{Maybe, NoValueError};
    ///
    /// assert_eq!(Maybe::Some(3).get(), Ok(3));
    /// assert_eq!(Maybe::<i32>::None.get(), Err(NoValueError));
    /// ```
    pub fn get(self) -> Result<A, NoValueError> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(NoValueError),
        }
    }

    /// Returns the contained value, or hands back `error` untouched if empty.
    pub fn get_or_throw<E>(self, error: E) -> Result<A, E> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(error),
        }
    }

    /// Returns the contained value or `alternative`.
    pub fn get_or_else(self, alternative: A) -> A {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => alternative,
        }
    }

    /// Returns `self` if it is `Some`, otherwise `alternative`.
    pub fn or_else(self, alternative: Maybe<A>) -> Maybe<A> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => alternative,
        }
    }

    /// Unwraps the value or panics with [`NoValueError::DEFAULT_MESSAGE`].
    #[track_caller]
    pub fn unwrap(self) -> A {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => panic!("{}", NoValueError::DEFAULT_MESSAGE),
        }
    }

    /// Unwraps the value or panics with `msg`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> A {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => panic!("{}", msg),
        }
    }

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    pub fn as_ref(&self) -> Maybe<&A> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<A>` to `Maybe<&mut A>`.
    pub fn as_mut(&mut self) -> Maybe<&mut A> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}
