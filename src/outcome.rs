//! The settled result of a single keyed operation.

use core::fmt;

/// Whether an operation resolved normally or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    /// The operation resolved with a value.
    Fulfilled,
    /// The operation failed with a reason.
    Rejected,
}

impl Status {
    /// The lowercase name of the status: `"fulfilled"` or `"rejected"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fulfilled => "fulfilled",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one operation run through [`all_settled()`][crate::all_settled()].
///
/// This is a plain sum type: the reason of a rejected operation is exactly
/// the error it produced, it is never wrapped.
///
/// # Examples
///
/// ```
/// use keyed_futures::{Outcome, Status};
///
/// let ok: Outcome<u8, &str> = Ok(12).into();
/// assert_eq!(ok.status(), Status::Fulfilled);
/// assert_eq!(ok.value(), Some(&12));
///
/// let err: Outcome<u8, &str> = Err("boom").into();
/// assert_eq!(err.status().to_string(), "rejected");
/// assert_eq!(err.into_result(), Err("boom"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be `Rejected`, which should be handled"]
pub enum Outcome<T, E> {
    /// The operation resolved with a value.
    Fulfilled(T),
    /// The operation failed with a reason.
    Rejected(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns the tag of this outcome.
    #[inline]
    pub const fn status(&self) -> Status {
        match self {
            Self::Fulfilled(_) => Status::Fulfilled,
            Self::Rejected(_) => Status::Rejected,
        }
    }

    /// Returns `true` if the operation resolved with a value.
    #[inline]
    pub const fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    /// Returns `true` if the operation failed.
    #[inline]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns a reference to the value, if fulfilled.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// Returns a reference to the reason, if rejected.
    #[inline]
    pub fn reason(&self) -> Option<&E> {
        match self {
            Self::Fulfilled(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }

    /// Converts into the value, discarding a reason.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }

    /// Converts into the reason, discarding a value.
    #[inline]
    pub fn into_reason(self) -> Option<E> {
        match self {
            Self::Fulfilled(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }

    /// Converts into a `Result`, so `?` can be used on a single entry.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Fulfilled(value) => Ok(value),
            Self::Rejected(reason) => Err(reason),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Fulfilled(value) => Outcome::Fulfilled(value),
            Self::Rejected(reason) => Outcome::Rejected(reason),
        }
    }

    /// Maps a fulfilled value, leaving a reason untouched.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Fulfilled(value) => Outcome::Fulfilled(f(value)),
            Self::Rejected(reason) => Outcome::Rejected(reason),
        }
    }

    /// Maps a rejection reason, leaving a value untouched.
    #[inline]
    pub fn map_reason<F2, O: FnOnce(E) -> F2>(self, op: O) -> Outcome<T, F2> {
        match self {
            Self::Fulfilled(value) => Outcome::Fulfilled(value),
            Self::Rejected(reason) => Outcome::Rejected(op(reason)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Fulfilled(value),
            Err(reason) => Self::Rejected(reason),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
