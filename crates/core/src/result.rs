//! Result type definition and extension traits for Railway-Oriented Programming.
//!
//! `std::result::Result` already is the two-variant container: `Ok` holds the
//! data, `Err` holds the error, and `is_ok`/`is_err`/`map` behave as expected.
//! This module adds what the narrowing layer needs on top of it:
//!
//! - [`Variant`], an explicit discriminant that always agrees with `match`
//!   and with `is_ok`/`is_err`.
//! - [`Fault`], a type-erased error used at the unwrap boundary.
//! - [`ResultExt::or_fault`] and [`fail_fast`], which together give a
//!   fail-fast block: the first failing step ends the block and the failure
//!   becomes the block's result.

use std::any::Any;
use std::fmt;

use tracing::{debug, error};

use crate::error::ConversionError;

/// The standard Result type for narrow operations.
///
/// The error defaults to [`ConversionError`]; override it as needed.
///
/// # Examples
///
/// ```
/// use narrow_core::{unknown_to_string, Result};
/// use serde_json::json;
///
/// fn name(value: &serde_json::Value) -> Result<String> {
///     unknown_to_string(value).map(str::to_uppercase)
/// }
///
/// assert_eq!(name(&json!("ada")).ok(), Some("ADA".to_string()));
/// assert!(name(&json!(1)).is_err());
/// ```
pub type Result<T, E = ConversionError> = std::result::Result<T, E>;

/// Which variant of a Result is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Ok,
    Err,
}

impl Variant {
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    #[must_use]
    pub const fn is_err(self) -> bool {
        matches!(self, Self::Err)
    }
}

/// An error whose static type has been erased at the unwrap boundary.
///
/// The original error is kept inside and can be recovered with
/// [`Fault::downcast_ref`] or [`Fault::downcast`]. `Display` renders the
/// original error's message unchanged.
pub struct Fault {
    message: String,
    payload: Box<dyn Any + Send + Sync>,
}

impl Fault {
    /// Box an error into a fault.
    pub fn new<E>(error: E) -> Self
    where
        E: fmt::Display + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            payload: Box::new(error),
        }
    }

    /// The original error's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the original error is an `E`.
    #[must_use]
    pub fn is<E: 'static>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Borrow the original error if it is an `E`.
    #[must_use]
    pub fn downcast_ref<E: 'static>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Take the original error back out, or return the fault unchanged.
    pub fn downcast<E: 'static>(self) -> Result<E, Self> {
        let Self { message, payload } = self;
        payload
            .downcast::<E>()
            .map(|error| *error)
            .map_err(|payload| Self { message, payload })
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Fault {}

impl From<ConversionError> for Fault {
    fn from(error: ConversionError) -> Self {
        Self::new(error)
    }
}

/// Extension trait providing safe combinators for any Result.
pub trait ResultExt<T, E> {
    /// The active variant.
    fn variant(&self) -> Variant;

    /// The unwrap boundary: keep the data, or erase the error into a [`Fault`].
    ///
    /// Pair with `?` inside [`fail_fast`] so the first failure ends the block.
    fn or_fault(self) -> Result<T, Fault>
    where
        E: fmt::Display + Send + Sync + 'static;

    /// Perform a side effect on Ok value without consuming the Result.
    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self;

    /// Perform a side effect on Err value without consuming the Result.
    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self;

    /// Convert a Result to an Option, logging the error if present.
    fn into_option_logged(self) -> Option<T>
    where
        E: fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E> {
    fn variant(&self) -> Variant {
        match self {
            Ok(_) => Variant::Ok,
            Err(_) => Variant::Err,
        }
    }

    fn or_fault(self) -> Result<T, Fault>
    where
        E: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(Fault::new)
    }

    fn tap_ok<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(ref v) = self {
            f(v);
        }
        self
    }

    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }

    fn into_option_logged(self) -> Option<T>
    where
        E: fmt::Display,
    {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Operation failed: {}", e);
                None
            }
        }
    }
}

/// Run a fail-fast block.
///
/// The block returns `Result<T, Fault>`; inside it, `step.or_fault()?` stops
/// at the first failing step. That fault becomes the return value, so callers
/// one level up get an ordinary `Result` again.
pub fn fail_fast<T, F>(block: F) -> Result<T, Fault>
where
    F: FnOnce() -> Result<T, Fault>,
{
    block().tap_err(|fault| debug!(fault = %fault, "fail-fast block stopped"))
}
