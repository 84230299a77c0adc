#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # narrow-core
//!
//! Turn values of unknown shape (decoded JSON) into typed values without
//! ever silently accepting bad data.
//!
//! ## Layers
//!
//! - [`result`]: the `Result` alias, [`ResultExt`] combinators, and the
//!   [`Fault`] produced at the unwrap boundary.
//! - [`kind`]: runtime type names of unknown values.
//! - [`guards`]: pure shape predicates and the `array_of` / `map_of`
//!   combinators.
//! - [`convert`]: `unknown_to_*` conversions returning `Result`.
//!
//! ## Example
//!
//! ```
//! use narrow_core::{fail_fast, unknown_to_number, unknown_to_object, ResultExt};
//! use serde_json::json;
//!
//! let body = json!({ "core": { "limit": 60 } });
//! let limit = fail_fast(|| {
//!     let root = unknown_to_object(&body).or_fault()?;
//!     let core = unknown_to_object(root.get("core")).or_fault()?;
//!     unknown_to_number(core.get("limit")).or_fault()
//! });
//! assert_eq!(limit.ok(), Some(60.0));
//! ```

pub mod convert;
pub mod error;
pub mod guards;
pub mod kind;
pub mod result;

pub use convert::{
    unknown_array_to_array_type, unknown_array_to_array_type_nullable, unknown_array_to_vec,
    unknown_object_to_record, unknown_object_to_record_nullable, unknown_to_array,
    unknown_to_array_nullable, unknown_to_boolean, unknown_to_boolean_nullable,
    unknown_to_number, unknown_to_number_nullable, unknown_to_object, unknown_to_object_nullable,
    unknown_to_string, unknown_to_string_nullable,
};
pub use error::ConversionError;
pub use guards::{
    UnknownObject, array_of, is_array, is_boolean, is_number, is_string, is_unknown_object,
    map_of,
};
pub use kind::Kind;
pub use result::{Fault, Result, ResultExt, Variant, fail_fast};
