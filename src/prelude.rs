//! Prelude module - common imports for narrowing unknown JSON
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use narrow::prelude::*;
//! ```

// Re-export the Result layer
pub use narrow_core::{Fault, Result, ResultExt, Variant, fail_fast};

// Re-export error types
pub use narrow_core::ConversionError;
pub use narrow_fetch::{ConfigError, FetchError};

// Re-export guards and conversions
pub use narrow_core::{
    Kind, UnknownObject, array_of, is_array, is_boolean, is_number, is_string, is_unknown_object,
    map_of, unknown_array_to_array_type, unknown_array_to_array_type_nullable,
    unknown_array_to_vec, unknown_object_to_record, unknown_object_to_record_nullable,
    unknown_to_array, unknown_to_array_nullable, unknown_to_boolean, unknown_to_boolean_nullable,
    unknown_to_number, unknown_to_number_nullable, unknown_to_object, unknown_to_object_nullable,
    unknown_to_string, unknown_to_string_nullable,
};

// Re-export the fetcher
pub use narrow_fetch::{FetchConfig, JsonFetcher};

// Unknown values are serde_json values
pub use serde_json::Value;
