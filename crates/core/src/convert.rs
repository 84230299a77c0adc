//! Unknown-to-typed conversions.
//!
//! Each `unknown_to_*` function narrows a possibly-absent [`Value`] to one
//! shape and returns the borrowed, typed view, or a [`ConversionError`]
//! naming the conversion and the observed runtime type. The `_nullable`
//! variants accept `null` and absence as `Ok(None)`.
//!
//! All conversions take `impl Into<Option<&Value>>`, so a field lookup can be
//! passed directly:
//!
//! ```
//! use narrow_core::{unknown_to_object, unknown_to_string};
//! use serde_json::json;
//!
//! let body = json!({ "resource": "core" });
//! let object = unknown_to_object(&body).ok();
//! let missing = object.map(|o| unknown_to_string(o.get("name")));
//! assert_eq!(
//!     missing.and_then(|r| r.err()).map(|e| e.to_string()).as_deref(),
//!     Some("Error unknownToString typeof value is undefined")
//! );
//! ```

use serde_json::Value;
use tracing::debug;

use crate::error::ConversionError;
use crate::guards::{self, UnknownObject};
use crate::kind::Kind;
use crate::result::Result;

/// Runtime type name every guard reports in a guard-mismatch message.
const GUARD_TYPE: &str = "function";

fn shape_mismatch(function: &'static str, value: Option<&Value>) -> ConversionError {
    let kind = Kind::of(value);
    debug!(function, kind = %kind, "unknown value rejected");
    ConversionError::shape_mismatch(function, kind)
}

fn nullable<'a, T, F>(value: Option<&'a Value>, convert: F) -> Result<Option<T>>
where
    F: FnOnce(Option<&'a Value>) -> Result<T>,
{
    match value {
        None | Some(Value::Null) => Ok(None),
        present => convert(present).map(Some),
    }
}

pub fn unknown_to_string<'a>(value: impl Into<Option<&'a Value>>) -> Result<&'a str> {
    let value = value.into();
    value
        .and_then(Value::as_str)
        .ok_or_else(|| shape_mismatch("unknownToString", value))
}

pub fn unknown_to_string_nullable<'a>(
    value: impl Into<Option<&'a Value>>,
) -> Result<Option<&'a str>> {
    nullable(value.into(), unknown_to_string)
}

/// Numbers are read as `f64`, the only numeric type JSON guarantees.
pub fn unknown_to_number<'a>(value: impl Into<Option<&'a Value>>) -> Result<f64> {
    let value = value.into();
    value
        .and_then(Value::as_f64)
        .ok_or_else(|| shape_mismatch("unknownToNumber", value))
}

pub fn unknown_to_number_nullable<'a>(value: impl Into<Option<&'a Value>>) -> Result<Option<f64>> {
    nullable(value.into(), unknown_to_number)
}

pub fn unknown_to_boolean<'a>(value: impl Into<Option<&'a Value>>) -> Result<bool> {
    let value = value.into();
    value
        .and_then(Value::as_bool)
        .ok_or_else(|| shape_mismatch("unknownToBoolean", value))
}

pub fn unknown_to_boolean_nullable<'a>(
    value: impl Into<Option<&'a Value>>,
) -> Result<Option<bool>> {
    nullable(value.into(), unknown_to_boolean)
}

/// Narrow to an array of still-unknown elements.
pub fn unknown_to_array<'a>(value: impl Into<Option<&'a Value>>) -> Result<&'a [Value]> {
    let value = value.into();
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| shape_mismatch("unknownToArray", value))
}

pub fn unknown_to_array_nullable<'a>(
    value: impl Into<Option<&'a Value>>,
) -> Result<Option<&'a [Value]>> {
    nullable(value.into(), unknown_to_array)
}

/// Narrow to an object whose values are still unknown.
pub fn unknown_to_object<'a>(value: impl Into<Option<&'a Value>>) -> Result<&'a UnknownObject> {
    let value = value.into();
    value
        .and_then(Value::as_object)
        .ok_or_else(|| shape_mismatch("unknownToObject", value))
}

pub fn unknown_to_object_nullable<'a>(
    value: impl Into<Option<&'a Value>>,
) -> Result<Option<&'a UnknownObject>> {
    nullable(value.into(), unknown_to_object)
}

/// Check every element of `values` with `guard`.
///
/// On failure the message reports the guard as `valueF=function`.
pub fn unknown_array_to_array_type<G>(values: &[Value], guard: G) -> Result<&[Value]>
where
    G: Fn(&Value) -> bool,
{
    if guards::array_of(values, guard) {
        Ok(values)
    } else {
        let error = ConversionError::guard_mismatch(
            "unknownArrayToArrayType",
            Kind::Object,
            format!("valueF={GUARD_TYPE}"),
        );
        debug!(%error, len = values.len(), "array rejected");
        Err(error)
    }
}

pub fn unknown_array_to_array_type_nullable<G>(
    values: Option<&[Value]>,
    guard: G,
) -> Result<Option<&[Value]>>
where
    G: Fn(&Value) -> bool,
{
    values
        .map(|values| unknown_array_to_array_type(values, guard))
        .transpose()
}

/// Check every entry of `object` with `key_guard` and `value_guard`.
///
/// Keys reach `key_guard` as strings; see [`guards::map_of`].
pub fn unknown_object_to_record<K, V>(
    object: &UnknownObject,
    key_guard: K,
    value_guard: V,
) -> Result<&UnknownObject>
where
    K: Fn(&Value) -> bool,
    V: Fn(&Value) -> bool,
{
    if guards::map_of(object, key_guard, value_guard) {
        Ok(object)
    } else {
        let error = ConversionError::guard_mismatch(
            "unknownObjectToRecord",
            Kind::Object,
            format!("keyF={GUARD_TYPE}, valueF={GUARD_TYPE}"),
        );
        debug!(%error, len = object.len(), "object rejected");
        Err(error)
    }
}

pub fn unknown_object_to_record_nullable<K, V>(
    object: Option<&UnknownObject>,
    key_guard: K,
    value_guard: V,
) -> Result<Option<&UnknownObject>>
where
    K: Fn(&Value) -> bool,
    V: Fn(&Value) -> bool,
{
    object
        .map(|object| unknown_object_to_record(object, key_guard, value_guard))
        .transpose()
}

/// Convert every element with `convert`, keeping the first error.
///
/// ```
/// use narrow_core::{unknown_array_to_vec, unknown_to_number};
/// use serde_json::json;
///
/// let values = [json!(1), json!(2.5)];
/// assert_eq!(unknown_array_to_vec(&values, unknown_to_number).ok(), Some(vec![1.0, 2.5]));
/// ```
pub fn unknown_array_to_vec<'a, T, E, F>(
    values: &'a [Value],
    convert: F,
) -> std::result::Result<Vec<T>, E>
where
    F: FnMut(&'a Value) -> std::result::Result<T, E>,
{
    values.iter().map(convert).collect()
}
