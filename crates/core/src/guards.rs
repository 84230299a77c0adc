//! Shape guards: pure predicates over unknown values.
//!
//! Every guard is total. JSON `null` never satisfies a guard; absence is
//! handled one level up by the nullable conversions.

use serde_json::{Map, Value};
use tracing::trace;

/// A decoded but unvalidated JSON object.
pub type UnknownObject = Map<String, Value>;

#[must_use]
pub const fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

#[must_use]
pub const fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

#[must_use]
pub const fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Any array, whatever its elements.
#[must_use]
pub const fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

/// A key/value object. Arrays and `null` are not objects here.
#[must_use]
pub const fn is_unknown_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Check that every element satisfies `guard`.
///
/// True for an empty slice. Stops at the first rejected element.
pub fn array_of<G>(values: &[Value], guard: G) -> bool
where
    G: Fn(&Value) -> bool,
{
    match values.iter().position(|value| !guard(value)) {
        Some(index) => {
            trace!(index, "array element rejected by guard");
            false
        }
        None => true,
    }
}

/// Check that every entry's key and value satisfy their guards.
///
/// True for an empty object. Stops at the first rejected entry.
///
/// Keys are presented to `key_guard` as `Value::String`, because object keys
/// are always text once decoded. A numeric key guard therefore rejects every
/// non-empty object, even one written as `{ "5": ... }`.
pub fn map_of<K, V>(object: &UnknownObject, key_guard: K, value_guard: V) -> bool
where
    K: Fn(&Value) -> bool,
    V: Fn(&Value) -> bool,
{
    let rejected = object.iter().find(|&(key, value)| {
        !key_guard(&Value::String(key.clone())) || !value_guard(value)
    });

    match rejected {
        Some((key, _)) => {
            trace!(key = %key, "object entry rejected by guard");
            false
        }
        None => true,
    }
}
