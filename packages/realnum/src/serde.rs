// JSON helpers over serde-json-wasm, so that all callers report type names
// the same way and the backend can be switched in one place.

use core::any::type_name;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{RealError, RealResult};

/// Deserializes the given JSON bytes to a data structure.
///
/// Errors if the input is not valid JSON or cannot be deserialized to the given type.
pub fn from_json<T: DeserializeOwned>(value: impl AsRef<[u8]>) -> RealResult<T> {
    serde_json_wasm::from_slice(value.as_ref())
        .map_err(|e| RealError::parse_err(type_name::<T>(), e))
}

/// Serializes the given data structure as a JSON byte vector.
pub fn to_json_vec<T>(data: &T) -> RealResult<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    serde_json_wasm::to_vec(data).map_err(|e| RealError::serialize_err(type_name::<T>(), e))
}

/// Serializes the given data structure as a JSON string.
pub fn to_json_string<T>(data: &T) -> RealResult<String>
where
    T: Serialize + ?Sized,
{
    serde_json_wasm::to_string(data).map_err(|e| RealError::serialize_err(type_name::<T>(), e))
}
