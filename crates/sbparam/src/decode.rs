//! Per-kind decoding at canonical width.
//!
//! Every routine takes the looked-up source value (`None` when the key is
//! absent) and the field's descriptor. Narrowing to the declared width is
//! left to [`ParamField`](crate::ParamField).

use crate::convert::{FromParamValue, parse_unsigned_default};
use crate::descriptor::FieldDescriptor;
use crate::error::ErrorKind;
use crate::value::Value;

fn parse_default<T: FromParamValue>(descriptor: &FieldDescriptor) -> Result<T, ErrorKind> {
    T::parse_default(&descriptor.default).map_err(|reason| ErrorKind::InvalidDefault {
        expected: T::TYPE_NAME,
        value: descriptor.default.clone(),
        reason,
    })
}

fn decode_canonical<T: FromParamValue>(
    source: Option<&Value>,
    descriptor: &FieldDescriptor,
) -> Result<T, ErrorKind> {
    let Some(value) = source else {
        return parse_default(descriptor);
    };
    if let Some(converted) = T::from_value(value) {
        return Ok(converted);
    }
    if descriptor.required {
        return Err(ErrorKind::TypeMismatch {
            expected: T::TYPE_NAME,
            actual: value.type_name(),
        });
    }
    tracing::debug!(
        key = %descriptor.key,
        expected = T::TYPE_NAME,
        actual = value.type_name(),
        "value type mismatch, using default"
    );
    parse_default(descriptor)
}

pub fn decode_string(
    source: Option<&Value>,
    descriptor: &FieldDescriptor,
) -> Result<String, ErrorKind> {
    decode_canonical(source, descriptor)
}

/// Every signed integer kind is decoded as `i64` before narrowing.
pub fn decode_int(source: Option<&Value>, descriptor: &FieldDescriptor) -> Result<i64, ErrorKind> {
    decode_canonical(source, descriptor)
}

/// Source values are converted as signed integers first. A negative value is
/// rejected before the required/default decision, so an optional field with a
/// valid default still fails on `-1`.
pub fn decode_uint(source: Option<&Value>, descriptor: &FieldDescriptor) -> Result<u64, ErrorKind> {
    let unsigned_default = || {
        parse_unsigned_default(&descriptor.default).map_err(|reason| ErrorKind::InvalidDefault {
            expected: "uint",
            value: descriptor.default.clone(),
            reason,
        })
    };

    let Some(value) = source else {
        return unsigned_default();
    };
    match value.as_int() {
        Some(n) if n < 0 => Err(ErrorKind::NegativeUnsigned { value: n }),
        Some(n) => Ok(n as u64),
        None if descriptor.required => Err(ErrorKind::TypeMismatch {
            expected: "uint",
            actual: value.type_name(),
        }),
        None => {
            tracing::debug!(
                key = %descriptor.key,
                actual = value.type_name(),
                "value is not an unsigned integer, using default"
            );
            unsigned_default()
        }
    }
}

pub fn decode_float(source: Option<&Value>, descriptor: &FieldDescriptor) -> Result<f64, ErrorKind> {
    decode_canonical(source, descriptor)
}

pub fn decode_bool(source: Option<&Value>, descriptor: &FieldDescriptor) -> Result<bool, ErrorKind> {
    decode_canonical(source, descriptor)
}
