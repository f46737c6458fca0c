//! Decode loosely typed parameter maps into typed structs.
//!
//! ```
//! use sbparam::{Map, Param};
//!
//! #[derive(Debug, Default, Param)]
//! struct Source {
//!     path: String,
//!     #[sbparam("interval,,10")]
//!     interval_ms: u32,
//! }
//!
//! let params = Map::from([("path", "/tmp/in.jsonl")]);
//! let source = Source::unmarshal_from(&params).unwrap();
//! assert_eq!(source.interval_ms, 10);
//! ```

pub mod convert;
pub mod decode;
pub mod descriptor;
pub mod error;
pub mod field;
pub mod path;
pub mod value;

pub use convert::FromParamValue;
pub use descriptor::{FieldDescriptor, OMITEMPTY};
pub use error::{ErrorKind, ParamError};
pub use field::{DecodeFn, FieldKind, FieldSpec, ParamField};
pub use path::{Path, PathError, PathSegment};
pub use value::{Map, Value};

/// A record whose fields can be decoded from a [`Map`].
///
/// Implemented by `#[derive(Param)]`, which emits one [`FieldSpec`] per
/// field of a supported primitive kind, in declaration order.
pub trait Param: Sized {
    const NAME: &'static str;

    fn fields() -> Vec<FieldSpec<Self>>;

    fn unmarshal_from(map: &Map) -> Result<Self, ParamError>
    where
        Self: Default,
    {
        let mut record = Self::default();
        unmarshal(map, &mut record)?;
        Ok(record)
    }
}

/// Decode `map` into `dest`, field by field.
///
/// Stops at the first failing field. Fields decoded before it keep their new
/// values.
pub fn unmarshal<T: Param>(map: &Map, dest: &mut T) -> Result<(), ParamError> {
    let _span = tracing::trace_span!("unmarshal", record = T::NAME).entered();
    for field in T::fields() {
        decode_field(map, dest, &field)?;
    }
    Ok(())
}

/// Like [`unmarshal`], but rejects a missing destination before touching
/// anything.
pub fn unmarshal_opt<T: Param>(map: &Map, dest: Option<&mut T>) -> Result<(), ParamError> {
    match dest {
        Some(dest) => unmarshal(map, dest),
        None => Err(ParamError::unsupported_type(std::any::type_name::<T>())),
    }
}

fn decode_field<T: Param>(map: &Map, dest: &mut T, field: &FieldSpec<T>) -> Result<(), ParamError> {
    let descriptor = FieldDescriptor::resolve(field.name, field.tag);
    let context = |kind| {
        ParamError::field(
            T::NAME,
            field.ident,
            descriptor.key.as_str(),
            descriptor.required,
            kind,
        )
    };

    let path = Path::compile(&descriptor.key).map_err(|err| context(ErrorKind::InvalidPath(err)))?;
    let source = map.get(&path);
    if source.is_none() && descriptor.required {
        return Err(context(ErrorKind::MissingRequired));
    }

    tracing::trace!(
        key = %descriptor.key,
        kind = %field.kind,
        present = source.is_some(),
        "decoding field"
    );
    (field.decode)(dest, source, &descriptor).map_err(context)
}

pub use sbparam_derive::Param;
