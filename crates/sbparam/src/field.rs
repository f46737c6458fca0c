use std::fmt;

use crate::decode::{decode_bool, decode_float, decode_int, decode_string, decode_uint};
use crate::descriptor::FieldDescriptor;
use crate::error::ErrorKind;
use crate::value::Value;

/// Primitive kinds a record field can be decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Bool => "bool",
            FieldKind::I8 => "int8",
            FieldKind::I16 => "int16",
            FieldKind::I32 => "int32",
            FieldKind::I64 => "int64",
            FieldKind::Isize => "int",
            FieldKind::U8 => "uint8",
            FieldKind::U16 => "uint16",
            FieldKind::U32 => "uint32",
            FieldKind::U64 => "uint64",
            FieldKind::Usize => "uint",
            FieldKind::F32 => "float32",
            FieldKind::F64 => "float64",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Rust primitive that can be decoded from a parameter value.
pub trait ParamField: Sized {
    const KIND: FieldKind;
    fn decode(source: Option<&Value>, descriptor: &FieldDescriptor) -> Result<Self, ErrorKind>;
}

impl ParamField for String {
    const KIND: FieldKind = FieldKind::String;

    fn decode(source: Option<&Value>, descriptor: &FieldDescriptor) -> Result<Self, ErrorKind> {
        decode_string(source, descriptor)
    }
}

impl ParamField for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn decode(source: Option<&Value>, descriptor: &FieldDescriptor) -> Result<Self, ErrorKind> {
        decode_bool(source, descriptor)
    }
}

macro_rules! impl_param_field_int {
    ($decode:ident => $($ty:ty: $kind:ident),* $(,)?) => {
        $(
            impl ParamField for $ty {
                const KIND: FieldKind = FieldKind::$kind;

                fn decode(
                    source: Option<&Value>,
                    descriptor: &FieldDescriptor,
                ) -> Result<Self, ErrorKind> {
                    let value = $decode(source, descriptor)?;
                    <$ty>::try_from(value).map_err(|_| ErrorKind::Overflow {
                        target: Self::KIND.name(),
                        value: value.to_string(),
                    })
                }
            }
        )*
    };
}

impl_param_field_int!(decode_int => i8: I8, i16: I16, i32: I32, i64: I64, isize: Isize);
impl_param_field_int!(decode_uint => u8: U8, u16: U16, u32: U32, u64: U64, usize: Usize);

impl ParamField for f32 {
    const KIND: FieldKind = FieldKind::F32;

    fn decode(source: Option<&Value>, descriptor: &FieldDescriptor) -> Result<Self, ErrorKind> {
        let value = decode_float(source, descriptor)?;
        if value.abs() > f32::MAX as f64 {
            return Err(ErrorKind::Overflow {
                target: Self::KIND.name(),
                value: value.to_string(),
            });
        }
        Ok(value as f32)
    }
}

impl ParamField for f64 {
    const KIND: FieldKind = FieldKind::F64;

    fn decode(source: Option<&Value>, descriptor: &FieldDescriptor) -> Result<Self, ErrorKind> {
        decode_float(source, descriptor)
    }
}

/// Decodes one field of `T` and writes it in place.
pub type DecodeFn<T> = fn(&mut T, Option<&Value>, &FieldDescriptor) -> Result<(), ErrorKind>;

/// One entry of a record's field table, generated by `#[derive(Param)]`.
pub struct FieldSpec<T> {
    /// Rust field identifier, used in error messages.
    pub ident: &'static str,
    /// Declared name, the lookup key when the tag does not override it.
    pub name: &'static str,
    pub tag: Option<&'static str>,
    pub kind: FieldKind,
    pub decode: DecodeFn<T>,
}

impl<T> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("ident", &self.ident)
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .finish()
    }
}
