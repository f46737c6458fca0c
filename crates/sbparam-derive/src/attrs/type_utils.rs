//! Type analysis utilities for field types.

use syn::{PathArguments, Type, TypePath};

const PRIMITIVES: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
    "f32", "f64",
];

/// Check if a type names one of the primitive kinds a parameter can decode.
///
/// Only the last path segment is inspected, so `std::string::String` matches
/// while aliases and wrappers such as `Option<i64>` do not. Used for untagged
/// fields only.
pub fn is_primitive_type(ty: &Type) -> bool {
    match ty {
        Type::Path(TypePath { qself: None, path }) => path
            .segments
            .last()
            .map(|s| {
                matches!(s.arguments, PathArguments::None)
                    && PRIMITIVES.contains(&s.ident.to_string().as_str())
            })
            .unwrap_or(false),
        Type::Group(group) => is_primitive_type(&group.elem),
        Type::Paren(paren) => is_primitive_type(&paren.elem),
        _ => false,
    }
}
