//! Attribute parsing for the `Param` derive macro.
//!
//! - `types` - Enum definitions for attribute values
//! - `container` - Struct-level attribute definitions
//! - `field` - Field-level attribute definitions and tag folding
//! - `type_utils` - Type analysis utilities
//! - `parse` - Parsing entry points using `parse_nested_meta`

mod container;
mod field;
mod parse;
mod type_utils;
mod types;

pub use container::StructAttrs;
pub use parse::{parse_field_attrs, parse_struct_attrs};
pub use type_utils::is_primitive_type;
