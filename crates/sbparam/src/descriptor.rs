//! Field metadata resolution.
//!
//! A field tag has the shape `"<key>,<modifier>,<default>"`. Every component
//! is optional and trailing empty components may be left out:
//!
//! - `key` overrides the lookup key (the declared field name otherwise),
//! - a modifier of `omitempty` makes the field optional,
//! - a third component, even an empty one, makes the field optional and
//!   becomes its default value text.

/// Modifier marking a field as optional without supplying a default.
pub const OMITEMPTY: &str = "omitempty";

/// Normalized decoding parameters of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: String,
    pub required: bool,
    /// Default value text, parsed into the field's kind when needed.
    pub default: String,
}

impl FieldDescriptor {
    pub fn resolve(field_name: &str, tag: Option<&str>) -> Self {
        let mut descriptor = Self {
            key: field_name.to_string(),
            required: true,
            default: String::new(),
        };
        let Some(tag) = tag else {
            return descriptor;
        };

        let mut parts = tag.split(',');
        if let Some(key) = parts.next().filter(|key| !key.is_empty()) {
            descriptor.key = key.to_string();
        }
        if parts.next() == Some(OMITEMPTY) {
            descriptor.required = false;
        }
        if let Some(default) = parts.next() {
            descriptor.required = false;
            descriptor.default = default.to_string();
        }
        descriptor
    }
}
