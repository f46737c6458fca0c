use std::fmt;

use crate::path::PathError;

#[derive(Debug, Clone, PartialEq)]
pub struct ParamError {
    pub struct_name: String,
    pub field_name: Option<String>,
    pub key: Option<String>,
    pub required: bool,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// The destination cannot be written to.
    UnsupportedType { type_name: &'static str },
    InvalidPath(PathError),
    MissingRequired,
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    InvalidDefault {
        expected: &'static str,
        value: String,
        reason: String,
    },
    NegativeUnsigned { value: i64 },
    Overflow {
        target: &'static str,
        value: String,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnsupportedType { type_name } => {
                write!(f, "'{type_name}' type is not supported")
            }
            ErrorKind::InvalidPath(err) => {
                write!(f, "cannot compile '{}' as path: {}", err.path, err.reason)
            }
            ErrorKind::MissingRequired => write!(f, "key is not found in param"),
            ErrorKind::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch, value is not '{expected}' (found {actual})")
            }
            ErrorKind::InvalidDefault {
                expected,
                value,
                reason,
            } => {
                write!(f, "default value '{value}' is not '{expected}': {reason}")
            }
            ErrorKind::NegativeUnsigned { value } => {
                write!(f, "value is not 'uint': {value}")
            }
            ErrorKind::Overflow { target, value } => {
                write!(f, "{target} overflow error: {value}")
            }
        }
    }
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error decoding {}", self.struct_name)?;

        if let Some(ref field) = self.field_name {
            write!(f, " field '{field}'")?;
        }

        if let Some(ref key) = self.key {
            if self.field_name.as_deref() != Some(key.as_str()) {
                write!(f, " (key: '{key}')")?;
            }
        }

        write!(f, ": {}", self.kind)?;

        if self.required && matches!(self.kind, ErrorKind::MissingRequired) {
            write!(f, " (this field is required)")?;
        }

        Ok(())
    }
}

impl std::error::Error for ParamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::InvalidPath(err) => Some(err),
            _ => None,
        }
    }
}

impl ParamError {
    pub fn unsupported_type(type_name: &'static str) -> Self {
        Self {
            struct_name: type_name.to_string(),
            field_name: None,
            key: None,
            required: false,
            kind: ErrorKind::UnsupportedType { type_name },
        }
    }

    /// Attach record, field and key context to an error raised while
    /// decoding a single field.
    pub fn field(
        struct_name: impl Into<String>,
        field_name: impl Into<String>,
        key: impl Into<String>,
        required: bool,
        kind: ErrorKind,
    ) -> Self {
        Self {
            struct_name: struct_name.into(),
            field_name: Some(field_name.into()),
            key: Some(key.into()),
            required,
            kind,
        }
    }
}
