use crate::value::Value;

/// Canonical-width conversion for one kind family.
///
/// `from_value` converts a present source value; `parse_default` parses a
/// field's default value text.
pub trait FromParamValue: Sized {
    const TYPE_NAME: &'static str;
    fn from_value(value: &Value) -> Option<Self>;
    fn parse_default(text: &str) -> Result<Self, String>;
}

impl FromParamValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_string().map(str::to_string)
    }

    fn parse_default(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }
}

impl FromParamValue for i64 {
    const TYPE_NAME: &'static str = "int";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }

    fn parse_default(text: &str) -> Result<Self, String> {
        text.parse::<i64>().map_err(|e| e.to_string())
    }
}

impl FromParamValue for f64 {
    const TYPE_NAME: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }

    fn parse_default(text: &str) -> Result<Self, String> {
        text.parse::<f64>().map_err(|e| e.to_string())
    }
}

impl FromParamValue for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn parse_default(text: &str) -> Result<Self, String> {
        match text {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(format!("invalid boolean literal '{text}'")),
        }
    }
}

/// Unsigned defaults are parsed directly at 64 bits; source values go
/// through the signed conversion first (see [`crate::decode::decode_uint`]).
pub(crate) fn parse_unsigned_default(text: &str) -> Result<u64, String> {
    text.parse::<u64>().map_err(|e| e.to_string())
}
