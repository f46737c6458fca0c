//! Enum types for sbparam attribute configuration.

/// Rename strategy applied to field names before they become lookup keys.
///
/// Every strategy maps a Rust identifier to a valid bare path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenameStrategy {
    #[default]
    None,
    CamelCase,
    PascalCase,
    SnakeCase,
    Lowercase,
    Uppercase,
}

impl RenameStrategy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "camelCase" => Some(RenameStrategy::CamelCase),
            "PascalCase" => Some(RenameStrategy::PascalCase),
            "snake_case" => Some(RenameStrategy::SnakeCase),
            "lowercase" => Some(RenameStrategy::Lowercase),
            "UPPERCASE" => Some(RenameStrategy::Uppercase),
            "none" => Some(RenameStrategy::None),
            _ => None,
        }
    }

    pub fn apply(&self, name: &str) -> String {
        match self {
            RenameStrategy::None => name.to_string(),
            RenameStrategy::CamelCase => to_camel_case(name, false),
            RenameStrategy::PascalCase => to_camel_case(name, true),
            RenameStrategy::SnakeCase => to_snake_case(name),
            RenameStrategy::Lowercase => name.to_lowercase(),
            RenameStrategy::Uppercase => name.to_uppercase(),
        }
    }
}

fn to_camel_case(s: &str, upper_first: bool) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = upper_first;

    for c in s.chars() {
        if c == '_' || c == '-' {
            upper_next = !result.is_empty() || upper_first;
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else if result.is_empty() {
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_lower = false;

    for c in s.chars() {
        if c == '-' {
            result.push('_');
            prev_lower = false;
        } else if c.is_ascii_uppercase() {
            if prev_lower {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_ascii_lowercase();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::RenameStrategy;

    #[test]
    fn rename_strategy_camel_and_pascal() {
        assert_eq!(RenameStrategy::CamelCase.apply("str_field1"), "strField1");
        assert_eq!(RenameStrategy::PascalCase.apply("str_field1"), "StrField1");
        assert_eq!(RenameStrategy::PascalCase.apply("int8_field"), "Int8Field");
    }

    #[test]
    fn rename_strategy_snake() {
        assert_eq!(RenameStrategy::SnakeCase.apply("maxSize"), "max_size");
    }

    #[test]
    fn rename_strategy_case() {
        assert_eq!(RenameStrategy::Lowercase.apply("MyField"), "myfield");
        assert_eq!(RenameStrategy::Uppercase.apply("my_field"), "MY_FIELD");
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert_eq!(RenameStrategy::parse("SCREAMING"), None);
        assert_eq!(RenameStrategy::parse("camelCase"), Some(RenameStrategy::CamelCase));
    }
}
