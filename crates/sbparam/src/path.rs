use std::fmt;

/// Compiled lookup path into a parameter [`Map`](crate::Map).
///
/// Grammar: a leading identifier or bracketed segment, followed by any number
/// of `.ident` or bracketed segments. Brackets hold either a quoted key
/// (`["a b"]`, `['a b']`) or a non-negative array index (`[0]`). Inside a
/// quoted key a backslash escapes the next character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
    pub path: String,
    pub position: usize,
    pub reason: &'static str,
}

impl PathError {
    fn new(path: &str, position: usize, reason: &'static str) -> Self {
        Self {
            path: path.to_string(),
            position,
            reason,
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid path '{}' at offset {}: {}",
            self.path, self.position, self.reason
        )
    }
}

impl std::error::Error for PathError {}

impl Path {
    pub fn compile(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::new(raw, 0, "path is empty"));
        }

        let bytes = raw.as_bytes();
        let mut segments = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            let (segment, next) = match bytes[pos] {
                b'[' => parse_bracket(raw, pos)?,
                b'.' if !segments.is_empty() => parse_ident(raw, pos + 1)?,
                _ if segments.is_empty() => parse_ident(raw, pos)?,
                _ => return Err(PathError::new(raw, pos, "expected '.' or '['")),
            };
            segments.push(segment);
            pos = next;
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn parse_ident(raw: &str, start: usize) -> Result<(PathSegment, usize), PathError> {
    let bytes = raw.as_bytes();
    let end = bytes[start..]
        .iter()
        .position(|b| !is_ident_byte(*b))
        .map_or(bytes.len(), |offset| start + offset);

    if end == start {
        return Err(PathError::new(raw, start, "expected identifier"));
    }
    if bytes[start].is_ascii_digit() {
        return Err(PathError::new(
            raw,
            start,
            "identifier cannot start with a digit",
        ));
    }
    Ok((PathSegment::Key(raw[start..end].to_string()), end))
}

fn parse_bracket(raw: &str, start: usize) -> Result<(PathSegment, usize), PathError> {
    let bytes = raw.as_bytes();
    let pos = start + 1;
    match bytes.get(pos).copied() {
        Some(quote @ (b'"' | b'\'')) => {
            let (key, close) = parse_quoted(raw, pos + 1, quote as char)?;
            if bytes.get(close + 1) != Some(&b']') {
                return Err(PathError::new(raw, close + 1, "expected ']'"));
            }
            Ok((PathSegment::Key(key), close + 2))
        }
        Some(b) if b.is_ascii_digit() => {
            let end = bytes[pos..]
                .iter()
                .position(|b| !b.is_ascii_digit())
                .map_or(bytes.len(), |offset| pos + offset);
            if bytes.get(end) != Some(&b']') {
                return Err(PathError::new(raw, end, "expected ']'"));
            }
            let index = raw[pos..end]
                .parse::<usize>()
                .map_err(|_| PathError::new(raw, pos, "array index is too large"))?;
            Ok((PathSegment::Index(index), end + 1))
        }
        Some(_) => Err(PathError::new(
            raw,
            pos,
            "expected quoted key or array index",
        )),
        None => Err(PathError::new(raw, start, "unterminated '['")),
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key)
                    if !key.is_empty()
                        && key.bytes().all(is_ident_byte)
                        && !key.as_bytes()[0].is_ascii_digit() =>
                {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathSegment::Key(key) => write_quoted(f, key)?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Read a quoted key body starting at `body`. A backslash takes the next
/// character literally. Returns the key and the offset of the closing quote.
fn parse_quoted(raw: &str, body: usize, quote: char) -> Result<(String, usize), PathError> {
    let mut key = String::new();
    let mut chars = raw[body..].char_indices();
    while let Some((offset, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, escaped)) => key.push(escaped),
                None => return Err(PathError::new(raw, body + offset, "dangling escape")),
            },
            c if c == quote => return Ok((key, body + offset)),
            c => key.push(c),
        }
    }
    Err(PathError::new(raw, body - 1, "unterminated quoted key"))
}

fn write_quoted(f: &mut fmt::Formatter<'_>, key: &str) -> fmt::Result {
    f.write_str("[\"")?;
    for c in key.chars() {
        if c == '"' || c == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"]")
}
