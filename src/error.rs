//! Error types

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::types::JsonValue;

/// A location inside a JSON document, displayed like `places[1].reviews[0].rating`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Path(Vec<Segment>);

/// One step of a `Path`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Segment {
    /// A key of a JSON object. Keys declared by the schema are borrowed.
    Key(Cow<'static, str>),
    /// An index into a JSON array.
    Index(usize),
}

/// The kind of a JSON value, as far as the schema is concerned.
///
/// `Integer` is a sub-kind of `Number`: a field declared as `Number` accepts
/// integers, but not the other way around.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

/// An error describing why a JSON value does not conform to the schema.
///
/// Every variant carries the `Path` of the offending value.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaError {
    /// A required field is absent (or `null`).
    #[error("missing field `{path}`")]
    MissingField { path: Path },

    /// A value has a JSON type other than the declared one.
    #[error("invalid type at `{path}`: expected {expected}, found {actual}")]
    WrongType {
        path: Path,
        expected: JsonKind,
        actual: JsonKind,
    },

    /// An enumeration tag not known to this library.
    /// Only produced when `Parser::reject_unrecognized_enums` is set.
    #[error("unknown variant {value:?} at `{path}`")]
    UnknownEnumValue { path: Path, value: String },

    /// A value of the right type that is not acceptable, e.g. an empty ID,
    /// an out-of-range coordinate or a malformed timestamp.
    #[error("invalid value at `{path}`: {message}")]
    InvalidValue { path: Path, message: String },

    /// An element of a sequence failed to parse.
    #[error("invalid element {index} of `{path}`: {source}")]
    Element {
        path: Path,
        index: usize,
        source: Box<SchemaError>,
    },
}

/// An error returned by the functions taking JSON text.
#[derive(Debug, Error)]
pub enum Error {
    /// The text is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The JSON does not conform to the schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Path {
    /// The path of the document itself.
    pub fn root() -> Self {
        Path(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("(root)");
        }

        for (i, segment) in self.0.iter().enumerate() {
            match *segment {
                Segment::Key(ref key) if i == 0 => f.write_str(key)?,
                Segment::Key(ref key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }

        Ok(())
    }
}

impl JsonKind {
    /// Returns the kind of `value`.
    pub fn of(value: &JsonValue) -> Self {
        match *value {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Bool(_) => JsonKind::Boolean,
            JsonValue::Number(ref n) if n.is_i64() || n.is_u64() => JsonKind::Integer,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }

    /// Whether a value of kind `actual` is acceptable where `self` is declared.
    pub fn accepts(self, actual: JsonKind) -> bool {
        self == actual || (self == JsonKind::Number && actual == JsonKind::Integer)
    }
}

impl AsRef<str> for JsonKind {
    fn as_ref(&self) -> &str {
        match *self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl Display for JsonKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl SchemaError {
    /// The path this error is reported at. For `Element`, this is the path of
    /// the sequence; see `root_cause` for the innermost offending value.
    pub fn path(&self) -> &Path {
        match *self {
            SchemaError::MissingField { ref path }
            | SchemaError::WrongType { ref path, .. }
            | SchemaError::UnknownEnumValue { ref path, .. }
            | SchemaError::InvalidValue { ref path, .. }
            | SchemaError::Element { ref path, .. } => path,
        }
    }

    /// Follows `Element` errors down to the error that caused them.
    pub fn root_cause(&self) -> &SchemaError {
        let mut e = self;
        while let SchemaError::Element { ref source, .. } = *e {
            e = source;
        }
        e
    }

    /// The index of the failed element, if this is an `Element` error.
    pub fn index(&self) -> Option<usize> {
        match *self {
            SchemaError::Element { index, .. } => Some(index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: Vec<Segment>) -> Path {
        let mut p = Path::root();
        for s in segments {
            p.push(s);
        }
        p
    }

    #[test]
    fn path_display() {
        use Segment::*;

        assert_eq!(Path::root().to_string(), "(root)");
        assert_eq!(path(vec![Key("rating".into())]).to_string(), "rating");
        assert_eq!(
            path(vec![
                Key("places".into()),
                Index(1),
                Key("reviews".into()),
                Index(0),
                Key("rating".into()),
            ])
            .to_string(),
            "places[1].reviews[0].rating"
        );
    }

    #[test]
    fn json_kind() {
        assert_eq!(JsonKind::of(&serde_json::json!(1)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&serde_json::json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&serde_json::json!("1")), JsonKind::String);
        assert!(JsonKind::Number.accepts(JsonKind::Integer));
        assert!(!JsonKind::Integer.accepts(JsonKind::Number));
    }

    #[test]
    fn root_cause() {
        let inner = SchemaError::MissingField {
            path: path(vec![Segment::Key("places".into()), Segment::Index(1), Segment::Key("id".into())]),
        };
        let e = SchemaError::Element {
            path: path(vec![Segment::Key("places".into())]),
            index: 1,
            source: Box::new(inner.clone()),
        };

        assert_eq!(e.index(), Some(1));
        assert_eq!(e.path().to_string(), "places");
        assert_eq!(*e.root_cause(), inner);
        assert_eq!(
            e.to_string(),
            "invalid element 1 of `places`: missing field `places[1].id`"
        );
    }
}
