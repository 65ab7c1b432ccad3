//! Validating conversion from `JsonValue` into the schema types.

use std::borrow::Cow;
use std::convert::TryFrom;

use tracing::debug;

use crate::error::{JsonKind, Path, SchemaError, Segment};
use crate::parser::{Parser, UnrecognizedEnumValue};
use crate::types::{JsonMap, JsonValue, Timestamp};

/// Types that can be read from a JSON value present in the document.
pub trait FromJson: Sized {
    fn from_json(value: &JsonValue, cx: &mut Cursor) -> Result<Self, SchemaError>;
}

/// Types that can be read from an object field which may be absent.
///
/// `Option<T>` reads an absent or `null` field as `None`. The other
/// implementors are required fields and report `MissingField` instead.
pub trait Field: Sized {
    fn from_field(value: Option<&JsonValue>, cx: &mut Cursor) -> Result<Self, SchemaError>;

    fn is_absent(&self) -> bool {
        false
    }
}

/// State of a single parse: where in the document we are, and the notices
/// collected so far.
pub struct Cursor {
    path: Path,
    parser: Parser,
    unrecognized: Vec<UnrecognizedEnumValue>,
}

impl Cursor {
    pub fn new(parser: Parser) -> Self {
        Cursor {
            path: Path::root(),
            parser,
            unrecognized: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn into_unrecognized(self) -> Vec<UnrecognizedEnumValue> {
        self.unrecognized
    }

    /// Runs `f` with `key` appended to the current path.
    pub fn field<T, F>(&mut self, key: &'static str, f: F) -> Result<T, SchemaError>
    where
        F: FnOnce(&mut Self) -> Result<T, SchemaError>,
    {
        self.path.push(Segment::Key(Cow::Borrowed(key)));
        let ret = f(self);
        self.path.pop();
        ret
    }

    /// Runs `f` with `index` appended to the current path.
    pub fn element<T, F>(&mut self, index: usize, f: F) -> Result<T, SchemaError>
    where
        F: FnOnce(&mut Self) -> Result<T, SchemaError>,
    {
        self.path.push(Segment::Index(index));
        let ret = f(self);
        self.path.pop();
        ret
    }

    pub fn missing(&self) -> SchemaError {
        SchemaError::MissingField {
            path: self.path.clone(),
        }
    }

    pub fn wrong_type(&self, expected: JsonKind, value: &JsonValue) -> SchemaError {
        SchemaError::WrongType {
            path: self.path.clone(),
            expected,
            actual: JsonKind::of(value),
        }
    }

    /// Fails with `WrongType` unless `value` is of a kind `expected` accepts.
    pub fn expect(&self, expected: JsonKind, value: &JsonValue) -> Result<(), SchemaError> {
        if expected.accepts(JsonKind::of(value)) {
            Ok(())
        } else {
            Err(self.wrong_type(expected, value))
        }
    }

    pub fn invalid(&self, message: impl Into<String>) -> SchemaError {
        SchemaError::InvalidValue {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    /// Records an enumeration tag not known to this library, or rejects it
    /// if the parser is configured to do so.
    pub fn unrecognized(&mut self, value: &str) -> Result<(), SchemaError> {
        if self.parser.rejects_unrecognized_enums() {
            return Err(SchemaError::UnknownEnumValue {
                path: self.path.clone(),
                value: value.to_owned(),
            });
        }

        debug!(path = %self.path, value, "unrecognized enum value");
        self.unrecognized.push(UnrecognizedEnumValue {
            path: self.path.clone(),
            value: value.to_owned(),
        });
        Ok(())
    }

    pub fn object<'v>(&self, value: &'v JsonValue) -> Result<&'v JsonMap<String, JsonValue>, SchemaError> {
        match *value {
            JsonValue::Object(ref map) => Ok(map),
            _ => Err(self.wrong_type(JsonKind::Object, value)),
        }
    }

    pub fn array<'v>(&self, value: &'v JsonValue) -> Result<&'v [JsonValue], SchemaError> {
        match *value {
            JsonValue::Array(ref vec) => Ok(vec),
            _ => Err(self.wrong_type(JsonKind::Array, value)),
        }
    }

    pub fn string<'v>(&self, value: &'v JsonValue) -> Result<&'v str, SchemaError> {
        match *value {
            JsonValue::String(ref s) => Ok(s),
            _ => Err(self.wrong_type(JsonKind::String, value)),
        }
    }
}

/// Reads a required field.
pub fn required<T: FromJson>(value: Option<&JsonValue>, cx: &mut Cursor) -> Result<T, SchemaError> {
    match value {
        None | Some(JsonValue::Null) => Err(cx.missing()),
        Some(v) => T::from_json(v, cx),
    }
}

impl<T: FromJson> Field for Option<T> {
    fn from_field(value: Option<&JsonValue>, cx: &mut Cursor) -> Result<Self, SchemaError> {
        match value {
            None | Some(JsonValue::Null) => Ok(None),
            Some(v) => T::from_json(v, cx).map(Some),
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: FromJson> Field for Vec<T> {
    fn from_field(value: Option<&JsonValue>, cx: &mut Cursor) -> Result<Self, SchemaError> {
        required(value, cx)
    }
}

impl Field for String {
    fn from_field(value: Option<&JsonValue>, cx: &mut Cursor) -> Result<Self, SchemaError> {
        required(value, cx)
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    fn from_json(value: &JsonValue, cx: &mut Cursor) -> Result<Self, SchemaError> {
        let elements = cx.array(value)?;
        let mut ret = Vec::with_capacity(elements.len());

        for (i, v) in elements.iter().enumerate() {
            let t = cx
                .element(i, |cx| T::from_json(v, cx))
                .map_err(|e| SchemaError::Element {
                    path: cx.path().clone(),
                    index: i,
                    source: Box::new(e),
                })?;
            ret.push(t);
        }

        Ok(ret)
    }
}

impl FromJson for String {
    fn from_json(value: &JsonValue, cx: &mut Cursor) -> Result<Self, SchemaError> {
        cx.string(value).map(str::to_owned)
    }
}

impl FromJson for bool {
    fn from_json(value: &JsonValue, cx: &mut Cursor) -> Result<Self, SchemaError> {
        match *value {
            JsonValue::Bool(b) => Ok(b),
            _ => Err(cx.wrong_type(JsonKind::Boolean, value)),
        }
    }
}

impl FromJson for f64 {
    fn from_json(value: &JsonValue, cx: &mut Cursor) -> Result<Self, SchemaError> {
        cx.expect(JsonKind::Number, value)?;
        value.as_f64().ok_or_else(|| cx.wrong_type(JsonKind::Number, value))
    }
}

macro_rules! integers {
    ($($T:ident),*) => {$(
        impl FromJson for $T {
            fn from_json(value: &JsonValue, cx: &mut Cursor) -> Result<Self, SchemaError> {
                cx.expect(JsonKind::Integer, value)?;

                let ret = match value.as_i64() {
                    Some(i) => $T::try_from(i).ok(),
                    None => value.as_u64().and_then(|u| $T::try_from(u).ok()),
                };

                ret.ok_or_else(|| cx.invalid(format!("{} is out of range for {}", value, stringify!($T))))
            }
        }
    )*};
}

integers!(i32, i64, u32);

impl FromJson for Timestamp {
    fn from_json(value: &JsonValue, cx: &mut Cursor) -> Result<Self, SchemaError> {
        let s = cx.string(value)?;
        Timestamp::parse_from_rfc3339(s)
            .map_err(|e| cx.invalid(format!("{:?} is not an RFC 3339 timestamp: {}", s, e)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse<T: FromJson>(value: JsonValue) -> Result<T, SchemaError> {
        T::from_json(&value, &mut Cursor::new(Parser::new()))
    }

    #[test]
    fn numbers() {
        assert_eq!(parse::<f64>(json!(4)).unwrap(), 4.0);
        assert_eq!(parse::<f64>(json!(4.5)).unwrap(), 4.5);
        assert_eq!(parse::<i32>(json!(-3)).unwrap(), -3);
        assert_eq!(parse::<u32>(json!(3)).unwrap(), 3);

        match parse::<u32>(json!(1.5)).unwrap_err() {
            SchemaError::WrongType { expected, actual, .. } => {
                assert_eq!(expected, JsonKind::Integer);
                assert_eq!(actual, JsonKind::Number);
            }
            e => panic!("unexpected error: {:?}", e),
        }
        match parse::<u32>(json!(-1)).unwrap_err() {
            SchemaError::InvalidValue { .. } => {}
            e => panic!("unexpected error: {:?}", e),
        }
        assert_eq!(parse::<f64>(json!(u64::MAX)).unwrap(), u64::MAX as f64);
        assert_eq!(parse::<i64>(json!(u64::MAX)).unwrap_err().to_string(), format!(
            "invalid value at `(root)`: {} is out of range for i64",
            u64::MAX
        ));
        match parse::<f64>(json!("five")).unwrap_err() {
            SchemaError::WrongType { expected, actual, .. } => {
                assert_eq!(expected, JsonKind::Number);
                assert_eq!(actual, JsonKind::String);
            }
            e => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn no_coercion() {
        parse::<bool>(json!("true")).unwrap_err();
        parse::<String>(json!(1)).unwrap_err();
        parse::<i64>(json!("12")).unwrap_err();
    }

    #[test]
    fn timestamp() {
        let t = parse::<Timestamp>(json!("2024-05-01T09:30:00.123+02:00")).unwrap();
        assert_eq!(t.offset().local_minus_utc(), 2 * 60 * 60);
        assert_eq!(t.timestamp(), 1_714_548_600);

        match parse::<Timestamp>(json!("yesterday")).unwrap_err() {
            SchemaError::InvalidValue { .. } => {}
            e => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn sequence_reports_index() {
        let e = parse::<Vec<u32>>(json!([1, 2, "3"])).unwrap_err();
        assert_eq!(e.index(), Some(2));
        assert_eq!(e.root_cause().path().to_string(), "[2]");
    }

    #[test]
    fn optional_and_required_fields() {
        let mut cx = Cursor::new(Parser::new());
        let absent: Option<String> = cx.field("a", |cx| Field::from_field(None, cx)).unwrap();
        assert_eq!(absent, None);
        let null: Option<String> = cx
            .field("a", |cx| Field::from_field(Some(&JsonValue::Null), cx))
            .unwrap();
        assert_eq!(null, None);

        let e = cx
            .field("id", |cx| <String as Field>::from_field(None, cx))
            .unwrap_err();
        assert_eq!(e, SchemaError::MissingField { path: cx_path("id") });
        assert!(cx.path().is_root());
    }

    fn cx_path(key: &'static str) -> Path {
        let mut p = Path::root();
        p.push(Segment::Key(key.into()));
        p
    }

    #[test]
    fn field_keys_are_borrowed() {
        let mut cx = Cursor::new(Parser::new());
        let e = cx
            .field("places", |cx| {
                cx.element(0, |cx| cx.field("id", |cx| <String as Field>::from_field(None, cx)))
            })
            .unwrap_err();

        let segments = e.path().segments();
        assert_eq!(segments.len(), 3);
        for segment in &[&segments[0], &segments[2]] {
            match **segment {
                Segment::Key(Cow::Borrowed(_)) => {}
                ref s => panic!("unexpected segment: {:?}", s),
            }
        }
        assert_eq!(e.path().to_string(), "places[0].id");
    }

    #[test]
    fn expect_kind() {
        let cx = Cursor::new(Parser::new());
        cx.expect(JsonKind::Number, &json!(3)).unwrap();
        cx.expect(JsonKind::Number, &json!(3.5)).unwrap();
        cx.expect(JsonKind::Integer, &json!(3)).unwrap();
        match cx.expect(JsonKind::Integer, &json!(3.5)).unwrap_err() {
            SchemaError::WrongType { expected, actual, .. } => {
                assert_eq!(expected, JsonKind::Integer);
                assert_eq!(actual, JsonKind::Number);
            }
            e => panic!("unexpected error: {:?}", e),
        }
    }
}
