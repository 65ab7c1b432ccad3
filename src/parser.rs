//! Configurable entry point to the validating parser.

use tracing::trace;

use crate::de::{Cursor, FromJson};
use crate::error::{Path, SchemaError};
use crate::legacy;
use crate::place::Place;
use crate::response::{PlaceDetailsResponse, SearchPlacesResponse};
use crate::types::JsonValue;

/// A builder-style configuration of the parser.
///
/// The defaults accept enumeration tags unknown to this library and reject
/// out-of-range coordinates.
///
/// ## Example
///
/// ```rust
/// use google_places_schema::{BusinessStatus, Parser, SchemaError};
/// use serde_json::json;
///
/// let json = json!({ "id": "ChIJ", "businessStatus": "SOME_FUTURE_STATUS" });
///
/// let parsed = Parser::new().place(&json).unwrap();
/// assert_eq!(
///     parsed.value.business_status,
///     Some(BusinessStatus::Unrecognized("SOME_FUTURE_STATUS".to_owned()))
/// );
/// assert_eq!(parsed.unrecognized[0].path.to_string(), "businessStatus");
///
/// match Parser::new().reject_unrecognized_enums(true).place(&json) {
///     Err(SchemaError::UnknownEnumValue { value, .. }) => assert_eq!(value, "SOME_FUTURE_STATUS"),
///     r => panic!("{:?}", r),
/// }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Parser {
    reject_unrecognized_enums: bool,
    check_coordinates: bool,
}

/// A successfully parsed value, along with the notices collected on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    /// Enumeration tags that were not known to this library, in document order.
    pub unrecognized: Vec<UnrecognizedEnumValue>,
}

/// An enumeration tag not known to this library, kept in an `Unrecognized`
/// variant rather than failing the parse.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UnrecognizedEnumValue {
    pub path: Path,
    pub value: String,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            reject_unrecognized_enums: false,
            check_coordinates: true,
        }
    }

    /// Set whether to fail with `SchemaError::UnknownEnumValue` on an
    /// enumeration tag not known to this library.
    /// The default is `false`.
    pub fn reject_unrecognized_enums(&mut self, reject: bool) -> &mut Self {
        self.reject_unrecognized_enums = reject;
        self
    }

    /// Set whether to check that latitudes and longitudes are within range.
    /// The default is `true`.
    pub fn check_coordinates(&mut self, check: bool) -> &mut Self {
        self.check_coordinates = check;
        self
    }

    /// Parses a `Place` object.
    pub fn place(&self, value: &JsonValue) -> Result<Parsed<Place>, SchemaError> {
        trace!("parsing Place");
        self.parse(value)
    }

    /// Parses the response of a Place Details request.
    pub fn place_details_response(&self, value: &JsonValue) -> Result<Parsed<PlaceDetailsResponse>, SchemaError> {
        trace!("parsing PlaceDetailsResponse");
        self.parse(value)
    }

    /// Parses the response of a Text Search or Nearby Search request.
    pub fn search_places_response(&self, value: &JsonValue) -> Result<Parsed<SearchPlacesResponse>, SchemaError> {
        trace!("parsing SearchPlacesResponse");
        self.parse(value)
    }

    /// Parses a place in the earlier schema. See the `legacy` module.
    pub fn legacy_place(&self, value: &JsonValue) -> Result<Parsed<legacy::Place>, SchemaError> {
        trace!("parsing legacy Place");
        self.parse(value)
    }

    pub fn legacy_place_details_response(
        &self,
        value: &JsonValue,
    ) -> Result<Parsed<legacy::PlaceDetailsResponse>, SchemaError> {
        trace!("parsing legacy PlaceDetailsResponse");
        self.parse(value)
    }

    pub fn legacy_search_places_response(
        &self,
        value: &JsonValue,
    ) -> Result<Parsed<legacy::SearchPlacesResponse>, SchemaError> {
        trace!("parsing legacy SearchPlacesResponse");
        self.parse(value)
    }

    pub(crate) fn parse<T: FromJson>(&self, value: &JsonValue) -> Result<Parsed<T>, SchemaError> {
        let mut cx = Cursor::new(*self);
        let value = T::from_json(value, &mut cx)?;
        Ok(Parsed {
            value,
            unrecognized: cx.into_unrecognized(),
        })
    }

    pub(crate) fn rejects_unrecognized_enums(&self) -> bool {
        self.reject_unrecognized_enums
    }

    pub(crate) fn checks_coordinates(&self) -> bool {
        self.check_coordinates
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

impl<T> Parsed<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}
