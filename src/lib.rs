#![doc(html_root_url = "https://docs.rs/google-places-schema/0.1.0")]

/*!
# Google Places Schema

Typed, validating bindings for responses of the Google Places API (New).

The crate does no networking. Hand it the JSON your HTTP client received and
it gives you back either a typed value or a `SchemaError` naming the exact
path that did not conform.

## Usage

Add `google-places-schema` to your dependencies in your project's `Cargo.toml`:

```toml
[dependencies]
google-places-schema = "0.1.0"
serde_json = "1"
```

## Overview

```rust
use google_places_schema::{BusinessStatus, SchemaError};
use serde_json::json;

let response = json!({
    "places": [
        { "id": "ChIJN1t_tDeuEmsRUsoyG83frY4", "rating": 4.2, "businessStatus": "OPERATIONAL" },
        { "id": "ChIJs5ydyTiuEmsR0fRSlU0C7k0" }
    ],
    "nextPageToken": "abc123"
});

let search = google_places_schema::parse_search_places_response(&response).unwrap();
assert_eq!(search.places[0].business_status, Some(BusinessStatus::Operational));
assert_eq!(search.places[1].rating, None);
assert_eq!(search.next_page_token.unwrap(), "abc123");

let e = google_places_schema::parse_place(&json!({ "id": "ChIJ", "rating": "five" })).unwrap_err();
assert_eq!(e.to_string(), "invalid type at `rating`: expected number, found string");
```

Enumeration tags not known to this library never fail a parse; they are kept
in an `Unrecognized` variant. Use a [`Parser`] to collect or reject them.

Documents in the earlier, flatter shape of a place (a list of rating sources,
short price level tags, special opening hours) are read by the [`legacy`]
module.
*/

#[macro_use]
mod util;

pub mod address;
pub mod amenity;
pub mod error;
pub mod ev;
pub mod fuel;
pub mod geometry;
pub mod hours;
pub mod legacy;
pub mod links;
pub mod parser;
pub mod photo;
pub mod place;
pub mod price;
pub mod response;
pub mod review;
pub mod summary;
pub mod types;

mod de;

pub use crate::error::{Error, JsonKind, Path, Result, SchemaError, Segment};
pub use crate::parser::{Parsed, Parser, UnrecognizedEnumValue};
pub use crate::place::{BusinessStatus, Place, PlaceId};
pub use crate::price::PriceLevel;
pub use crate::response::{PageToken, PlaceDetailsResponse, SearchPlacesResponse};
pub use crate::types::JsonValue;

use static_assertions::assert_impl_all;

assert_impl_all!(Place: Send, Sync);
assert_impl_all!(PlaceDetailsResponse: Send, Sync);
assert_impl_all!(SearchPlacesResponse: Send, Sync);
assert_impl_all!(legacy::Place: Send, Sync);
assert_impl_all!(legacy::SearchPlacesResponse: Send, Sync);
assert_impl_all!(SchemaError: Send, Sync);
assert_impl_all!(Parser: Send, Sync);

/// Parses a `Place` object with the default `Parser`.
pub fn parse_place(value: &JsonValue) -> Result<Place, SchemaError> {
    Place::from_value(value)
}

/// Parses the response of a Place Details request with the default `Parser`.
///
/// Fails with `SchemaError::MissingField` at `place` if the key is absent.
pub fn parse_place_details_response(value: &JsonValue) -> Result<PlaceDetailsResponse, SchemaError> {
    PlaceDetailsResponse::from_value(value)
}

/// Parses the response of a Text Search or Nearby Search request with the
/// default `Parser`.
///
/// The first place that fails to parse fails the whole response with
/// `SchemaError::Element` carrying its index.
pub fn parse_search_places_response(value: &JsonValue) -> Result<SearchPlacesResponse, SchemaError> {
    SearchPlacesResponse::from_value(value)
}

/// Parses a JSON string holding a `Place` object.
pub fn place_from_str(json: &str) -> Result<Place> {
    let value: JsonValue = serde_json::from_str(json)?;
    Ok(parse_place(&value)?)
}

/// Parses a JSON string holding a Place Details response.
pub fn place_details_from_str(json: &str) -> Result<PlaceDetailsResponse> {
    let value: JsonValue = serde_json::from_str(json)?;
    Ok(parse_place_details_response(&value)?)
}

/// Parses a JSON string holding a search response.
pub fn search_places_from_str(json: &str) -> Result<SearchPlacesResponse> {
    let value: JsonValue = serde_json::from_str(json)?;
    Ok(parse_search_places_response(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        let place = place_from_str(r#"{"id":"ChIJ"}"#).unwrap();
        assert_eq!(place.id, "ChIJ");

        match place_from_str(r#"{"id":"#).unwrap_err() {
            Error::Json(_) => {}
            e => panic!("unexpected error: {:?}", e),
        }
        match place_details_from_str(r#"{}"#).unwrap_err() {
            Error::Schema(SchemaError::MissingField { path }) => assert_eq!(path.to_string(), "place"),
            e => panic!("unexpected error: {:?}", e),
        }

        let search = search_places_from_str(include_str!("test_assets/search.json")).unwrap();
        assert_eq!(search.places.len(), 3);
    }
}
