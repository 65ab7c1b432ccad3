//! Response envelopes

use crate::error::SchemaError;
use crate::parser::Parser;
use crate::place::Place;
use crate::types::JsonValue;

opaque_strings! {
    /// A continuation token for the next page of search results.
    ///
    /// The token is opaque: it is carried exactly as received and only
    /// checked to be a non-empty string.
    pub struct PageToken;
}

schema_struct! {
    /// Response of a Place Details request.
    #[derive(Clone, Debug, PartialEq)]
    pub struct PlaceDetailsResponse {
        pub place: Place => "place",
    }
}

schema_struct! {
    /// Response of a Text Search or Nearby Search request.
    #[derive(Clone, Debug, PartialEq)]
    pub struct SearchPlacesResponse {
        /// Places found, in the order the API returned them.
        pub places: Vec<Place> => "places",
        /// Present if there are more results.
        pub next_page_token: Option<PageToken> => "nextPageToken",
    }
}

impl PlaceDetailsResponse {
    /// Parses a Place Details response with the default `Parser`.
    pub fn from_value(value: &JsonValue) -> Result<Self, SchemaError> {
        Parser::new().place_details_response(value).map(|p| p.value)
    }
}

impl SearchPlacesResponse {
    /// Parses a search response with the default `Parser`.
    pub fn from_value(value: &JsonValue) -> Result<Self, SchemaError> {
        Parser::new().search_places_response(value).map(|p| p.value)
    }
}

deserialize_from_json!(PlaceDetailsResponse, SearchPlacesResponse);
