//! The earlier, flatter shape of a place
//!
//! Older integrations of the Places API describe a place with a list of
//! rating sources, short price level tags, special opening hours and a few
//! flags the current schema no longer carries. This module reads documents
//! in that shape. Records shared with the current schema are reused from the
//! other modules.
//!
//! ```rust
//! use google_places_schema::legacy::PriceLevel;
//! use google_places_schema::Parser;
//! use serde_json::json;
//!
//! let json = json!({
//!     "id": "ChIJ",
//!     "rating": [{ "rating": 4.5, "userRatingCount": 10 }],
//!     "priceLevel": "INEXPENSIVE",
//!     "permanentlyClosed": false
//! });
//!
//! let place = Parser::new().legacy_place(&json).unwrap().value;
//! assert_eq!(place.rating.unwrap()[0].user_rating_count, Some(10));
//! assert_eq!(place.price_level, Some(PriceLevel::Inexpensive));
//! ```

use crate::address::{AddressComponent, PlusCode};
use crate::de::{self, Cursor, Field};
use crate::error::SchemaError;
use crate::geometry::{LatLng, Viewport};
use crate::hours::OpeningHours;
use crate::parser::Parser;
use crate::photo::AuthorAttribution;
use crate::place::{BusinessStatus, PlaceId};
use crate::response::PageToken;
use crate::types::{Date, JsonValue, LocalizedText};

string_enums! {
    /// Price level, in the short tags of the earlier schema.
    #[derive(Clone, Debug)]
    pub enum PriceLevel {
        Unspecified = "PRICE_LEVEL_UNSPECIFIED",
        Free = "FREE",
        Inexpensive = "INEXPENSIVE",
        Moderate = "MODERATE",
        Expensive = "EXPENSIVE",
        VeryExpensive = "VERY_EXPENSIVE";
        /// A level not known to this library.
        Unrecognized(_),
    }
}

schema_struct! {
    /// One rating source of a place.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Rating {
        /// Between 1.0 and 5.0. Not checked.
        pub rating: Option<f64> => "rating",
        pub user_rating_count: Option<u32> => "userRatingCount",
    }
}

schema_struct! {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Photo {
        /// Photo reference.
        pub id: Option<String> => "id",
        pub width: Option<u32> => "width",
        pub height: Option<u32> => "height",
        pub author_attribution: Option<AuthorAttribution> => "authorAttribution",
    }
}

schema_struct! {
    /// Hours on a holiday or other special date.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct SpecialOpeningHours {
        pub date: Option<Date> => "date",
        pub special_hours_text: Option<String> => "specialHoursText",
        pub is_closed: Option<bool> => "isClosed",
    }
}

schema_struct! {
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct RelatedPlaces {
        /// A larger place this one is part of, e.g. the mall of a store.
        pub larger_place: Option<String> => "largerPlace",
    }
}

schema_struct! {
    /// A place in the earlier schema.
    ///
    /// As with `crate::Place`, only `id` is required.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Place {
        pub id: PlaceId => "id",
        pub display_name: Option<LocalizedText> => "displayName",
        pub primary_type: Option<String> => "primaryType",
        pub types: Option<Vec<String>> => "types",
        pub rating: Option<Vec<Rating>> => "rating",
        pub photos: Option<Vec<Photo>> => "photos",
        pub icon_mask_base_uri: Option<String> => "iconMaskBaseUri",
        pub national_phone_number: Option<String> => "nationalPhoneNumber",
        pub international_phone_number: Option<String> => "internationalPhoneNumber",
        pub regular_opening_hours: Option<OpeningHours> => "regularOpeningHours",
        pub address_components: Option<Vec<AddressComponent>> => "addressComponents",
        pub formatted_address: Option<String> => "formattedAddress",
        pub plus_code: Option<PlusCode> => "plusCode",
        pub location: Option<LatLng> => "location",
        pub viewport: Option<Viewport> => "viewport",
        pub business_status: Option<BusinessStatus> => "businessStatus",
        pub google_maps_uri: Option<String> => "googleMapsUri",
        pub editorial_summary: Option<LocalizedText> => "editorialSummary",
        pub adr_format_address: Option<String> => "adrFormatAddress",
        pub price_level: Option<PriceLevel> => "priceLevel",
        pub permanently_closed: Option<bool> => "permanentlyClosed",
        pub utc_offset_minutes: Option<i32> => "utcOffsetMinutes",
        pub website_uri: Option<String> => "websiteUri",
        pub current_opening_hours: Option<OpeningHours> => "currentOpeningHours",
        pub current_secondary_opening_hours: Option<Vec<OpeningHours>> => "currentSecondaryOpeningHours",
        pub reservable: Option<bool> => "reservable",
        /// For example "RESY" or "OPENTABLE".
        pub reservation_provider: Option<String> => "reservationProvider",
        pub serves_food: Option<bool> => "servesFood",
        pub serves_beer: Option<bool> => "servesBeer",
        pub serves_breakfast: Option<bool> => "servesBreakfast",
        pub serves_brunch: Option<bool> => "servesBrunch",
        pub serves_dinner: Option<bool> => "servesDinner",
        pub serves_lunch: Option<bool> => "servesLunch",
        pub serves_vegetarian_food: Option<bool> => "servesVegetarianFood",
        pub serves_wine: Option<bool> => "servesWine",
        pub takeout: Option<bool> => "takeout",
        pub dine_in: Option<bool> => "dineIn",
        pub curbside_pickup: Option<bool> => "curbsidePickup",
        pub delivery: Option<bool> => "delivery",
        pub special_opening_hours: Option<Vec<SpecialOpeningHours>> => "specialOpeningHours",
        pub secondary_opening_hours: Option<Vec<OpeningHours>> => "secondaryOpeningHours",
        pub related_places: Option<RelatedPlaces> => "relatedPlaces",
    }
}

schema_struct! {
    #[derive(Clone, Debug, PartialEq)]
    pub struct PlaceDetailsResponse {
        pub place: Place => "place",
    }
}

schema_struct! {
    #[derive(Clone, Debug, PartialEq)]
    pub struct SearchPlacesResponse {
        pub places: Vec<Place> => "places",
        pub next_page_token: Option<PageToken> => "nextPageToken",
    }
}

impl Place {
    /// Parses a place in the earlier schema with the default `Parser`.
    pub fn from_value(value: &JsonValue) -> Result<Self, SchemaError> {
        Parser::new().legacy_place(value).map(|p| p.value)
    }
}

impl PlaceDetailsResponse {
    pub fn from_value(value: &JsonValue) -> Result<Self, SchemaError> {
        Parser::new().legacy_place_details_response(value).map(|p| p.value)
    }
}

impl SearchPlacesResponse {
    pub fn from_value(value: &JsonValue) -> Result<Self, SchemaError> {
        Parser::new().legacy_search_places_response(value).map(|p| p.value)
    }
}

impl Field for Place {
    fn from_field(value: Option<&JsonValue>, cx: &mut Cursor) -> Result<Self, SchemaError> {
        de::required(value, cx)
    }
}

deserialize_from_json!(Place, PlaceDetailsResponse, SearchPlacesResponse);
