//! Place

use crate::address::{AddressComponent, AddressDescriptor, ContainingPlace, PlusCode};
use crate::amenity::{AccessibilityOptions, ParkingOptions, PaymentOptions};
use crate::de::{self, Cursor, Field};
use crate::error::SchemaError;
use crate::ev::EvChargeOptions;
use crate::fuel::FuelOptions;
use crate::geometry::{LatLng, Viewport};
use crate::hours::{OpeningHours, TimeZone};
use crate::links::{GoogleMapsLinks, SubDestination};
use crate::parser::Parser;
use crate::photo::{Attribution, Photo};
use crate::price::{PriceLevel, PriceRange};
use crate::review::Review;
use crate::summary::{AreaSummary, GenerativeSummary};
use crate::types::{JsonValue, LocalizedText};

opaque_strings! {
    /// The unique identifier of a place.
    pub struct PlaceId;
}

string_enums! {
    /// Business status of a place.
    #[derive(Clone, Debug)]
    pub enum BusinessStatus {
        /// Default value. This value is unused.
        Unspecified = "BUSINESS_STATUS_UNSPECIFIED",
        /// The establishment is operational, not necessarily open now.
        Operational = "OPERATIONAL",
        ClosedTemporarily = "CLOSED_TEMPORARILY",
        ClosedPermanently = "CLOSED_PERMANENTLY";
        /// A status not known to this library.
        Unrecognized(_),
    }
}

schema_struct! {
    /// A point of interest returned by the Places API.
    ///
    /// Only `id` is required. Every other field is `None` when the response
    /// does not carry it, which is usually because the request's field mask
    /// did not ask for it.
    ///
    /// # Reference
    ///
    /// 1. [REST Resource: places | Google Maps Platform][1]
    ///
    /// [1]: https://developers.google.com/maps/documentation/places/web-service/reference/rest/v1/places
    #[derive(Clone, Debug, PartialEq)]
    pub struct Place {
        /// Resource name, in `places/{placeId}` format.
        pub name: Option<String> => "name",
        pub id: PlaceId => "id",
        /// The localized name of the place, e.g. "Google Sydney".
        pub display_name: Option<LocalizedText> => "displayName",
        /// Type tags, e.g. "political" and "locality".
        pub types: Option<Vec<String>> => "types",
        /// The primary type, e.g. "restaurant", "cafe" or "airport".
        pub primary_type: Option<String> => "primaryType",
        pub primary_type_display_name: Option<LocalizedText> => "primaryTypeDisplayName",
        pub national_phone_number: Option<String> => "nationalPhoneNumber",
        pub international_phone_number: Option<String> => "internationalPhoneNumber",
        pub formatted_address: Option<String> => "formattedAddress",
        pub short_formatted_address: Option<String> => "shortFormattedAddress",
        pub address_components: Option<Vec<AddressComponent>> => "addressComponents",
        pub plus_code: Option<PlusCode> => "plusCode",
        pub location: Option<LatLng> => "location",
        /// A viewport suitable for displaying the place on a map. Not the
        /// physical boundary or service area of the business.
        pub viewport: Option<Viewport> => "viewport",
        /// Between 1.0 and 5.0, based on user reviews. Not checked.
        pub rating: Option<f64> => "rating",
        pub google_maps_uri: Option<String> => "googleMapsUri",
        /// The authoritative website, e.g. a business' homepage.
        pub website_uri: Option<String> => "websiteUri",
        /// At most 5 reviews, sorted by relevance.
        pub reviews: Option<Vec<Review>> => "reviews",
        /// If the place is always open, no period has a `close` point.
        pub regular_opening_hours: Option<OpeningHours> => "regularOpeningHours",
        /// At most 10 photos.
        pub photos: Option<Vec<Photo>> => "photos",
        /// The address in [adr microformat](http://microformats.org/wiki/adr).
        pub adr_format_address: Option<String> => "adrFormatAddress",
        pub business_status: Option<BusinessStatus> => "businessStatus",
        pub price_level: Option<PriceLevel> => "priceLevel",
        /// Data providers that must be shown with this result.
        pub attributions: Option<Vec<Attribution>> => "attributions",
        /// A truncated URL to an icon mask. Append a type suffix such as
        /// ".svg" or ".png" to get an icon.
        pub icon_mask_base_uri: Option<String> => "iconMaskBaseUri",
        /// Background color for the icon mask in hex format, e.g. #909CE1.
        pub icon_background_color: Option<String> => "iconBackgroundColor",
        /// The hours of operation for the next seven days, including today.
        pub current_opening_hours: Option<OpeningHours> => "currentOpeningHours",
        pub current_secondary_opening_hours: Option<Vec<OpeningHours>> => "currentSecondaryOpeningHours",
        pub regular_secondary_opening_hours: Option<Vec<OpeningHours>> => "regularSecondaryOpeningHours",
        pub editorial_summary: Option<LocalizedText> => "editorialSummary",
        pub payment_options: Option<PaymentOptions> => "paymentOptions",
        pub parking_options: Option<ParkingOptions> => "parkingOptions",
        pub sub_destinations: Option<Vec<SubDestination>> => "subDestinations",
        pub fuel_options: Option<FuelOptions> => "fuelOptions",
        pub ev_charge_options: Option<EvChargeOptions> => "evChargeOptions",
        pub generative_summary: Option<GenerativeSummary> => "generativeSummary",
        pub area_summary: Option<AreaSummary> => "areaSummary",
        pub containing_places: Option<Vec<ContainingPlace>> => "containingPlaces",
        pub address_descriptor: Option<AddressDescriptor> => "addressDescriptor",
        pub google_maps_links: Option<GoogleMapsLinks> => "googleMapsLinks",
        pub price_range: Option<PriceRange> => "priceRange",
        /// Minutes the place's timezone is currently offset from UTC.
        pub utc_offset_minutes: Option<i32> => "utcOffsetMinutes",
        pub time_zone: Option<TimeZone> => "timeZone",
        /// Total number of reviews, with or without text.
        pub user_rating_count: Option<i32> => "userRatingCount",
        pub takeout: Option<bool> => "takeout",
        pub delivery: Option<bool> => "delivery",
        /// Indoor or outdoor seating.
        pub dine_in: Option<bool> => "dineIn",
        pub curbside_pickup: Option<bool> => "curbsidePickup",
        pub reservable: Option<bool> => "reservable",
        pub serves_breakfast: Option<bool> => "servesBreakfast",
        pub serves_lunch: Option<bool> => "servesLunch",
        pub serves_dinner: Option<bool> => "servesDinner",
        pub serves_beer: Option<bool> => "servesBeer",
        pub serves_wine: Option<bool> => "servesWine",
        pub serves_brunch: Option<bool> => "servesBrunch",
        pub serves_vegetarian_food: Option<bool> => "servesVegetarianFood",
        pub outdoor_seating: Option<bool> => "outdoorSeating",
        pub live_music: Option<bool> => "liveMusic",
        pub menu_for_children: Option<bool> => "menuForChildren",
        pub serves_cocktails: Option<bool> => "servesCocktails",
        pub serves_dessert: Option<bool> => "servesDessert",
        pub serves_coffee: Option<bool> => "servesCoffee",
        pub good_for_children: Option<bool> => "goodForChildren",
        pub allows_dogs: Option<bool> => "allowsDogs",
        pub restroom: Option<bool> => "restroom",
        pub good_for_groups: Option<bool> => "goodForGroups",
        pub good_for_watching_sports: Option<bool> => "goodForWatchingSports",
        pub accessibility_options: Option<AccessibilityOptions> => "accessibilityOptions",
        /// Whether the place is a pure service area business, i.e. one that
        /// visits or delivers to customers but does not serve them at its address.
        pub pure_service_area_business: Option<bool> => "pureServiceAreaBusiness",
    }
}

impl Place {
    /// Parses a `Place` object with the default `Parser`.
    ///
    /// ```rust
    /// use google_places_schema::Place;
    /// use serde_json::json;
    ///
    /// let place = Place::from_value(&json!({ "id": "ChIJj61dQgK6j4AR4GeTYWZsKWw" })).unwrap();
    /// assert_eq!(place.id, "ChIJj61dQgK6j4AR4GeTYWZsKWw");
    /// assert_eq!(place.rating, None);
    /// ```
    pub fn from_value(value: &JsonValue) -> Result<Self, SchemaError> {
        Parser::new().place(value).map(|p| p.value)
    }
}

impl Field for Place {
    fn from_field(value: Option<&JsonValue>, cx: &mut Cursor) -> Result<Self, SchemaError> {
        de::required(value, cx)
    }
}

deserialize_from_json!(Place);
