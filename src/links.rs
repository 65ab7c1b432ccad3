//! Links and sub destinations

schema_struct! {
    /// Links to trigger different Google Maps actions.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct GoogleMapsLinks {
        /// Directions to the place, with the default travel mode DRIVE.
        pub directions_uri: Option<String> => "directionsUri",
        pub place_uri: Option<String> => "placeUri",
        /// Only works on the web version of Google Maps.
        pub write_a_review_uri: Option<String> => "writeAReviewUri",
        /// Only works on the web version of Google Maps.
        pub reviews_uri: Option<String> => "reviewsUri",
        /// Only works on the web version of Google Maps.
        pub photos_uri: Option<String> => "photosUri",
    }
}

schema_struct! {
    /// A sub destination related to a place.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct SubDestination {
        pub name: Option<String> => "name",
        pub id: Option<String> => "id",
    }
}
