//! Reviews

use crate::photo::AuthorAttribution;
use crate::types::{LocalizedText, Timestamp};

schema_struct! {
    /// A review of a place.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Review {
        /// Resource name, in `places/{placeId}/reviews/{review}` format.
        pub name: Option<String> => "name",
        /// Review time relative to the current time, formatted for the
        /// requested language and country, e.g. "a month ago".
        pub relative_publish_time_description: Option<String> => "relativePublishTimeDescription",
        pub text: Option<LocalizedText> => "text",
        /// The review text in its original language.
        pub original_text: Option<LocalizedText> => "originalText",
        /// Number of stars, between 1.0 and 5.0. Not checked.
        pub rating: Option<f64> => "rating",
        pub author_attribution: Option<AuthorAttribution> => "authorAttribution",
        pub publish_time: Option<Timestamp> => "publishTime",
        pub flag_content_uri: Option<String> => "flagContentUri",
        pub google_maps_uri: Option<String> => "googleMapsUri",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::de::{Cursor, FromJson};
    use crate::parser::Parser;

    #[test]
    fn review() {
        let json = json!({
            "name": "places/ChIJ/reviews/ChZD",
            "relativePublishTimeDescription": "a month ago",
            "rating": 5,
            "text": { "text": "Great coffee.", "languageCode": "en" },
            "originalText": { "text": "Great coffee.", "languageCode": "en" },
            "authorAttribution": { "displayName": "Someone" },
            "publishTime": "2024-04-02T11:58:49.349087Z"
        });

        let review = Review::from_json(&json, &mut Cursor::new(Parser::new())).unwrap();
        assert_eq!(review.rating, Some(5.0));
        assert_eq!(review.text.unwrap().text.as_deref(), Some("Great coffee."));
        assert_eq!(review.publish_time.unwrap().timestamp(), 1_712_059_129);
    }

    #[test]
    fn bad_publish_time() {
        let json = json!({ "publishTime": "2 April 2024" });
        let e = Review::from_json(&json, &mut Cursor::new(Parser::new())).unwrap_err();
        assert_eq!(e.path().to_string(), "publishTime");
    }
}
