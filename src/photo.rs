//! Photos and attributions

schema_struct! {
    /// The author of user-generated content. Used in `Photo` and `Review`.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct AuthorAttribution {
        pub display_name: Option<String> => "displayName",
        pub uri: Option<String> => "uri",
        /// Profile photo URI of the author.
        pub photo_uri: Option<String> => "photoUri",
    }
}

schema_struct! {
    /// Information about a photo of a place.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Photo {
        /// Resource name, in `places/{placeId}/photos/{photo}` format.
        pub name: Option<String> => "name",
        /// The maximum available width, in pixels.
        pub width_px: Option<u32> => "widthPx",
        /// The maximum available height, in pixels.
        pub height_px: Option<u32> => "heightPx",
        pub author_attributions: Option<Vec<AuthorAttribution>> => "authorAttributions",
        /// A link where users can flag a problem with the photo.
        pub flag_content_uri: Option<String> => "flagContentUri",
        pub google_maps_uri: Option<String> => "googleMapsUri",
    }
}

schema_struct! {
    /// A data provider of a place, which must be shown with the result.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Attribution {
        pub provider: Option<String> => "provider",
        pub provider_uri: Option<String> => "providerUri",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::de::{Cursor, FromJson};
    use crate::error::{JsonKind, SchemaError};
    use crate::parser::Parser;

    #[test]
    fn photo() {
        let json = json!({
            "name": "places/ChIJ/photos/AUc7",
            "widthPx": 4032,
            "heightPx": 3024,
            "authorAttributions": [{
                "displayName": "A Reviewer",
                "uri": "https://maps.google.com/maps/contrib/1",
                "photoUri": "https://lh3.googleusercontent.com/a/1"
            }]
        });

        let photo = Photo::from_json(&json, &mut Cursor::new(Parser::new())).unwrap();
        assert_eq!(photo.width_px, Some(4032));
        assert_eq!(photo.height_px, Some(3024));
        assert_eq!(
            photo.author_attributions.unwrap()[0].display_name.as_deref(),
            Some("A Reviewer")
        );
        assert_eq!(photo.flag_content_uri, None);
    }

    #[test]
    fn negative_size() {
        let json = json!({ "widthPx": -1 });
        match Photo::from_json(&json, &mut Cursor::new(Parser::new())).unwrap_err() {
            SchemaError::InvalidValue { path, .. } => assert_eq!(path.to_string(), "widthPx"),
            e => panic!("unexpected error: {:?}", e),
        }

        let json = json!({ "heightPx": 1.5 });
        match Photo::from_json(&json, &mut Cursor::new(Parser::new())).unwrap_err() {
            SchemaError::WrongType { path, expected, .. } => {
                assert_eq!(path.to_string(), "heightPx");
                assert_eq!(expected, JsonKind::Integer);
            }
            e => panic!("unexpected error: {:?}", e),
        }
    }
}
