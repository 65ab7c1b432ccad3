//! Addresses and relational descriptions of a location

use crate::types::LocalizedText;

schema_struct! {
    /// A structured component of the formatted address.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct AddressComponent {
        /// The full text description or name of the address component.
        /// For example, "Australia".
        pub long_text: Option<String> => "longText",
        /// An abbreviated textual name for the address component, if available.
        /// For example, "AU".
        pub short_text: Option<String> => "shortText",
        /// The type(s) of the address component.
        pub types: Option<Vec<String>> => "types",
        /// The language used to format this component, in CLDR notation.
        pub language_code: Option<String> => "languageCode",
    }
}

schema_struct! {
    /// A [plus code](http://plus.codes): a grid-based location reference.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct PlusCode {
        /// Global (full) code, such as "9FWM33GV+HQ", representing an
        /// 1/8000 by 1/8000 degree area (~14 by 14 meters).
        pub global_code: Option<String> => "globalCode",
        /// Compound code, such as "33GV+HQ, Ramberg, Norway", containing the
        /// suffix of the global code and a formatted name of a reference entity.
        pub compound_code: Option<String> => "compoundCode",
    }
}

schema_struct! {
    /// A place in which another place is located.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ContainingPlace {
        /// Resource name, in `places/{placeId}` format.
        pub name: Option<String> => "name",
        pub id: Option<String> => "id",
    }
}

string_enums! {
    /// Spatial relationship between a target location and a landmark.
    #[derive(Clone, Debug)]
    pub enum SpatialRelationship {
        /// The default relationship when nothing more specific applies.
        Near = "NEAR",
        /// The landmark has a spatial geometry and the target is within its bounds.
        Within = "WITHIN",
        /// The target is directly adjacent to the landmark.
        Beside = "BESIDE",
        /// The target is directly opposite the landmark on the other side of the road.
        AcrossTheRoad = "ACROSS_THE_ROAD",
        /// On the same route as the landmark but not besides or across.
        DownTheRoad = "DOWN_THE_ROAD",
        /// Not on the same route as the landmark but a single turn away.
        AroundTheCorner = "AROUND_THE_CORNER",
        /// Close to the landmark's structure but further away from its street entrances.
        Behind = "BEHIND";
        /// A relationship not known to this library.
        Unrecognized(_),
    }

    /// Containment of a target location within an area.
    #[derive(Clone, Debug)]
    pub enum Containment {
        Unspecified = "CONTAINMENT_UNSPECIFIED",
        /// The target location is within the area region, close to the center.
        Within = "WITHIN",
        /// The target location is within the area region, close to the edge.
        Outskirts = "OUTSKIRTS",
        /// The target location is outside the area region, but close by.
        Near = "NEAR";
        /// A containment not known to this library.
        Unrecognized(_),
    }
}

schema_struct! {
    /// A landmark and its relationship with the target location.
    #[derive(Clone, Debug, PartialEq)]
    pub struct Landmark {
        pub name: Option<String> => "name",
        pub place_id: Option<String> => "placeId",
        pub display_name: Option<LocalizedText> => "displayName",
        /// Type tags for this landmark.
        pub types: Option<Vec<String>> => "types",
        pub spatial_relationship: Option<SpatialRelationship> => "spatialRelationship",
        /// Straight line distance between the center points of the target
        /// and the landmark, in meters. Can be longer than
        /// `travel_distance_meters`.
        pub straight_line_distance_meters: Option<f64> => "straightLineDistanceMeters",
        /// Travel distance along the road network, in meters, if known.
        pub travel_distance_meters: Option<f64> => "travelDistanceMeters",
    }
}

schema_struct! {
    /// An area and its relationship with the target location.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Area {
        pub name: Option<String> => "name",
        pub place_id: Option<String> => "placeId",
        pub display_name: Option<LocalizedText> => "displayName",
        pub containment: Option<Containment> => "containment",
    }
}

schema_struct! {
    /// A relational description of a location.
    #[derive(Clone, Debug, PartialEq)]
    pub struct AddressDescriptor {
        /// Nearby landmarks, most recognizable and nearby first.
        pub landmarks: Option<Vec<Landmark>> => "landmarks",
        /// Containing or adjacent areas, most recognizable and precise first.
        pub areas: Option<Vec<Area>> => "areas",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::de::{Cursor, FromJson};
    use crate::parser::Parser;

    #[test]
    fn address_descriptor() {
        let json = json!({
            "landmarks": [{
                "name": "places/ChIJ1",
                "placeId": "ChIJ1",
                "displayName": { "text": "Town Hall", "languageCode": "en" },
                "types": ["city_hall", "point_of_interest"],
                "spatialRelationship": "ACROSS_THE_ROAD",
                "straightLineDistanceMeters": 42.5
            }],
            "areas": [{
                "placeId": "ChIJ2",
                "containment": "OUTSKIRTS"
            }]
        });

        let d = AddressDescriptor::from_json(&json, &mut Cursor::new(Parser::new())).unwrap();
        let landmarks = d.landmarks.unwrap();
        assert_eq!(landmarks[0].spatial_relationship, Some(SpatialRelationship::AcrossTheRoad));
        assert_eq!(landmarks[0].straight_line_distance_meters, Some(42.5));
        assert_eq!(landmarks[0].travel_distance_meters, None);
        assert_eq!(d.areas.unwrap()[0].containment, Some(Containment::Outskirts));
    }

    #[test]
    fn unrecognized_spatial_relationship() {
        let json = json!({ "spatialRelationship": "ON_TOP_OF" });
        let mut cx = Cursor::new(Parser::new());
        let l = Landmark::from_json(&json, &mut cx).unwrap();
        assert_eq!(
            l.spatial_relationship,
            Some(SpatialRelationship::Unrecognized("ON_TOP_OF".to_owned()))
        );

        let notices = cx.into_unrecognized();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].path.to_string(), "spatialRelationship");
        assert_eq!(notices[0].value, "ON_TOP_OF");
    }
}
