//! Geographic positions

use serde::Serialize;

use crate::de::{Cursor, Field, FromJson};
use crate::error::SchemaError;
use crate::types::JsonValue;

/// A latitude/longitude pair in degrees (WGS84).
///
/// Unless `Parser::check_coordinates` is turned off, the parser rejects a
/// latitude outside `[-90, 90]` or a longitude outside `[-180, 180]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLng {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

schema_struct! {
    /// A latitude-longitude viewport, represented as two diagonally opposite
    /// low and high points.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Viewport {
        pub low: Option<LatLng> => "low",
        pub high: Option<LatLng> => "high",
    }
}

impl FromJson for LatLng {
    fn from_json(value: &JsonValue, cx: &mut Cursor) -> Result<Self, SchemaError> {
        let object = cx.object(value)?;

        let mut coordinate = |key: &'static str, bound: f64| {
            cx.field(key, |cx| {
                let v: Option<f64> = Field::from_field(object.get(key), cx)?;
                match v {
                    Some(v) if cx.parser().checks_coordinates() && !(-bound..=bound).contains(&v) => {
                        Err(cx.invalid(format!("{} is outside [-{}, {}]", v, bound, bound)))
                    }
                    _ => Ok(v),
                }
            })
        };

        Ok(LatLng {
            latitude: coordinate("latitude", 90.0)?,
            longitude: coordinate("longitude", 180.0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::parser::Parser;

    fn parse<T: FromJson>(parser: Parser, value: JsonValue) -> Result<T, SchemaError> {
        T::from_json(&value, &mut Cursor::new(parser))
    }

    #[test]
    fn lat_lng() {
        let p: LatLng = parse(
            Parser::new(),
            json!({ "latitude": -33.866489, "longitude": 151.1958561 }),
        )
        .unwrap();
        assert_eq!(
            p,
            LatLng {
                latitude: Some(-33.866489),
                longitude: Some(151.1958561),
            }
        );

        let p: LatLng = parse(Parser::new(), json!({ "latitude": 90, "longitude": -180 })).unwrap();
        assert_eq!(p.latitude, Some(90.0));
        assert_eq!(p.longitude, Some(-180.0));
    }

    #[test]
    fn out_of_range() {
        let e = parse::<LatLng>(Parser::new(), json!({ "latitude": 91.0, "longitude": 0 })).unwrap_err();
        match e {
            SchemaError::InvalidValue { ref path, .. } => assert_eq!(path.to_string(), "latitude"),
            e => panic!("unexpected error: {:?}", e),
        }

        let e = parse::<Viewport>(
            Parser::new(),
            json!({ "low": { "latitude": 0, "longitude": 0 }, "high": { "latitude": 0, "longitude": 180.5 } }),
        )
        .unwrap_err();
        assert_eq!(e.path().to_string(), "high.longitude");

        let mut parser = Parser::new();
        parser.check_coordinates(false);
        let p: LatLng = parse(parser, json!({ "latitude": 91.0 })).unwrap();
        assert_eq!(p.latitude, Some(91.0));
        assert_eq!(p.longitude, None);
    }
}
