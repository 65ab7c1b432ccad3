//! Price level and range

use crate::types::Money;

string_enums! {
    /// Price level of a place.
    #[derive(Clone, Debug)]
    pub enum PriceLevel {
        /// Place price level is unspecified or unknown.
        Unspecified = "PRICE_LEVEL_UNSPECIFIED",
        /// Place provides free services.
        Free = "PRICE_LEVEL_FREE",
        Inexpensive = "PRICE_LEVEL_INEXPENSIVE",
        Moderate = "PRICE_LEVEL_MODERATE",
        Expensive = "PRICE_LEVEL_EXPENSIVE",
        VeryExpensive = "PRICE_LEVEL_VERY_EXPENSIVE";
        /// A price level not known to this library.
        Unrecognized(_),
    }
}

schema_struct! {
    /// The price range associated with a place.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct PriceRange {
        /// The low end of the range (inclusive).
        pub start_price: Option<Money> => "startPrice",
        /// The high end of the range (exclusive). Absent for an open range.
        pub end_price: Option<Money> => "endPrice",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::de::{Cursor, FromJson};
    use crate::parser::Parser;

    #[test]
    fn price_range() {
        let json = json!({
            "startPrice": { "currencyCode": "USD", "units": "20" },
            "endPrice": { "currencyCode": "USD", "units": "30", "nanos": 500000000 }
        });

        let range = PriceRange::from_json(&json, &mut Cursor::new(Parser::new())).unwrap();
        let start = range.start_price.unwrap();
        assert_eq!(start.units.as_deref(), Some("20"));
        assert_eq!(start.nanos, None);
        assert_eq!(range.end_price.unwrap().nanos, Some(500_000_000));
    }

    #[test]
    fn units_must_be_a_string() {
        let json = json!({ "startPrice": { "units": 20 } });
        let e = PriceRange::from_json(&json, &mut Cursor::new(Parser::new())).unwrap_err();
        assert_eq!(e.path().to_string(), "startPrice.units");
    }

    #[test]
    fn price_level() {
        assert_eq!(PriceLevel::from("PRICE_LEVEL_MODERATE"), PriceLevel::Moderate);
        assert_eq!(PriceLevel::Moderate.as_ref(), "PRICE_LEVEL_MODERATE");
        assert!(PriceLevel::from("PRICE_LEVEL_PRICELESS").is_unrecognized());
    }
}
