//! Payment, parking and accessibility options

schema_struct! {
    /// Payment options a place accepts. An option without data is absent.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PaymentOptions {
        pub accepts_credit_cards: Option<bool> => "acceptsCreditCards",
        pub accepts_debit_cards: Option<bool> => "acceptsDebitCards",
        /// The place may still accept other payment methods.
        pub accepts_cash_only: Option<bool> => "acceptsCashOnly",
        pub accepts_nfc: Option<bool> => "acceptsNfc",
    }
}

schema_struct! {
    /// Parking options of a place. A place may offer several at once.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ParkingOptions {
        pub free_parking_lot: Option<bool> => "freeParkingLot",
        pub paid_parking_lot: Option<bool> => "paidParkingLot",
        pub free_street_parking: Option<bool> => "freeStreetParking",
        pub paid_street_parking: Option<bool> => "paidStreetParking",
        pub valet_parking: Option<bool> => "valetParking",
        pub free_garage_parking: Option<bool> => "freeGarageParking",
        pub paid_garage_parking: Option<bool> => "paidGarageParking",
    }
}

schema_struct! {
    /// Accessibility options a place offers.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AccessibilityOptions {
        pub wheelchair_accessible_parking: Option<bool> => "wheelchairAccessibleParking",
        pub wheelchair_accessible_entrance: Option<bool> => "wheelchairAccessibleEntrance",
        pub wheelchair_accessible_restroom: Option<bool> => "wheelchairAccessibleRestroom",
        pub wheelchair_accessible_seating: Option<bool> => "wheelchairAccessibleSeating",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::de::{Cursor, FromJson};
    use crate::parser::Parser;

    #[test]
    fn absent_is_not_false() {
        let json = json!({ "acceptsCreditCards": true, "acceptsCashOnly": false });
        let p = PaymentOptions::from_json(&json, &mut Cursor::new(Parser::new())).unwrap();
        assert_eq!(
            p,
            PaymentOptions {
                accepts_credit_cards: Some(true),
                accepts_cash_only: Some(false),
                ..PaymentOptions::default()
            }
        );
    }

    #[test]
    fn wrong_type() {
        let json = json!({ "valetParking": "yes" });
        let e = ParkingOptions::from_json(&json, &mut Cursor::new(Parser::new())).unwrap_err();
        assert_eq!(e.path().to_string(), "valetParking");
    }
}
