//! EV charging stations

use crate::types::Timestamp;

string_enums! {
    /// EV charging connector types.
    #[derive(Clone, Debug)]
    pub enum EvConnectorType {
        Unspecified = "EV_CONNECTOR_TYPE_UNSPECIFIED",
        /// Other connector types.
        Other = "EV_CONNECTOR_TYPE_OTHER",
        /// J1772 type 1 connector.
        J1772 = "EV_CONNECTOR_TYPE_J1772",
        /// IEC 62196 type 2 connector, often referred to as MENNEKES.
        Type2 = "EV_CONNECTOR_TYPE_TYPE_2",
        /// CHAdeMO type connector.
        Chademo = "EV_CONNECTOR_TYPE_CHADEMO",
        /// Combined Charging System (AC and DC), based on SAE Type-1 J-1772.
        CcsCombo1 = "EV_CONNECTOR_TYPE_CCS_COMBO_1",
        /// Combined Charging System (AC and DC), based on Type-2 Mennekes.
        CcsCombo2 = "EV_CONNECTOR_TYPE_CCS_COMBO_2",
        /// The generic TESLA connector.
        Tesla = "EV_CONNECTOR_TYPE_TESLA",
        /// GB/T type, the standard in China.
        UnspecifiedGbT = "EV_CONNECTOR_TYPE_UNSPECIFIED_GB_T",
        /// Unspecified wall outlet.
        UnspecifiedWallOutlet = "EV_CONNECTOR_TYPE_UNSPECIFIED_WALL_OUTLET",
        /// The North American Charging System (NACS), standardized as SAE J3400.
        Nacs = "EV_CONNECTOR_TYPE_NACS";
        /// A connector type not known to this library.
        Unrecognized(_),
    }
}

schema_struct! {
    /// EV charging information grouped by connector type and max charge rate.
    #[derive(Clone, Debug, PartialEq)]
    pub struct ConnectorAggregation {
        pub connector_type: Option<EvConnectorType> => "type",
        /// The static max charging rate of each connector, in kW.
        pub max_charge_rate_kw: Option<f64> => "maxChargeRateKw",
        pub count: Option<i32> => "count",
        /// When the availability counts were last updated.
        pub availability_last_update_time: Option<Timestamp> => "availabilityLastUpdateTime",
        pub available_count: Option<i32> => "availableCount",
        pub out_of_service_count: Option<i32> => "outOfServiceCount",
    }
}

schema_struct! {
    /// Information about the EV charging station hosted in a place.
    #[derive(Clone, Debug, PartialEq)]
    pub struct EvChargeOptions {
        /// Number of connectors. Some ports have several connectors but
        /// charge one car at a time, so this may exceed the number of cars
        /// that can charge simultaneously.
        pub connector_count: Option<i32> => "connectorCount",
        pub connector_aggregation: Option<Vec<ConnectorAggregation>> => "connectorAggregation",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::de::{Cursor, FromJson};
    use crate::error::SchemaError;
    use crate::parser::Parser;

    #[test]
    fn ev_charge_options() {
        let json = json!({
            "connectorCount": 4,
            "connectorAggregation": [{
                "type": "EV_CONNECTOR_TYPE_CCS_COMBO_2",
                "maxChargeRateKw": 150,
                "count": 4,
                "availableCount": 3,
                "outOfServiceCount": 0,
                "availabilityLastUpdateTime": "2024-05-01T10:15:00Z"
            }]
        });

        let options = EvChargeOptions::from_json(&json, &mut Cursor::new(Parser::new())).unwrap();
        assert_eq!(options.connector_count, Some(4));
        let aggregation = &options.connector_aggregation.as_ref().unwrap()[0];
        assert_eq!(aggregation.connector_type, Some(EvConnectorType::CcsCombo2));
        assert_eq!(aggregation.max_charge_rate_kw, Some(150.0));
        assert_eq!(aggregation.available_count, Some(3));
    }

    #[test]
    fn strict_connector_type() {
        let json = json!({ "connectorAggregation": [{ "type": "EV_CONNECTOR_TYPE_MCS" }] });
        let mut parser = Parser::new();
        parser.reject_unrecognized_enums(true);

        let e = EvChargeOptions::from_json(&json, &mut Cursor::new(parser)).unwrap_err();
        assert_eq!(e.index(), Some(0));
        assert_eq!(
            *e.root_cause(),
            SchemaError::UnknownEnumValue {
                path: e.root_cause().path().clone(),
                value: "EV_CONNECTOR_TYPE_MCS".to_owned(),
            }
        );
        assert_eq!(e.root_cause().path().to_string(), "connectorAggregation[0].type");
    }
}
