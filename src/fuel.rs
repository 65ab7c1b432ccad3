//! Fuel prices of gas stations

use crate::types::{Money, Timestamp};

string_enums! {
    /// Types of fuel.
    #[derive(Clone, Debug)]
    pub enum FuelType {
        Unspecified = "FUEL_TYPE_UNSPECIFIED",
        Diesel = "DIESEL",
        DieselPlus = "DIESEL_PLUS",
        RegularUnleaded = "REGULAR_UNLEADED",
        Midgrade = "MIDGRADE",
        Premium = "PREMIUM",
        Sp91 = "SP91",
        Sp91E10 = "SP91_E10",
        Sp92 = "SP92",
        Sp95 = "SP95",
        Sp95E10 = "SP95_E10",
        Sp98 = "SP98",
        Sp99 = "SP99",
        Sp100 = "SP100",
        /// Liquefied Petroleum Gas.
        Lpg = "LPG",
        E80 = "E80",
        E85 = "E85",
        E100 = "E100",
        Methane = "METHANE",
        BioDiesel = "BIO_DIESEL",
        TruckDiesel = "TRUCK_DIESEL";
        /// A fuel type not known to this library.
        Unrecognized(_),
    }
}

schema_struct! {
    /// The last known price of one type of fuel.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct FuelPrice {
        pub fuel_type: Option<FuelType> => "type",
        pub price: Option<Money> => "price",
        /// The time the price was last updated.
        pub update_time: Option<Timestamp> => "updateTime",
    }
}

schema_struct! {
    /// The most recent information about fuel options in a gas station.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct FuelOptions {
        /// One entry per fuel type the station has. Order is not significant.
        pub fuel_prices: Option<Vec<FuelPrice>> => "fuelPrices",
    }
}
