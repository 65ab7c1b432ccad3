//! Common types used across the crate.

pub use serde_json::Map as JsonMap;
pub use serde_json::Value as JsonValue;

use chrono::{DateTime, FixedOffset};

/// An RFC 3339 timestamp, keeping the offset it was written with.
pub type Timestamp = DateTime<FixedOffset>;

schema_struct! {
    /// A whole or partial calendar date.
    ///
    /// A zero `year` means a date without a year; a zero `month` or `day`
    /// means the date is not that precise.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Date {
        /// From 1 to 9999, or 0.
        pub year: Option<i32> => "year",
        /// From 1 to 12, or 0.
        pub month: Option<i32> => "month",
        /// From 1 to 31, or 0.
        pub day: Option<i32> => "day",
    }
}

schema_struct! {
    /// Localized variant of a text in a particular language.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct LocalizedText {
        /// Localized string in the language corresponding to `language_code`.
        pub text: Option<String> => "text",
        /// The text's BCP-47 language code, such as "en-US" or "sr-Latn".
        pub language_code: Option<String> => "languageCode",
    }
}

schema_struct! {
    /// An amount of money with its currency type.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Money {
        /// The three-letter currency code defined in ISO 4217.
        pub currency_code: Option<String> => "currencyCode",
        /// The whole units of the amount. This is an int64 which the API
        /// encodes as a JSON string, and it is kept as such.
        pub units: Option<String> => "units",
        /// Number of nano (10^-9) units of the amount.
        pub nanos: Option<i32> => "nanos",
    }
}
