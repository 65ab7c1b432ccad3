//! Opening hours

use crate::types::{Date, Timestamp};

string_enums! {
    /// Type of secondary opening hours.
    #[derive(Clone, Debug)]
    pub enum SecondaryHoursType {
        Unspecified = "SECONDARY_HOURS_TYPE_UNSPECIFIED",
        DriveThrough = "DRIVE_THROUGH",
        HappyHour = "HAPPY_HOUR",
        Delivery = "DELIVERY",
        Takeout = "TAKEOUT",
        Kitchen = "KITCHEN",
        Breakfast = "BREAKFAST",
        Lunch = "LUNCH",
        Dinner = "DINNER",
        Brunch = "BRUNCH",
        Pickup = "PICKUP",
        Access = "ACCESS",
        SeniorHours = "SENIOR_HOURS",
        OnlineServiceHours = "ONLINE_SERVICE_HOURS";
        /// A type not known to this library.
        Unrecognized(_),
    }
}

schema_struct! {
    /// A point in the week at which a place changes its open status.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Point {
        /// Date in the local timezone for the place.
        pub date: Option<Date> => "date",
        /// Whether this endpoint was truncated to the window the API returns
        /// hours for (at most 24 * 7 hours from midnight of the request day).
        pub truncated: Option<bool> => "truncated",
        /// Day of the week, 0 (Sunday) to 6.
        pub day: Option<i32> => "day",
        /// Hour in 24 hour format, 0 to 23.
        pub hour: Option<i32> => "hour",
        /// 0 to 59.
        pub minute: Option<i32> => "minute",
    }
}

schema_struct! {
    /// A period during which a place is open.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Period {
        pub open: Option<Point> => "open",
        /// Absent for a place that is always open.
        pub close: Option<Point> => "close",
    }
}

schema_struct! {
    /// A day within the covered range that may have exceptional hours,
    /// e.g. Christmas day.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct SpecialDay {
        pub date: Option<Date> => "date",
    }
}

schema_struct! {
    /// Business hours of a place.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct OpeningHours {
        /// Open periods in chronological order, starting with Sunday in the
        /// place-local timezone. Present but empty means the place is never
        /// open, e.g. closed temporarily for renovations.
        pub periods: Option<Vec<Period>> => "periods",
        /// One localized string per day of the week, e.g. "Sun: 18:00–06:00".
        pub weekday_descriptions: Option<Vec<String>> => "weekdayDescriptions",
        pub secondary_hours_type: Option<SecondaryHoursType> => "secondaryHoursType",
        pub special_days: Option<Vec<SpecialDay>> => "specialDays",
        /// Next time the current period starts, up to 7 days in the future.
        /// Only set when the period is not active.
        pub next_open_time: Option<Timestamp> => "nextOpenTime",
        /// Next time the current period ends, up to 7 days in the future.
        /// Only set when the period is active.
        pub next_close_time: Option<Timestamp> => "nextCloseTime",
        pub open_now: Option<bool> => "openNow",
    }
}

schema_struct! {
    /// A time zone from the IANA Time Zone Database.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct TimeZone {
        /// For example "America/New_York".
        pub id: Option<String> => "id",
        /// For example "2019a".
        pub version: Option<String> => "version",
    }
}

impl OpeningHours {
    /// Returns `true` if the hours are known and contain no open period.
    pub fn is_never_open(&self) -> bool {
        self.periods.as_ref().map_or(false, Vec::is_empty)
    }
}
