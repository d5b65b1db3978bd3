// File: src/date_utils.rs
use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// French month name shown on cards and slides.
pub fn month_name(date: &DateTime<Utc>) -> &'static str {
    MONTHS[date.month0() as usize]
}
