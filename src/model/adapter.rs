// File: ./src/model/adapter.rs
// Handles JSON deserialization of the event document
use crate::model::item::{DataSnapshot, EventRecord};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Parses the date shapes found in event documents into a comparable instant.
/// Offsets are honoured; values without one are taken as UTC. A day past the
/// end of its month (`2022-02-29`) rolls over into the next month.
pub fn parse_event_date(val: &str) -> Option<DateTime<Utc>> {
    let val = val.trim();
    parse_strict(val).or_else(|| parse_strict(&roll_over_day(val)?))
}

fn parse_strict(val: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(val) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(val, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(val, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
}

/// Rewrites a `YYYY-MM-DD` prefix whose day (up to 31) overflows its month.
fn roll_over_day(val: &str) -> Option<String> {
    let (prefix, rest) = (val.get(..10)?, val.get(10..)?);
    let mut parts = prefix.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }

    let rolled = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(chrono::Days::new(u64::from(day - 1)))?;
    Some(format!("{}{}", rolled.format("%Y-%m-%d"), rest))
}

pub mod flexible_date {
    use super::parse_event_date;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        parse_event_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unparseable date: {}", raw)))
    }
}

/// Ids show up as numbers in some documents and strings in others.
pub fn id_from_any<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(i64),
        Float(f64),
        Text(String),
    }

    Ok(match RawId::deserialize(d)? {
        RawId::Num(n) => n.to_string(),
        RawId::Float(f) if f.fract() == 0.0 => format!("{}", f as i64),
        RawId::Float(f) => f.to_string(),
        RawId::Text(s) => s,
    })
}

/// Reads a record list one entry at a time. A malformed entry is logged and
/// skipped so the rest of the collection still loads.
pub fn lenient_records<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Vec<EventRecord>>, D::Error> {
    let Some(raw) = Option::<Vec<serde_json::Value>>::deserialize(d)? else {
        return Ok(None);
    };

    let records = raw
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value::<EventRecord>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping malformed record #{}: {}", idx, e);
                None
            }
        })
        .collect();
    Ok(Some(records))
}

impl DataSnapshot {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let mut snapshot: DataSnapshot =
            serde_json::from_str(raw).context("Invalid event document")?;

        // Featured entries often come without ids; give them positional ones
        if let Some(events) = snapshot.events.as_mut() {
            assign_missing_ids(events, "event");
        }
        if let Some(focus) = snapshot.focus.as_mut() {
            assign_missing_ids(focus, "focus");
        }

        log::debug!(
            "Parsed event document: {} events, {} featured",
            snapshot.events.as_ref().map_or(0, Vec::len),
            snapshot.focus.as_ref().map_or(0, Vec::len)
        );
        Ok(snapshot)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

fn assign_missing_ids(records: &mut [EventRecord], prefix: &str) {
    for (idx, record) in records.iter_mut().enumerate() {
        if record.id.is_empty() {
            record.id = format!("{}-{}", prefix, idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_supported_date_shapes() {
        let rfc = parse_event_date("2022-04-29T20:28:45.744Z").unwrap();
        assert_eq!((rfc.year(), rfc.month(), rfc.day(), rfc.hour()), (2022, 4, 29, 20));

        let offset = parse_event_date("2024-01-01T10:00:00+02:00").unwrap();
        assert_eq!(offset.hour(), 8);

        let naive = parse_event_date("2024-06-01T09:30:00").unwrap();
        assert_eq!((naive.hour(), naive.minute()), (9, 30));

        let plain = parse_event_date(" 2024-06-01 ").unwrap();
        assert_eq!((plain.month(), plain.day(), plain.hour()), (6, 1, 0));

        assert!(parse_event_date("next tuesday").is_none());
    }

    #[test]
    fn document_with_numeric_ids_and_missing_focus_ids() {
        let raw = r#"{
            "events": [
                {"id": 1, "type": "conférence", "date": "2022-04-29T20:28:45.744Z",
                 "title": "User&product MixUsers", "cover": "/images/a.png",
                 "description": "Présentation", "nb_guesses": 1300,
                 "periode": "24-25-26 Février", "prestations": ["1 espace d’exposition"]}
            ],
            "focus": [
                {"title": "World economic forum", "date": "2022-02-29T20:28:45.744Z",
                 "cover": "/images/b.png", "description": "Oeuvre"}
            ]
        }"#;
        let snapshot = DataSnapshot::from_json_str(raw).unwrap();
        let events = snapshot.events.unwrap();
        assert_eq!(events[0].id, "1");
        assert_eq!(events[0].event_type, "conférence");
        assert_eq!(events[0].nb_guesses, Some(1300));
        assert_eq!(events[0].prestations.len(), 1);

        let focus = snapshot.focus.unwrap();
        assert_eq!(focus[0].id, "focus-0");
        assert_eq!(focus[0].event_type, "");
        // 2022-02-29 does not exist and is read as the next day
        assert_eq!((focus[0].date.month(), focus[0].date.day()), (3, 1));
    }

    #[test]
    fn overflowing_days_roll_into_next_month() {
        let d = parse_event_date("2023-04-31").unwrap();
        assert_eq!((d.month(), d.day()), (5, 1));
        let d = parse_event_date("2023-12-32T10:00:00Z");
        assert!(d.is_none());
        assert!(parse_event_date("2023-13-01").is_none());
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let raw = r#"{
            "events": [
                {"id": 1, "title": "Kept", "date": "2024-01-01", "type": "Talk"},
                {"id": 2, "title": "Bad date", "date": "not a date", "type": "Talk"},
                {"id": 3.0, "date": "2024-02-01", "type": "Talk"},
                {"id": 4, "title": "No date", "type": "Talk"}
            ],
            "focus": [
                {"title": "Broken", "date": "someday"},
                {"title": "Fine", "date": "2024-03-01"}
            ]
        }"#;
        let snapshot = DataSnapshot::from_json_str(raw).unwrap();

        let events = snapshot.events.unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(events[1].title, "");

        let focus = snapshot.focus.unwrap();
        assert_eq!(focus.len(), 1);
        assert_eq!(focus[0].title, "Fine");
    }

    #[test]
    fn absent_collections_stay_absent() {
        let snapshot = DataSnapshot::from_json_str("{}").unwrap();
        assert!(snapshot.events.is_none());
        assert!(snapshot.focus.is_none());

        let snapshot = DataSnapshot::from_json_str(r#"{"events": []}"#).unwrap();
        assert_eq!(snapshot.events, Some(vec![]));
    }

    #[test]
    fn load_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "not json").unwrap();

        let err = DataSnapshot::load_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("events.json"));
    }
}
