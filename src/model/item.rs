// File: ./src/model/item.rs
use crate::model::adapter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single scheduled event as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "adapter::id_from_any")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "adapter::flexible_date")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub cover: String,
    #[serde(rename = "type", default)]
    pub event_type: String,

    // Detail overlay extras
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periode: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prestations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nb_guesses: Option<u32>,
}

impl EventRecord {
    pub fn new(id: &str, title: &str, date: DateTime<Utc>, event_type: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            date,
            cover: String::new(),
            event_type: event_type.to_string(),
            periode: None,
            prestations: Vec::new(),
            nb_guesses: None,
        }
    }
}

/// One loaded data set. `None` means the collection was absent from the
/// document, which views treat differently from an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    #[serde(
        default,
        deserialize_with = "adapter::lenient_records",
        skip_serializing_if = "Option::is_none"
    )]
    pub events: Option<Vec<EventRecord>>,
    #[serde(
        default,
        deserialize_with = "adapter::lenient_records",
        skip_serializing_if = "Option::is_none"
    )]
    pub focus: Option<Vec<EventRecord>>,
}

impl DataSnapshot {
    pub fn new(events: Vec<EventRecord>, focus: Vec<EventRecord>) -> Self {
        Self {
            events: Some(events),
            focus: Some(focus),
        }
    }
}

/// The value pushed by the data source. A fresh `Ready` snapshot is a fresh
/// allocation, and consumers use that allocation as the collection identity.
#[derive(Debug, Clone, Default)]
pub enum DataState {
    #[default]
    Loading,
    Error(String),
    Ready(Arc<DataSnapshot>),
}

impl DataState {
    pub fn ready(snapshot: DataSnapshot) -> Self {
        DataState::Ready(Arc::new(snapshot))
    }

    pub fn snapshot(&self) -> Option<&Arc<DataSnapshot>> {
        match self {
            DataState::Ready(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DataState::Error(_))
    }
}
