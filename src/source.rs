// File: ./src/source.rs
// Push-updated data provider shared by the list and the carousel
use crate::model::{DataSnapshot, DataState};
use std::path::Path;
use tokio::sync::watch;

#[derive(Debug)]
pub struct DataSource {
    tx: watch::Sender<DataState>,
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(DataState::Loading);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<DataState> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> DataState {
        self.tx.borrow().clone()
    }

    pub fn publish_snapshot(&self, snapshot: DataSnapshot) {
        self.tx.send_replace(DataState::ready(snapshot));
    }

    pub fn publish_error(&self, msg: impl Into<String>) {
        let msg = msg.into();
        log::warn!("Data source error: {}", msg);
        self.tx.send_replace(DataState::Error(msg));
    }

    /// Reads the event document at `path` and publishes the outcome.
    pub async fn load_file(&self, path: &Path) {
        let owned = path.to_path_buf();
        let result = tokio::task::spawn_blocking(move || DataSnapshot::load_file(&owned)).await;

        match result {
            Ok(Ok(snapshot)) => {
                log::info!("Loaded event document from {}", path.display());
                self.publish_snapshot(snapshot);
            }
            Ok(Err(e)) => self.publish_error(format!("{:#}", e)),
            Err(e) => self.publish_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventRecord;
    use chrono::Utc;
    use std::sync::Arc;

    #[test]
    fn starts_loading_and_pushes_updates() {
        let source = DataSource::new();
        let rx = source.subscribe();
        assert!(matches!(source.current(), DataState::Loading));

        source.publish_snapshot(DataSnapshot::new(
            vec![EventRecord::new("1", "A", Utc::now(), "Talk")],
            vec![],
        ));
        assert!(rx.has_changed().unwrap());
        let first = source.current();
        assert_eq!(first.snapshot().unwrap().events.as_ref().unwrap().len(), 1);

        source.publish_error("boom");
        assert!(source.current().is_error());
    }

    #[test]
    fn each_publish_is_a_new_identity() {
        let source = DataSource::new();
        source.publish_snapshot(DataSnapshot::default());
        let a = source.current();
        source.publish_snapshot(DataSnapshot::default());
        let b = source.current();
        assert!(!Arc::ptr_eq(a.snapshot().unwrap(), b.snapshot().unwrap()));
    }

    #[tokio::test]
    async fn load_file_publishes_error_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DataSource::new();
        source.load_file(&dir.path().join("missing.json")).await;

        match source.current() {
            DataState::Error(msg) => assert!(msg.contains("missing.json")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn load_file_publishes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"{"events": [{"id": 7, "title": "T", "date": "2024-01-01", "type": "Talk"}], "focus": []}"#,
        )
        .unwrap();

        let source = DataSource::new();
        source.load_file(&path).await;
        let state = source.current();
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.events.as_ref().unwrap()[0].id, "7");
    }
}
