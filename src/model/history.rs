//! Upload history types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record of the upload history, newest first as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Record identifier.
    pub id: i64,

    /// Name of the uploaded file.
    #[serde(rename = "nombre_archivo")]
    pub file_name: String,

    /// User who uploaded the file, if known.
    #[serde(rename = "usuario", default)]
    pub user: Option<String>,

    /// When the record was written.
    #[serde(rename = "fecha_actualizacion")]
    pub updated_at: DateTime<Utc>,

    /// Number of content elements the upload produced.
    #[serde(rename = "cantidad_registros", default)]
    pub element_count: i64,

    /// Publication number of the upload, if one was recorded.
    #[serde(rename = "numero_publicacion", default)]
    pub publication: Option<i64>,

    /// Processing status reported by the backend.
    #[serde(rename = "estado", default)]
    pub status: Option<String>,

    /// Execution mode the backend ran in.
    #[serde(rename = "modo_ejecucion", default)]
    pub execution_mode: Option<String>,
}

impl HistoryEntry {
    /// User name for display, falling back to "anonymous".
    pub fn display_user(&self) -> &str {
        self.user.as_deref().unwrap_or("anonymous")
    }

    /// Publication number for display, falling back to "n/a".
    pub fn display_publication(&self) -> String {
        match self.publication {
            Some(publication) => publication.to_string(),
            None => "n/a".to_string(),
        }
    }

    /// Status for display, falling back to "completed".
    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or("completed")
    }
}

/// The upload history as an ordered list of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    /// Records, newest first. The order is the backend's and is preserved.
    pub entries: Vec<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Timestamp of the most recent record.
    ///
    /// Records arrive newest first, so this is the first entry's timestamp.
    pub fn latest_update(&self) -> Option<DateTime<Utc>> {
        self.entries.first().map(|entry| entry.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(id: i64, ts: DateTime<Utc>) -> HistoryEntry {
        HistoryEntry {
            id,
            file_name: format!("upload-{}.csv", id),
            user: None,
            updated_at: ts,
            element_count: 4,
            publication: None,
            status: None,
            execution_mode: None,
        }
    }

    #[test]
    fn test_display_fallbacks() {
        let e = entry(1, Utc.with_ymd_and_hms(2025, 10, 21, 12, 0, 0).unwrap());
        assert_eq!(e.display_user(), "anonymous");
        assert_eq!(e.display_publication(), "n/a");
        assert_eq!(e.display_status(), "completed");
    }

    #[test]
    fn test_latest_update_is_first_entry() {
        let newest = Utc.with_ymd_and_hms(2025, 10, 21, 12, 0, 0).unwrap();
        let older = Utc.with_ymd_and_hms(2025, 10, 20, 12, 0, 0).unwrap();
        let history = History {
            entries: vec![entry(2, newest), entry(1, older)],
        };
        assert_eq!(history.latest_update(), Some(newest));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_history_deserializes_wire_names() {
        let json = r#"[{
            "id": 5,
            "nombre_archivo": "contenido.xlsx",
            "usuario": "ana",
            "fecha_actualizacion": "2025-10-21T12:00:00Z",
            "cantidad_registros": 12,
            "numero_publicacion": 3
        }]"#;
        let history: History = serde_json::from_str(json).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries[0].file_name, "contenido.xlsx");
        assert_eq!(history.entries[0].display_user(), "ana");
        assert_eq!(history.entries[0].display_publication(), "3");
    }
}
