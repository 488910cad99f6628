//! Alert Batch Data Model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Default table: the fixed text substituted per field when a payload
// omits that field.
const DEFAULT_STATUS: &str = "unknown";
const DEFAULT_ALERT_NAME: &str = "unknown";
const DEFAULT_SUMMARY: &str = "no summary";
const DEFAULT_DESCRIPTION: &str = "no description";

/// The alerts delivered in one webhook call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertBatch {
    /// Alert entries in delivery order; an absent key decodes to empty
    #[serde(default)]
    pub alerts: Vec<AlertEntry>,
}

/// A single alert record; every field is optional on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertEntry {
    pub status: Option<String>,
    pub labels: Option<HashMap<String, String>>,
    pub annotations: Option<HashMap<String, String>>,
}

impl AlertEntry {
    /// Alert status, or the fixed default when absent
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }

    /// The `alertname` label, or the fixed default when absent
    pub fn alertname(&self) -> &str {
        self.label("alertname").unwrap_or(DEFAULT_ALERT_NAME)
    }

    /// The `summary` annotation, or the fixed default when absent
    pub fn summary(&self) -> &str {
        self.annotation("summary").unwrap_or(DEFAULT_SUMMARY)
    }

    /// The `description` annotation, or the fixed default when absent
    pub fn description(&self) -> &str {
        self.annotation("description").unwrap_or(DEFAULT_DESCRIPTION)
    }

    fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(key))
            .map(String::as_str)
    }

    fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .as_ref()
            .and_then(|annotations| annotations.get(key))
            .map(String::as_str)
    }
}
