//! Typed accessors over the key-value store
//!
//! Each accessor owns one storage key and parses defensively: malformed or
//! absent entries yield the documented default instead of an error.

use super::KeyValueStore;
use crate::country::CountryCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const COUNTRY_KEY: &str = "app:country";
const SAVED_PROPERTIES_KEY: &str = "saved:properties";
const PREFS_KEY: &str = "profile:prefs";
const NOTIFY_FREQ_KEY: &str = "profile:notify:freq";
const BUGS_KEY: &str = "support:bugs";

/// Read the selected country, defaulting to India
pub fn country_preference<S: KeyValueStore>(store: &S) -> CountryCode {
    store
        .get(COUNTRY_KEY)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

/// Persist the selected country
pub fn set_country_preference<S: KeyValueStore>(store: &mut S, country: CountryCode) {
    store.set(COUNTRY_KEY, country.as_str());
}

/// A property the user bookmarked from the comparables list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedProperty {
    pub id: String,
    /// Display price, already formatted in the selected currency
    pub price: String,
    pub address: String,
    /// Bed/bath/sqft summary line
    pub details: String,
}

/// All saved properties; a malformed list reads as empty
pub fn saved_properties<S: KeyValueStore>(store: &S) -> Vec<SavedProperty> {
    store
        .get(SAVED_PROPERTIES_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Append a property unless its id is already saved. Returns false on a
/// duplicate.
pub fn save_property<S: KeyValueStore>(store: &mut S, property: SavedProperty) -> bool {
    let mut list = saved_properties(store);
    if list.iter().any(|p| p.id == property.id) {
        return false;
    }
    list.push(property);
    if let Ok(serialized) = serde_json::to_string(&list) {
        store.set(SAVED_PROPERTIES_KEY, &serialized);
    }
    true
}

/// Communication preference flags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    pub newsletter: bool,
    pub alerts: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            newsletter: true,
            alerts: true,
        }
    }
}

/// Stored preference flags, defaulting to everything on
pub fn preferences<S: KeyValueStore>(store: &S) -> Preferences {
    store
        .get(PREFS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn set_preferences<S: KeyValueStore>(store: &mut S, prefs: Preferences) {
    if let Ok(serialized) = serde_json::to_string(&prefs) {
        store.set(PREFS_KEY, &serialized);
    }
}

/// Notification cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl NotifyFrequency {
    fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "daily" => Some(NotifyFrequency::Daily),
            "weekly" => Some(NotifyFrequency::Weekly),
            "monthly" => Some(NotifyFrequency::Monthly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyFrequency::Daily => "daily",
            NotifyFrequency::Weekly => "weekly",
            NotifyFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for NotifyFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored notification frequency; unrecognized values read as unset
pub fn notify_frequency<S: KeyValueStore>(store: &S) -> Option<NotifyFrequency> {
    store
        .get(NOTIFY_FREQ_KEY)
        .and_then(|raw| NotifyFrequency::from_raw(&raw))
}

pub fn set_notify_frequency<S: KeyValueStore>(store: &mut S, freq: NotifyFrequency) {
    store.set(NOTIFY_FREQ_KEY, freq.as_str());
}

/// Bug severity as reported by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BugSeverity {
    Low,
    #[default]
    Medium,
    High,
}

/// A submitted bug report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BugReport {
    pub id: Uuid,
    pub title: String,
    pub email: String,
    pub severity: BugSeverity,
    pub steps: String,
    pub at: DateTime<Utc>,
}

impl BugReport {
    pub fn new(title: &str, email: &str, severity: BugSeverity, steps: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            email: email.trim().to_string(),
            severity,
            steps: steps.trim().to_string(),
            at: Utc::now(),
        }
    }
}

/// All submitted bug reports; a malformed list reads as empty
pub fn bug_reports<S: KeyValueStore>(store: &S) -> Vec<BugReport> {
    store
        .get(BUGS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Append a bug report to the stored list
pub fn submit_bug_report<S: KeyValueStore>(store: &mut S, report: BugReport) {
    let mut list = bug_reports(store);
    list.push(report);
    if let Ok(serialized) = serde_json::to_string(&list) {
        store.set(BUGS_KEY, &serialized);
    }
}
