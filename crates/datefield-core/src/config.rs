//! Host configuration for the field.
//!
//! A [`FieldConfig`] is an immutable value. Updates never patch it in place:
//! [`FieldConfig::merged`] builds the replacement from the previous value and a
//! [`ConfigPatch`].

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constraints::Constraints;
use crate::error::FieldResult;
use crate::iso::{DateIso, YearMonthIso};

/// How a successful date activation becomes the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitPolicy {
    /// Activating a date commits it and closes the panel.
    #[default]
    CommitOnSelect,
    /// Activating a date stages it; a confirm intent commits it.
    PreviewThenCommit,
}

/// Support text shown under the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub help_text: Option<String>,
    pub status_text: Option<String>,
    pub error_text: Option<String>,
}

impl Messages {
    /// The help text, if non-empty.
    pub fn help(&self) -> Option<&str> {
        non_empty(&self.help_text)
    }

    /// The status text, if non-empty.
    pub fn status(&self) -> Option<&str> {
        non_empty(&self.status_text)
    }

    /// The error text, if non-empty.
    pub fn error(&self) -> Option<&str> {
        non_empty(&self.error_text)
    }
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

/// Configuration supplied by the host at construction.
///
/// `value` and `open` are key-presence sensitive: `Some(_)` makes the field
/// controlled for the lifetime of the instance, even `Some(None)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    #[serde(deserialize_with = "deserialize_present", skip_serializing_if = "Option::is_none")]
    pub value: Option<Option<DateIso>>,
    pub default_value: Option<DateIso>,
    #[serde(deserialize_with = "deserialize_open", skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    pub disabled: bool,
    pub read_only: bool,
    pub is_page_loading: bool,
    #[serde(rename = "initialMonthISO")]
    pub initial_month_iso: Option<YearMonthIso>,
    pub constraints: Constraints,
    pub messages: Messages,
    pub commit_policy: CommitPolicy,
    pub week_starts_on: Weekday,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            value: None,
            default_value: None,
            open: None,
            disabled: false,
            read_only: false,
            is_page_loading: false,
            initial_month_iso: None,
            constraints: Constraints::default(),
            messages: Messages::default(),
            commit_policy: CommitPolicy::default(),
            week_starts_on: Weekday::Sun,
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from host JSON.
    pub fn from_json(json: &str) -> FieldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Make the value controlled by the host.
    pub fn with_value(mut self, value: Option<DateIso>) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_default_value(mut self, value: DateIso) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Make the open state controlled by the host.
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn page_loading(mut self, loading: bool) -> Self {
        self.is_page_loading = loading;
        self
    }

    pub fn with_initial_month(mut self, month: YearMonthIso) -> Self {
        self.initial_month_iso = Some(month);
        self
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_policy(mut self, policy: CommitPolicy) -> Self {
        self.commit_policy = policy;
        self
    }

    pub fn with_week_start(mut self, day: Weekday) -> Self {
        self.week_starts_on = day;
        self
    }

    /// Whether the host allows user interaction.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.read_only
    }

    /// Build the configuration that replaces this one after `patch`.
    ///
    /// The commit policy is fixed per instance and is not part of a patch.
    pub fn merged(&self, patch: ConfigPatch) -> Self {
        let mut next = self.clone();
        if let Some(value) = patch.value {
            next.value = Some(value);
        }
        if let Some(value) = patch.default_value {
            next.default_value = value;
        }
        if let Some(open) = patch.open {
            next.open = Some(open);
        }
        if let Some(disabled) = patch.disabled {
            next.disabled = disabled;
        }
        if let Some(read_only) = patch.read_only {
            next.read_only = read_only;
        }
        if let Some(loading) = patch.is_page_loading {
            next.is_page_loading = loading;
        }
        if let Some(month) = patch.initial_month_iso {
            next.initial_month_iso = Some(month);
        }
        if let Some(constraints) = patch.constraints {
            next.constraints = constraints;
        }
        if let Some(messages) = patch.messages {
            next.messages = messages;
        }
        if let Some(day) = patch.week_starts_on {
            next.week_starts_on = day;
        }
        next
    }
}

/// A partial configuration applied by `update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(deserialize_with = "deserialize_present")]
    pub value: Option<Option<DateIso>>,
    #[serde(deserialize_with = "deserialize_present")]
    pub default_value: Option<Option<DateIso>>,
    #[serde(deserialize_with = "deserialize_open")]
    pub open: Option<bool>,
    pub disabled: Option<bool>,
    pub read_only: Option<bool>,
    pub is_page_loading: Option<bool>,
    #[serde(rename = "initialMonthISO")]
    pub initial_month_iso: Option<YearMonthIso>,
    pub constraints: Option<Constraints>,
    pub messages: Option<Messages>,
    pub week_starts_on: Option<Weekday>,
}

impl ConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a patch from host JSON.
    pub fn from_json(json: &str) -> FieldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn value(mut self, value: Option<DateIso>) -> Self {
        self.value = Some(value);
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    pub fn page_loading(mut self, loading: bool) -> Self {
        self.is_page_loading = Some(loading);
        self
    }

    pub fn constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = Some(messages);
        self
    }
}

/// Keep a present-but-null key distinguishable from an absent one.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A present `open` key is controlled even when null, which reads as closed.
fn deserialize_open<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|open| Some(open.unwrap_or(false)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keys_are_uncontrolled() {
        let config = FieldConfig::from_json(r#"{ "defaultValue": "2026-01-15" }"#).unwrap();
        assert_eq!(config.value, None);
        assert_eq!(config.open, None);
        assert_eq!(config.default_value, Some("2026-01-15".parse().unwrap()));
        assert_eq!(config.week_starts_on, Weekday::Sun);
        assert_eq!(config.commit_policy, CommitPolicy::CommitOnSelect);
    }

    #[test]
    fn test_null_value_is_still_controlled() {
        let config = FieldConfig::from_json(r#"{ "value": null, "open": null }"#).unwrap();
        assert_eq!(config.value, Some(None));
        assert_eq!(config.open, Some(false));
    }

    #[test]
    fn test_full_host_config() {
        let json = r#"{
            "initialMonthISO": "2026-01",
            "defaultValue": "2026-01-15",
            "readOnly": true,
            "isPageLoading": false,
            "commitPolicy": "preview_then_commit",
            "constraints": { "clearable": true, "minDate": "2026-01-01", "maxDate": "2026-12-31" },
            "messages": { "helpText": "Pick a day", "errorText": "" }
        }"#;
        let config = FieldConfig::from_json(json).unwrap();

        assert_eq!(config.initial_month_iso, Some("2026-01".parse().unwrap()));
        assert!(config.read_only);
        assert!(!config.is_interactive());
        assert_eq!(config.commit_policy, CommitPolicy::PreviewThenCommit);
        assert!(config.constraints.clearable);
        assert_eq!(config.messages.help(), Some("Pick a day"));
        assert_eq!(config.messages.error(), None);
    }

    #[test]
    fn test_invalid_date_is_a_config_error() {
        let result = FieldConfig::from_json(r#"{ "defaultValue": "15/01/2026" }"#);
        assert!(matches!(result, Err(crate::FieldError::Config(_))));
    }

    #[test]
    fn test_merge_replaces_only_patched_keys() {
        let base = FieldConfig::new()
            .with_messages(Messages {
                help_text: Some("help".into()),
                ..Default::default()
            })
            .with_policy(CommitPolicy::PreviewThenCommit);
        let next = base.merged(ConfigPatch::new().disabled(true));

        assert!(next.disabled);
        assert_eq!(next.messages.help(), Some("help"));
        assert_eq!(next.commit_policy, CommitPolicy::PreviewThenCommit);
        assert!(!base.disabled);
    }

    #[test]
    fn test_patch_presence() {
        let patch = ConfigPatch::from_json(r#"{ "value": null }"#).unwrap();
        assert_eq!(patch.value, Some(None));
        let patch = ConfigPatch::from_json(r#"{ "disabled": true }"#).unwrap();
        assert_eq!(patch.value, None);
        assert_eq!(patch.disabled, Some(true));
    }
}
