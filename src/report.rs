//! Printing the effective configuration.
//!
//! A [`Report`] is a filtered, masked snapshot of every effective value plus
//! the tool and detector sets the selection policy produced. It prints either
//! as a human readable listing grouped by primary group or as one JSON
//! document.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;

use crate::catalog::{DetectTool, DetectorType};
use crate::config::EffectiveValue;
use crate::property::{Category, Group, PropertyKey};
use crate::selection::ActiveSet;

/// Replacement text for secret values.
pub const MASK: &str = "********";

const SECRET_SEGMENTS: [&str; 2] = ["password", "token"];

/// Whether the value of a key must never be printed.
///
/// Matches on the last dot separated segment, so `blackduck.api.token` is a
/// secret and `detect.project.tokenizer` is not.
#[must_use]
pub fn is_secret(key: &PropertyKey) -> bool {
    key.as_str()
        .rsplit('.')
        .next()
        .is_some_and(|segment| SECRET_SEGMENTS.contains(&segment))
}

/// Which properties a report lists.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOptions {
    /// List advanced properties even when nothing supplied them.
    pub include_advanced: bool,

    /// Only list properties carrying this group.
    pub group: Option<Group>,
}

impl ReportOptions {
    fn shows(&self, value: &EffectiveValue) -> bool {
        let group_matches = self.group.is_none_or(|group| value.groups.contains(&group));
        let prominent = self.include_advanced
            || value.category == Category::Basic
            || value.source.is_some();

        group_matches && prominent
    }
}

/// Snapshot of the effective configuration, ready to print.
#[derive(Debug, Serialize)]
pub struct Report {
    pub properties: Vec<EffectiveValue>,
    pub active_tools: Vec<String>,
    pub active_detectors: Vec<String>,
    pub unknown_keys: Vec<PropertyKey>,
}

impl Report {
    #[must_use]
    pub fn new(
        values: Vec<EffectiveValue>,
        options: &ReportOptions,
        tools: &ActiveSet<DetectTool>,
        detectors: &ActiveSet<DetectorType>,
        unknown_keys: Vec<PropertyKey>,
    ) -> Self {
        let properties = values
            .into_iter()
            .filter(|value| options.shows(value))
            .map(|mut value| {
                if is_secret(&value.key) && value.value.is_some() {
                    value.value = Some(MASK.to_string());
                }
                value
            })
            .collect();

        Self {
            properties,
            active_tools: tools.names(),
            active_detectors: detectors.names(),
            unknown_keys,
        }
    }

    /// Listed properties keyed by primary group, each in registration order.
    #[must_use]
    pub fn by_group(&self) -> BTreeMap<Option<Group>, Vec<&EffectiveValue>> {
        let mut grouped: BTreeMap<Option<Group>, Vec<&EffectiveValue>> = BTreeMap::new();
        for value in &self.properties {
            grouped
                .entry(value.groups.first().copied())
                .or_default()
                .push(value);
        }
        grouped
    }

    /// The report as a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print the human readable report to stdout.
    pub fn print(&self) {
        for (group, values) in self.by_group() {
            let title = group.map_or_else(|| "Ungrouped".to_string(), |g| format!("{g:?}"));
            println!("\n{}", title.bold());

            for value in values {
                let text = value.value.as_deref().map_or_else(
                    || "<unset>".dimmed().to_string(),
                    |text| text.bright_white().to_string(),
                );
                let origin = match (&value.source, value.is_default) {
                    (Some(source), _) => format!("({source})").cyan().to_string(),
                    (None, true) => "(default)".dimmed().to_string(),
                    (None, false) => String::new(),
                };

                println!("  {} = {text} {origin}", value.key.as_str().green());
            }
        }

        println!("\n{}", "Active selection:".bold());
        println!("  Tools: {}", self.active_tools.join(", ").bright_green());
        println!("  Detectors: {}", self.active_detectors.join(", ").bright_green());

        if !self.unknown_keys.is_empty() {
            println!("\n{}", "Unknown keys:".yellow());
            for key in &self.unknown_keys {
                println!("  {}", key.as_str().yellow());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::ValueShape;
    use crate::selection::{Selection, SelectionRequest};

    fn value(key: &str, text: Option<&str>, source: Option<&str>, groups: &[Group], category: Category) -> EffectiveValue {
        EffectiveValue {
            key: PropertyKey::new(key),
            name: key.to_string(),
            value: text.map(str::to_string),
            source: source.map(str::to_string),
            is_default: source.is_none() && text.is_some(),
            shape: ValueShape::Scalar,
            groups: groups.to_vec(),
            category,
        }
    }

    fn sample() -> Vec<EffectiveValue> {
        vec![
            value("blackduck.url", Some("https://bd"), Some("file"), &[Group::BlackduckServer], Category::Basic),
            value("blackduck.password", Some("hunter2"), Some("environment"), &[Group::BlackduckServer], Category::Basic),
            value("blackduck.api.token", None, None, &[Group::BlackduckServer], Category::Basic),
            value("blackduck.timeout", Some("120"), None, &[Group::BlackduckServer], Category::Advanced),
            value("blackduck.proxy.host", Some("proxy"), Some("file"), &[Group::Proxy, Group::Blackduck], Category::Advanced),
            value("detect.cleanup", Some("true"), None, &[Group::Cleanup, Group::Global], Category::Basic),
        ]
    }

    fn report(options: &ReportOptions) -> Report {
        let tools = SelectionRequest::new(vec![Selection::All], vec![Selection::Value(DetectTool::Polaris)]).resolve();
        let detectors = SelectionRequest::new(vec![Selection::Value(DetectorType::Npm)], vec![]).resolve();
        Report::new(sample(), options, &tools, &detectors, vec![PropertyKey::new("detect.tool")])
    }

    fn keys(report: &Report) -> Vec<&str> {
        report.properties.iter().map(|v| v.key.as_str()).collect()
    }

    #[test]
    fn test_is_secret() {
        assert!(is_secret(&PropertyKey::new("blackduck.password")));
        assert!(is_secret(&PropertyKey::new("blackduck.proxy.password")));
        assert!(is_secret(&PropertyKey::new("blackduck.api.token")));
        assert!(is_secret(&PropertyKey::new("polaris.access.token")));
        assert!(!is_secret(&PropertyKey::new("blackduck.url")));
        assert!(!is_secret(&PropertyKey::new("detect.project.tokenizer")));
        assert!(!is_secret(&PropertyKey::new("detect.passwordless")));
        assert!(is_secret(&PropertyKey::new("token")));
    }

    #[test]
    fn test_secrets_are_masked() {
        let report = report(&ReportOptions::default());
        let password = report
            .properties
            .iter()
            .find(|v| v.key.as_str() == "blackduck.password")
            .unwrap();
        assert_eq!(password.value.as_deref(), Some(MASK));

        let token = report
            .properties
            .iter()
            .find(|v| v.key.as_str() == "blackduck.api.token")
            .unwrap();
        assert_eq!(token.value, None);
    }

    #[test]
    fn test_advanced_hidden_unless_supplied_or_requested() {
        let basic = report(&ReportOptions::default());
        assert_eq!(
            keys(&basic),
            vec![
                "blackduck.url",
                "blackduck.password",
                "blackduck.api.token",
                "blackduck.proxy.host",
                "detect.cleanup",
            ]
        );

        let all = report(&ReportOptions {
            include_advanced: true,
            group: None,
        });
        assert_eq!(all.properties.len(), 6);
    }

    #[test]
    fn test_group_filter_matches_any_group() {
        let report = report(&ReportOptions {
            include_advanced: true,
            group: Some(Group::Blackduck),
        });
        assert_eq!(keys(&report), vec!["blackduck.proxy.host"]);
    }

    #[test]
    fn test_by_group_uses_primary_group() {
        let report = report(&ReportOptions::default());
        let grouped = report.by_group();

        assert_eq!(grouped[&Some(Group::BlackduckServer)].len(), 3);
        assert_eq!(grouped[&Some(Group::Proxy)].len(), 1);
        assert_eq!(grouped[&Some(Group::Cleanup)].len(), 1);
        assert!(!grouped.contains_key(&Some(Group::Blackduck)));
    }

    #[test]
    fn test_active_sets_are_named() {
        let report = report(&ReportOptions::default());
        assert_eq!(
            report.active_tools,
            vec!["DETECTOR", "SIGNATURE_SCAN", "BINARY_SCAN", "DOCKER", "BAZEL"]
        );
        assert_eq!(report.active_detectors, vec!["NPM"]);
    }

    #[test]
    fn test_json_never_contains_secrets() {
        let json = report(&ReportOptions::default()).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(!json.contains("hunter2"));
        assert_eq!(parsed["active_detectors"][0], "NPM");
        assert_eq!(parsed["unknown_keys"][0], "detect.tool");
        assert_eq!(parsed["properties"][0]["key"], "blackduck.url");
    }
}
