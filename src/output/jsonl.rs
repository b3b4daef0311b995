#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All document records (sorted by path)
//! 2. All unreadable records (sorted by path)
//! 3. One total record
//!
//! Rule listings are one `rule` record per rule, in application order.

use crate::engine::ExecutionResult;
use crate::rules::RuleSet;
use crate::status::StatusLabel;
use crate::types::{LanguageKind, RuleName};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format counting results as JSONL
    pub fn format_counts(&self, result: &ExecutionResult) -> String {
        let mut output = String::new();

        for doc in &result.documents {
            push_record(
                &mut output,
                &DocumentRecord {
                    record_type: "document",
                    path: &doc.path,
                    language: doc.language,
                    count: doc.report.count,
                    characters: doc.report.original_chars,
                    removed: &doc.report.removed,
                },
            );
        }

        for path in &result.unreadable {
            push_record(
                &mut output,
                &UnreadableRecord {
                    record_type: "unreadable",
                    path,
                },
            );
        }

        push_record(
            &mut output,
            &TotalRecord {
                record_type: "total",
                documents: result.documents.len(),
                unreadable: result.unreadable.len(),
                count: result.total(),
            },
        );

        output
    }

    /// Format the rule list as JSONL
    pub fn format_rules(&self, rules: &RuleSet) -> String {
        let mut output = String::new();
        for rule in rules.iter() {
            push_record(
                &mut output,
                &RuleRecord {
                    record_type: "rule",
                    name: rule.name(),
                    enabled: rule.is_enabled(),
                    pattern: rule.pattern(),
                    description: rule.description(),
                },
            );
        }
        output
    }

    /// Format a status label as a single JSON line
    ///
    /// A hidden status is `{"type":"status","visible":false}`.
    pub fn format_status(&self, label: Option<&StatusLabel>) -> String {
        let mut output = String::new();
        push_record(
            &mut output,
            &StatusRecord {
                record_type: "status",
                visible: label.is_some(),
                label: label.map(|l| l.to_string()),
                count: label.map(|l| l.count),
            },
        );
        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record(output: &mut String, record: &impl Serialize) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

#[derive(Debug, Serialize)]
struct DocumentRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    path: &'a Path,
    language: LanguageKind,
    count: usize,
    characters: usize,
    removed: &'a BTreeMap<RuleName, usize>,
}

#[derive(Debug, Serialize)]
struct UnreadableRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    path: &'a Path,
}

#[derive(Debug, Serialize)]
struct TotalRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    documents: usize,
    unreadable: usize,
    count: usize,
}

#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    name: RuleName,
    enabled: bool,
    pattern: &'a str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}
