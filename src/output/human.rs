#![forbid(unsafe_code)]

//! Human-readable output
//!
//! Counts are right-aligned in a column followed by the document path, with a
//! total line at the end. Verbose mode adds the per-rule breakdown under each
//! document.

use crate::engine::ExecutionResult;
use crate::rules::RuleSet;
use crate::status::LabelStyle;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable formatter for counts and rule listings
pub struct HumanFormatter {
    style: LabelStyle,
    verbose: bool,
}

impl HumanFormatter {
    pub fn new(style: LabelStyle, verbose: bool) -> Self {
        Self { style, verbose }
    }

    /// Writes one line per document and a total
    pub fn write_counts(&self, out: &mut dyn WriteColor, result: &ExecutionResult) -> io::Result<()> {
        let width = result
            .documents
            .iter()
            .map(|doc| doc.report.count.to_string().len())
            .max()
            .unwrap_or(1);

        for doc in &result.documents {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "{:>width$}", doc.report.count, width = width)?;
            out.reset()?;
            writeln!(out, "  {}", doc.path.display())?;

            if self.verbose {
                out.set_color(ColorSpec::new().set_dimmed(true))?;
                writeln!(
                    out,
                    "{:>width$}  {} characters before filtering",
                    "",
                    doc.report.original_chars,
                    width = width
                )?;
                for (rule, removed) in doc.report.removed.iter().filter(|(_, n)| **n > 0) {
                    writeln!(out, "{:>width$}  -{} {}", "", removed, rule, width = width)?;
                }
                out.reset()?;
            }
        }

        for path in &result.unreadable {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "skipped")?;
            out.reset()?;
            writeln!(out, "  {} (unreadable)", path.display())?;
        }

        if result.documents.len() != 1 || self.verbose {
            writeln!(
                out,
                "Total: {} in {} document(s)",
                self.style.render(result.total()),
                result.documents.len()
            )?;
        }
        Ok(())
    }

    /// Writes the rule list in application order
    pub fn write_rules(&self, out: &mut dyn WriteColor, rules: &RuleSet) -> io::Result<()> {
        let width = rules.iter().map(|r| r.name().as_str().len()).max().unwrap_or(0);

        for rule in rules.iter() {
            let (mark, color) = if rule.is_enabled() {
                ("✓", Color::Green)
            } else {
                ("✗", Color::Red)
            };
            out.set_color(ColorSpec::new().set_fg(Some(color)))?;
            write!(out, "{}", mark)?;
            out.reset()?;
            writeln!(
                out,
                " {:<width$}  {}",
                rule.name().as_str(),
                rule.description(),
                width = width
            )?;
            if self.verbose {
                writeln!(out, "  {:<width$}  pattern: {}", "", rule.pattern(), width = width)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CharacterCounter, DocumentCount};
    use crate::types::{LanguageKind, RuleName};
    use std::path::PathBuf;
    use termcolor::Buffer;

    fn result_for(docs: &[(&str, &str)]) -> ExecutionResult {
        let counter = CharacterCounter::new();
        ExecutionResult {
            documents: docs
                .iter()
                .map(|(path, text)| DocumentCount {
                    path: PathBuf::from(path),
                    language: LanguageKind::Markdown,
                    report: counter.count_detailed(text),
                })
                .collect(),
            unreadable: Vec::new(),
        }
    }

    fn render_counts(formatter: &HumanFormatter, result: &ExecutionResult) -> String {
        let mut buffer = Buffer::no_color();
        formatter.write_counts(&mut buffer, result).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_counts_with_total() {
        let formatter = HumanFormatter::new(LabelStyle::default(), false);
        let output = render_counts(&formatter, &result_for(&[("a.md", "あいう"), ("b.md", "本文")]));

        assert!(output.contains("3  a.md\n"));
        assert!(output.contains("2  b.md\n"));
        assert!(output.contains("Total: $(pencil) 5 文字 in 2 document(s)"));
    }

    #[test]
    fn test_single_document_has_no_total() {
        let formatter = HumanFormatter::new(LabelStyle::default(), false);
        let output = render_counts(&formatter, &result_for(&[("a.md", "あいう")]));
        assert_eq!(output, "3  a.md\n");
    }

    #[test]
    fn test_verbose_breakdown() {
        let formatter = HumanFormatter::new(LabelStyle::new(None, "chars"), true);
        let output = render_counts(&formatter, &result_for(&[("a.md", "# 題\nあ")]));

        assert!(output.contains("5 characters before filtering"));
        assert!(output.contains("-3 heading"));
        assert!(output.contains("-1 whitespace"));
        assert!(!output.contains("htmlComment"));
        assert!(output.contains("Total: 1 chars in 1 document(s)"));
    }

    #[test]
    fn test_rules_listing_marks_disabled() {
        let mut counter = CharacterCounter::new();
        counter.set_enabled(RuleName::AsciiCharacters, false);

        let formatter = HumanFormatter::new(LabelStyle::default(), false);
        let mut buffer = Buffer::no_color();
        formatter.write_rules(&mut buffer, counter.rules()).unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("✓ heading"));
        assert!(lines[6].starts_with("✗ asciiCharacters"));
    }
}
