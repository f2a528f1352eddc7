use crate::options::WalkOptions;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as AnsiColor;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Output format for the final walk report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenameStatus {
    /// The file was renamed on disk
    Renamed,
    /// Pretend mode: the rename was only reported
    Pretended,
    /// The rename was attempted and failed
    Failed,
    /// The rename was not attempted
    Skipped,
}

impl RenameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Renamed => "renamed",
            Self::Pretended => "would rename",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }
}

/// One file whose name changes under the transform, with paths relative to
/// the walk root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRecord {
    pub from: PathBuf,
    pub to: PathBuf,
    pub status: RenameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RenameRecord {
    pub fn new(from: PathBuf, to: PathBuf, status: RenameStatus) -> Self {
        Self {
            from,
            to,
            status,
            reason: None,
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Result of a walk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkReport {
    pub root: PathBuf,
    pub options: WalkOptions,
    pub files_seen: usize,
    pub unchanged: usize,
    pub directories_entered: usize,
    pub hidden_dirs_skipped: usize,
    pub listing_failures: usize,
    pub unreadable_names: usize,
    pub renames: Vec<RenameRecord>,
}

impl WalkReport {
    pub fn new(root: &Path, options: WalkOptions) -> Self {
        Self {
            root: root.to_path_buf(),
            options,
            files_seen: 0,
            unchanged: 0,
            directories_entered: 0,
            hidden_dirs_skipped: 0,
            listing_failures: 0,
            unreadable_names: 0,
            renames: Vec::new(),
        }
    }

    pub fn push(&mut self, record: RenameRecord) {
        self.renames.push(record);
    }

    pub fn count(&self, status: RenameStatus) -> usize {
        self.renames.iter().filter(|r| r.status == status).count()
    }

    /// True when some rename or listing did not go through
    pub fn has_problems(&self) -> bool {
        self.listing_failures > 0
            || self.unreadable_names > 0
            || self
                .renames
                .iter()
                .any(|r| matches!(r.status, RenameStatus::Failed | RenameStatus::Skipped))
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat, use_color: bool) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self, use_color: bool) -> String;
    fn format_table(&self, use_color: bool) -> String;
}

impl OutputFormatter for WalkReport {
    fn format(&self, format: OutputFormat, use_color: bool) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(use_color),
            OutputFormat::Table => self.format_table(use_color),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": !self.has_problems(),
            "root": self.root,
            "options": self.options,
            "summary": {
                "files_seen": self.files_seen,
                "unchanged": self.unchanged,
                "renamed": self.count(RenameStatus::Renamed),
                "would_rename": self.count(RenameStatus::Pretended),
                "failed": self.count(RenameStatus::Failed),
                "skipped": self.count(RenameStatus::Skipped),
                "directories_entered": self.directories_entered,
                "hidden_dirs_skipped": self.hidden_dirs_skipped,
                "listing_failures": self.listing_failures,
                "unreadable_names": self.unreadable_names,
            },
            "renames": self.renames,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self, use_color: bool) -> String {
        let paint = |color: AnsiColor, text: String| {
            if use_color {
                color.paint(text).to_string()
            } else {
                text
            }
        };

        let mut output = String::new();

        writeln!(
            output,
            "Scanned {} files in {} directories",
            self.files_seen,
            self.directories_entered + 1
        )
        .unwrap();

        if self.options.pretend {
            let pending = self.count(RenameStatus::Pretended);
            writeln!(
                output,
                "{}",
                paint(AnsiColor::Yellow, format!("Would rename {pending} files"))
            )
            .unwrap();
            if pending > 0 {
                output.push_str("Run with --pretend=false to apply\n");
            }
        } else {
            writeln!(
                output,
                "{}",
                paint(
                    AnsiColor::Green,
                    format!("✓ Renamed {} files", self.count(RenameStatus::Renamed))
                )
            )
            .unwrap();
        }

        let failed = self.count(RenameStatus::Failed);
        if failed > 0 {
            writeln!(
                output,
                "{}",
                paint(AnsiColor::Red, format!("✗ {failed} renames failed"))
            )
            .unwrap();
        }

        let skipped = self.count(RenameStatus::Skipped);
        if skipped > 0 {
            writeln!(output, "Skipped {skipped} files whose new name already exists").unwrap();
        }

        if self.listing_failures > 0 {
            writeln!(
                output,
                "{}",
                paint(
                    AnsiColor::Red,
                    format!("✗ Could not list {} directories", self.listing_failures)
                )
            )
            .unwrap();
        }

        if self.unreadable_names > 0 {
            writeln!(
                output,
                "Skipped {} files with non UTF-8 names",
                self.unreadable_names
            )
            .unwrap();
        }

        if self.options.verbose {
            writeln!(output, "{} files already had spaced names", self.unchanged).unwrap();
        }

        output
    }

    fn format_table(&self, use_color: bool) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);

        if use_color {
            table.enforce_styling();
            table.set_header(vec![
                Cell::new("From").fg(Color::Cyan),
                Cell::new("To").fg(Color::Cyan),
                Cell::new("Status").fg(Color::Cyan),
            ]);
        } else {
            table.set_header(vec!["From", "To", "Status"]);
        }

        for record in &self.renames {
            let status = match &record.reason {
                Some(reason) => format!("{}: {}", record.status.as_str(), reason),
                None => record.status.as_str().to_string(),
            };
            let status_cell = if use_color {
                let color = match record.status {
                    RenameStatus::Renamed => Color::Green,
                    RenameStatus::Pretended => Color::Yellow,
                    RenameStatus::Failed => Color::Red,
                    RenameStatus::Skipped => Color::DarkGrey,
                };
                Cell::new(status).fg(color)
            } else {
                Cell::new(status)
            };

            table.add_row(vec![
                Cell::new(record.from.display()),
                Cell::new(record.to.display()),
                status_cell,
            ]);
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(pretend: bool) -> WalkReport {
        let options = WalkOptions {
            pretend,
            ..WalkOptions::default()
        };
        let mut report = WalkReport::new(Path::new("/work"), options);
        report.files_seen = 4;
        report.unchanged = 1;
        report.directories_entered = 1;
        let status = if pretend {
            RenameStatus::Pretended
        } else {
            RenameStatus::Renamed
        };
        report.push(RenameRecord::new(
            PathBuf::from("helloWorld.txt"),
            PathBuf::from("Hello World.txt"),
            status,
        ));
        report.push(RenameRecord::new(
            PathBuf::from("sub/anotherTest.md"),
            PathBuf::from("sub/Another Test.md"),
            status,
        ));
        report
    }

    #[test]
    fn test_pretend_summary() {
        let report = sample_report(true);
        insta::assert_snapshot!(report.format(OutputFormat::Summary, false), @r"
        Scanned 4 files in 2 directories
        Would rename 2 files
        Run with --pretend=false to apply
        ");
    }

    #[test]
    fn test_apply_summary_with_failure() {
        let mut report = sample_report(false);
        report.push(
            RenameRecord::new(
                PathBuf::from("lockedFile"),
                PathBuf::from("Locked File"),
                RenameStatus::Failed,
            )
            .with_reason("permission denied"),
        );
        report.files_seen = 5;

        insta::assert_snapshot!(report.format(OutputFormat::Summary, false), @r"
        Scanned 5 files in 2 directories
        ✓ Renamed 2 files
        ✗ 1 renames failed
        ");
        assert!(report.has_problems());
    }

    #[test]
    fn test_colored_summary_contains_escape_codes() {
        let report = sample_report(true);
        let colored = report.format(OutputFormat::Summary, true);
        assert!(colored.contains("\u{1b}["));
        assert!(colored.contains("Would rename 2 files"));
    }

    #[test]
    fn test_json_output() {
        let report = sample_report(true);
        let value: serde_json::Value =
            serde_json::from_str(&report.format(OutputFormat::Json, false)).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["options"]["pretend"], true);
        assert_eq!(value["summary"]["would_rename"], 2);
        assert_eq!(value["summary"]["renamed"], 0);
        assert_eq!(value["renames"][0]["from"], "helloWorld.txt");
        assert_eq!(value["renames"][0]["to"], "Hello World.txt");
        assert_eq!(value["renames"][0]["status"], "pretended");
        assert!(value["renames"][0].get("reason").is_none());
    }

    #[test]
    fn test_table_output() {
        let report = sample_report(false);
        let table = report.format(OutputFormat::Table, false);

        assert!(table.contains("From"));
        assert!(table.contains("sub/anotherTest.md"));
        assert!(table.contains("Hello World.txt"));
        assert!(table.contains("renamed"));
    }
}
