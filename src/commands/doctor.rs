//! Implementation of the `scryforge doctor` command.
//!
//! Diagnoses environment and configuration readiness. Strictly read-only:
//! it loads the config, inspects the credential environment variable, and
//! dry-runs the template table, but never writes or repairs anything.
//!
//! Reports:
//! - Config file problems (unreadable, malformed, invalid values)
//! - Missing or odd-looking API credential (external generation falls back)
//! - Live generation disabled in config
//! - Template table defects (unresolved markers, hello_world below max score)

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{ForgeError, Result};
use crate::score;
use crate::template::{Template, TemplateId};
use std::collections::HashMap;

/// Severity level for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Warning: the demo still works, but degraded (e.g. template-only).
    Warning,
    /// Error: something is wrong and should be fixed.
    Error,
}

impl std::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueSeverity::Warning => write!(f, "WARNING"),
            IssueSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// A detected issue with a recommended fix.
#[derive(Debug, Clone)]
pub struct Issue {
    /// Severity level.
    pub severity: IssueSeverity,
    /// Category of the issue.
    pub category: &'static str,
    /// Description of the issue.
    pub description: String,
    /// Recommended remediation action.
    pub remediation: Option<String>,
}

impl Issue {
    fn new(severity: IssueSeverity, category: &'static str, description: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            description: description.into(),
            remediation: None,
        }
    }

    fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = Some(remediation.into());
        self
    }
}

/// Result of running the readiness checks.
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// List of detected issues.
    pub issues: Vec<Issue>,
}

impl DoctorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Execute the `scryforge doctor` command.
pub fn cmd_doctor() -> Result<()> {
    let mut report = DoctorReport::new();

    let config = check_config(&mut report);
    check_credential(&config, &mut report);
    check_live_mode(&config, &mut report);
    check_template_table(&mut report);

    print_summary(&config);
    print_report(&report);

    if report.has_issues() {
        return Err(ForgeError::UserError(format!(
            "Found {} issue(s). The demo still runs; see the report above for fixes.",
            report.issues.len()
        )));
    }

    Ok(())
}

/// Load the config the same way every other command does, reporting problems
/// instead of aborting. Falls back to defaults so later checks can run.
fn check_config(report: &mut DoctorReport) -> Config {
    match Config::discover() {
        Ok(config) => config,
        Err(err) => {
            report.issues.push(
                Issue::new(IssueSeverity::Error, "config", err.to_string()).with_remediation(
                    format!("fix or remove ./{} and re-run", CONFIG_FILE_NAME),
                ),
            );
            Config::default()
        }
    }
}

/// Check the API credential named by the config.
fn check_credential(config: &Config, report: &mut DoctorReport) {
    match std::env::var(&config.api_key_env) {
        Ok(key) if !key.is_empty() => {
            // Present; flag suspicious shapes but do not block anything.
            if !key.starts_with("sk-") {
                report.issues.push(
                    Issue::new(
                        IssueSeverity::Warning,
                        "credential",
                        format!(
                            "{} is set but does not look like an API key (expected 'sk-' prefix)",
                            config.api_key_env
                        ),
                    )
                    .with_remediation("verify the exported credential"),
                );
            }
        }
        _ => {
            report.issues.push(
                Issue::new(
                    IssueSeverity::Warning,
                    "credential",
                    format!("{} is not set", config.api_key_env),
                )
                .with_remediation(format!(
                    "export {}=... to enable live generation; until then every \
                     generation uses the built-in templates",
                    config.api_key_env
                )),
            );
        }
    }
}

/// Note when the config disables live generation entirely.
fn check_live_mode(config: &Config, report: &mut DoctorReport) {
    if !config.live {
        report.issues.push(
            Issue::new(
                IssueSeverity::Warning,
                "config",
                "live generation is disabled (live: false)",
            )
            .with_remediation(format!("set live: true in ./{}", CONFIG_FILE_NAME)),
        );
    }
}

/// Dry-run the template table: every template must fill cleanly with empty
/// parameters, and hello_world must satisfy the whole checklist.
fn check_template_table(report: &mut DoctorReport) {
    let empty = HashMap::new();

    for template in Template::all() {
        match template.fill(&empty) {
            Ok(code) => {
                if code.contains("{{") {
                    report.issues.push(Issue::new(
                        IssueSeverity::Error,
                        "template_table",
                        format!("template '{}' leaves unresolved markers", template.id),
                    ));
                }
            }
            Err(err) => {
                report.issues.push(Issue::new(
                    IssueSeverity::Error,
                    "template_table",
                    format!("template '{}' fails to render: {}", template.id, err),
                ));
            }
        }
    }

    if let Ok(code) = Template::get(TemplateId::HelloWorld).fill(&empty) {
        let report_score = score::score(&code);
        if !report_score.is_full() {
            report.issues.push(Issue::new(
                IssueSeverity::Error,
                "template_table",
                format!(
                    "hello_world scores {} instead of full marks",
                    report_score
                ),
            ));
        }
    }
}

fn print_summary(config: &Config) {
    println!("Readiness Report");
    println!("================");
    println!();
    println!("  Config file:   ./{}", CONFIG_FILE_NAME);
    println!("  Model:         {}", config.model);
    println!("  API base:      {}", config.api_base);
    println!("  Credential:    ${}", config.api_key_env);
    println!("  Live calls:    {}", if config.live { "enabled" } else { "disabled" });
    println!("  Call timeout:  {}s", config.timeout_secs);
    println!("  Templates:     {}", Template::all().len());
    println!();
}

fn print_report(report: &DoctorReport) {
    if !report.has_issues() {
        println!("No issues found. Everything is ready.");
        return;
    }

    for issue in &report.issues {
        println!("[{}] {}: {}", issue.severity, issue.category, issue.description);
        if let Some(remediation) = &issue.remediation {
            println!("  Fix: {}", remediation);
        }
        println!();
    }
}
