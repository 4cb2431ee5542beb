use crate::cli::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use jira_createmeta::{MetaIssueType, MetaProject};
use serde::Serialize;

/// Everything printed for one invocation
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub project: &'a MetaProject,
    pub issue_type: &'a MetaIssueType,
    /// Outcome of the field check, when fields were given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

pub fn output_report(report: &Report<'_>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => println!("{}", render_text(report)?),
    }
    Ok(())
}

fn render_text(report: &Report<'_>) -> Result<String> {
    let project = report.project;
    let meta = report.issue_type;

    let mut lines = vec![format!(
        "{} - {}",
        project.key.cyan().bold(),
        project.name.white().bold()
    )];

    let names: Vec<&str> = project
        .issue_types
        .iter()
        .map(|issue_type| issue_type.name.as_str())
        .collect();
    lines.push(format!("  {}: {}", "Issue types".dimmed(), names.join(", ")));
    lines.push(String::new());

    let kind = if meta.subtask { " [subtask]" } else { "" };
    lines.push(format!("{} ({}){}", meta.name.bold(), meta.id, kind));

    let mandatory = meta.mandatory_fields()?;
    for (name, key) in meta.all_fields()? {
        let required = mandatory.get(&name) == Some(&key);
        let marker = if required { "*".red().bold() } else { " ".normal() };
        lines.push(format!("  {} {} ({})", marker, name, key.dimmed()));
    }

    match report.complete {
        Some(true) => {
            lines.push(String::new());
            lines.push(format!("{}", "Fields are complete and available".green()));
        }
        Some(false) => {
            lines.push(String::new());
            lines.push(format!("{}", "Fields do not match the issue type".red()));
        }
        None => {}
    }

    Ok(lines.join("\n"))
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}
