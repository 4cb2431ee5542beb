mod cli;
mod color;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use jira_createmeta::{JiraClient, QueryOptions};
use output::{output_error, output_report, Report};
use std::collections::BTreeMap;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.url.clone(), cli.username.clone(), cli.password.clone());
    let credentials = config.credentials()?;

    let client = JiraClient::new(
        &credentials.url,
        &credentials.username,
        &credentials.password,
    );
    let service = client.create_meta();
    let options = QueryOptions {
        expand: cli.expand.clone(),
        ..Default::default()
    };

    let project = service.get_create_meta_with_options(&cli.project, &options)?;
    let issue_type = project.issue_type_with_name(&cli.issue_type)?;
    let meta = service.get_issue_type_meta_with_options(&cli.project, issue_type, &options)?;
    tracing::debug!(fields = meta.fields.len(), "resolved issue type {}", meta.name);

    let check = if cli.fields.is_empty() {
        None
    } else {
        let all = meta.all_fields()?;
        let candidate: BTreeMap<String, String> = cli
            .fields
            .iter()
            .map(|name| (name.clone(), all.get(name).cloned().unwrap_or_default()))
            .collect();
        Some(meta.check_complete_and_available(&candidate))
    };

    let report = Report {
        project: &project,
        issue_type: &meta,
        complete: check.as_ref().map(|result| result.is_ok()),
    };
    output_report(&report, cli.format)?;

    if let Some(result) = check {
        result?;
    }
    Ok(())
}
