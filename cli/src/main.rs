//! CLI entrypoint for regform
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use regform_application::{
    NoFormView, SubmissionOutcome, SubmissionParams, SubmitRegistrationUseCase,
    ToggleOtherExpertiseUseCase,
};
use regform_domain::{ConfigIssue, Endpoint, RegistrationPayload, Severity, ValidationError};
use regform_infrastructure::{ConfigLoader, FileConfig, HttpWebhookGateway, LocalAttachmentInspector};
use regform_presentation::{
    Cli, ConsoleFormView, InteractivePrompt, OutputFormat, PayloadFormatter,
};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_sources() {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting regform");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    let params = submission_params(&cli, &file_config)?;
    debug!(
        "Endpoint {} ({} mode, timeout {:?})",
        params.endpoint, params.delivery_mode, params.timeout
    );

    // === Dependency Injection ===
    let gateway = Arc::new(HttpWebhookGateway::new(&params)?);
    let use_case = SubmitRegistrationUseCase::new(gateway).with_params(&params);
    let view = ConsoleFormView::new()
        .with_progress(!cli.quiet && file_config.output.show_progress);

    // === Form ===
    let mut form = cli.to_form();
    let mut cv_path = cli.cv.clone();

    if cli.interactive {
        let stdin = io::stdin();
        let mut prompt =
            InteractivePrompt::new(stdin.lock(), io::stdout(), file_config.to_form_choices());
        cv_path = prompt.fill(&mut form, cv_path, &view)?;
    } else {
        ToggleOtherExpertiseUseCase::new().execute(&mut form, &NoFormView);
    }

    if let Some(path) = &cv_path {
        let attachment = LocalAttachmentInspector::new()
            .inspect(path)
            .with_context(|| format!("Cannot attach CV {}", path.display()))?;
        form.cv = Some(attachment);
    }

    // === Dry run ===
    if cli.dry_run {
        return Ok(match use_case.check(&form, &view) {
            Ok(payload) => {
                println!("{}", format_payload(cli.output, &payload));
                ExitCode::SUCCESS
            }
            Err(e) => rejected(&e),
        });
    }

    // === Submit ===
    let outcome = use_case.execute(&mut form, &view).await?;

    let code = match outcome {
        SubmissionOutcome::Submitted(payload) => {
            if cli.output == OutputFormat::Json {
                println!("{}", PayloadFormatter::format_json(&payload));
            }
            if cli.interactive {
                let stdin = io::stdin();
                let mut prompt = InteractivePrompt::new(
                    stdin.lock(),
                    io::stdout(),
                    file_config.to_form_choices(),
                );
                // A closed stdin just skips the acknowledgement.
                if prompt.wait_for_dismiss().is_ok() {
                    view.dismiss_success();
                }
            }
            ExitCode::SUCCESS
        }
        SubmissionOutcome::Rejected(e) => rejected(&e),
        SubmissionOutcome::Failed(e) => {
            debug!("Delivery failed: {:?}", e);
            ExitCode::FAILURE
        }
    };

    Ok(code)
}

/// Merge file config with CLI overrides, logging warnings and failing on errors.
fn submission_params(cli: &Cli, file_config: &FileConfig) -> Result<SubmissionParams> {
    let (mut params, issues) = match file_config.to_submission_params() {
        Ok(result) => result,
        Err(e) => {
            log_issues(&e.issues);
            return Err(e.into());
        }
    };
    log_issues(&issues);

    if let Some(url) = &cli.endpoint {
        let endpoint = Endpoint::try_new(url.as_str()).context("Invalid --endpoint")?;
        params = params.with_endpoint(endpoint);
    }

    Ok(params)
}

fn log_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => tracing::error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
}

fn format_payload(format: OutputFormat, payload: &RegistrationPayload) -> String {
    match format {
        OutputFormat::Json => PayloadFormatter::format_json(payload),
        OutputFormat::Text => PayloadFormatter::format_text(payload),
    }
}

fn rejected(error: &ValidationError) -> ExitCode {
    debug!("Rejected: {}", error);
    ExitCode::FAILURE
}
