mod api_client;
mod cli;
mod config;
mod controller;
mod errors;
mod input;
mod models;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::{HttpMatcherApi, MatcherApi};
use crate::cli::{Args, Command, FormArgs};
use crate::config::Config;
use crate::controller::FormController;

#[derive(Debug, Clone, Copy)]
enum Action {
    Match,
    CoverLetter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?
        .with_overrides(args.api_url.as_deref(), args.timeout_secs)?;

    // Logs go to stderr; stdout carries the rendered view.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("ats_client={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting ATS client v{}", env!("CARGO_PKG_VERSION"));

    let api = HttpMatcherApi::new(config.api_url.clone(), config.request_timeout)
        .context("Failed to build HTTP client")?;
    info!(
        "Matcher API: {} (timeout: {:?})",
        api.base_url(),
        config.request_timeout
    );

    match args.command {
        Command::Ping => ping(&api).await,
        Command::Match(form) => run_form(api, &form, &[Action::Match], args.json).await,
        Command::CoverLetter(form) => {
            run_form(api, &form, &[Action::CoverLetter], args.json).await
        }
        Command::Analyze(form) => {
            run_form(api, &form, &[Action::Match, Action::CoverLetter], args.json).await
        }
    }
}

async fn ping(api: &HttpMatcherApi) -> Result<()> {
    let health = api
        .health()
        .await
        .with_context(|| format!("Backend at {} is not reachable", api.base_url()))?;
    println!("{}", health.message);
    Ok(())
}

/// Fills the form, runs each action in order, then prints the view.
/// Fails after printing if any action of this run failed; the view and the
/// JSON both name the failed action.
async fn run_form(
    api: HttpMatcherApi,
    form: &FormArgs,
    actions: &[Action],
    json: bool,
) -> Result<()> {
    input::check_sources(&form.job, &form.resume)?;
    let job_description = input::read_field(&form.job)?;
    let mut resume = input::read_field(&form.resume)?;
    if form.latex {
        resume = input::strip_latex(&resume);
    }

    let controller = FormController::new(Arc::new(api));
    controller.set_job_description(job_description).await;
    controller.set_resume(resume).await;

    for action in actions {
        match action {
            Action::Match => controller.submit_match().await,
            Action::CoverLetter => controller.submit_cover_letter().await,
        }
    }

    // Each action runs once on a fresh controller, so the per-action error
    // fields are exactly this run's failures.
    let state = controller.snapshot().await;
    let failed = state.failed_actions();
    if failed > 0 {
        warn!("{failed} of {} action(s) did not complete", actions.len());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render::render_session(&state));
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} request(s) failed", actions.len());
    }
    Ok(())
}
