// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod input;
mod render;

use clap::Parser;
use input::{HELP, Input, InputError, parse_input};
use render::{render_categories, render_session};
use signup::Session;
use signup_analytics::{AnalyticsSink, DEFAULT_DATA_LAYER_CAPACITY, DataLayer, FanOut, TracingSink};
use signup_domain::PreferencesUpdate;
use signup_runtime::{Wizard, WizardConfig, WizardError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Newsletter signup wizard driven from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Simulated backend latency in milliseconds. Verification takes 1.5x as long.
    #[arg(short, long)]
    latency_ms: Option<u64>,

    /// Interval between resend countdown ticks, in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    tick_ms: u64,

    /// Print snapshots as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Print the recorded analytics events as JSON on exit
    #[arg(long)]
    dump_analytics: bool,
}

impl Args {
    fn config(&self) -> WizardConfig {
        let config: WizardConfig = self.latency_ms.map_or_else(WizardConfig::default, |ms| {
            WizardConfig::default().with_uniform_latency(Duration::from_millis(ms))
        });
        config.with_countdown_tick(Duration::from_millis(self.tick_ms.max(1)))
    }
}

/// Errors surfaced to the terminal for a single line of input.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error("Failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the loop should do after a line was handled.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Print(String),
    Quit,
}

fn render(session: &Session, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string(session)?)
    } else {
        Ok(render_session(session))
    }
}

/// Runs one parsed command against the wizard and renders the result.
async fn execute(wizard: &Wizard, input: Input, json: bool) -> Result<Outcome, CliError> {
    match input {
        Input::Email(email) => wizard.submit_email(email)?,
        Input::Frequency(frequency) => {
            wizard.update_preferences(PreferencesUpdate::frequency(frequency))?;
        }
        Input::Notify { channel, enabled } => {
            wizard.update_preferences(PreferencesUpdate::notifications(channel.update(enabled)))?;
        }
        Input::Toggle(category) => wizard.toggle_category(&category)?,
        Input::Categories => return Ok(Outcome::Print(render_categories(&wizard.snapshot()))),
        Input::Next => wizard.submit_preferences()?,
        Input::Back => wizard.go_back_to_email()?,
        Input::Code(digits) => wizard.enter_verification_code(digits)?,
        Input::Verify(code) => {
            let code: String = code.unwrap_or_else(|| wizard.snapshot().verification_code);
            wizard.submit_verification_code(code)?;
        }
        Input::Resend => wizard.resend_verification_code()?,
        Input::Restart => wizard.restart()?,
        Input::Show => {}
        Input::Help => return Ok(Outcome::Print(HELP.to_string())),
        Input::Quit => return Ok(Outcome::Quit),
    }

    let session: Session = wizard.settled().await;
    Ok(Outcome::Print(render(&session, json)?))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout carries only snapshots
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: WizardConfig = args.config();
    info!(?config, "Starting signup wizard");

    let data_layer: Arc<DataLayer> = Arc::new(DataLayer::new(DEFAULT_DATA_LAYER_CAPACITY));
    let sink: Arc<dyn AnalyticsSink> = Arc::new(
        FanOut::new()
            .with(Arc::new(TracingSink))
            .with(data_layer.clone()),
    );
    let wizard: Wizard = Wizard::new(config, sink);

    println!("{}", render(&wizard.snapshot(), args.json)?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let outcome: Result<Outcome, CliError> = match parse_input(&line) {
            Ok(input) => execute(&wizard, input, args.json).await,
            Err(err) => Err(err.into()),
        };

        match outcome {
            Ok(Outcome::Print(text)) => println!("{}", text.trim_end()),
            Ok(Outcome::Quit) => break,
            Err(err) => {
                debug!(line = %line, error = %err, "Input rejected");
                eprintln!("error: {err}");
            }
        }
    }

    wizard.dispose();

    if args.dump_analytics {
        println!("{}", data_layer.to_json()?);
    }

    Ok(())
}
