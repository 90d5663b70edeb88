//! Chatbot CLI - one-shot prompt against the `OpenAI` Chat Completions API.

#![allow(clippy::print_stdout, clippy::print_stderr)] // CLI program intentionally uses stdout/stderr

use chatbot::completion::GPT_4_1_NANO;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Chatbot - send one prompt to an OpenAI chat model and print the reply
#[derive(Parser)]
#[command(name = "chatbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The prompt to send to the model
    prompt: Option<String>,

    /// Model to use
    #[arg(short, long, env = "CHATBOT_MODEL", default_value = GPT_4_1_NANO)]
    model: String,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let Some(prompt) = cli.prompt else {
        eprintln!("Error: No prompt provided to chatbot.");
        return ExitCode::FAILURE;
    };

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    let reply = rt.block_on(chatbot::chat::get_response_as(&cli.model, &prompt));

    // Failures were already reported on stderr; stdout carries reply text only.
    if !reply.is_empty() {
        println!("{reply}");
    }

    ExitCode::SUCCESS
}

/// Initialize logging with the given verbosity level.
///
/// Diagnostics go to stderr so stdout stays reserved for the reply.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chatbot={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}
