mod display;
mod shell;

use anyhow::Result;
use clap::{Parser, Subcommand};
use intelliquery_client::{
    submit_query, upload_document, ApiClient, ClientConfig, ClientState, ConfigOverrides,
    ResultsPanel, SessionId,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "intelliquery", version, about = "Ask questions about policy documents")]
struct Cli {
    /// Backend base URL. Overrides INTELLIQUERY_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds. Overrides INTELLIQUERY_TIMEOUT_SECS.
    #[arg(long, global = true)]
    timeout_secs: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive prompt (default).
    Shell,
    /// Check that the backend is up.
    Health,
    /// Upload a document and print the new session id.
    Upload { file: PathBuf },
    /// Ask one question, either against an existing session or after
    /// uploading a file.
    Ask {
        #[arg(long, conflicts_with = "file")]
        session: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

fn overrides(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        api_url: cli.api_url.clone(),
        timeout_secs: cli.timeout_secs.clone(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let client = ApiClient::new(ClientConfig::from_env_with(&overrides(&cli))?)?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => shell::run(client, ClientState::new()).await?,
        Command::Health => {
            let status = client.health().await?;
            println!("{}", display::sanitize(&status));
        }
        Command::Upload { file } => {
            let mut state = ClientState::new();
            upload_document(&client, &mut state, Some(file.as_path())).await?;
            display::write_status(&mut io::stdout(), &state)?;
            match state.session() {
                Some(session) => println!("session: {}", session),
                None => std::process::exit(1),
            }
        }
        Command::Ask {
            session,
            file,
            question,
        } => {
            let mut state = match session {
                Some(id) => ClientState::with_session(SessionId::from(id)),
                None => ClientState::new(),
            };
            if let Some(file) = file {
                upload_document(&client, &mut state, Some(file.as_path())).await?;
                display::write_status(&mut io::stdout(), &state)?;
                if state.session().is_none() {
                    std::process::exit(1);
                }
            }

            submit_query(&client, &mut state, &question.join(" ")).await?;
            display::write_results(&mut io::stdout(), &state.results)?;
            if matches!(state.results, ResultsPanel::Error(_)) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
