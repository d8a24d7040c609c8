use crate::display;
use anyhow::Result;
use intelliquery_client::state::UPLOADING_STATUS;
use intelliquery_client::validation::validate_query;
use intelliquery_client::{submit_query, upload_document, ApiClient, ClientState};
use std::io::{self, Write};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  upload <file>     upload a document and start a new session
  ask <question>    ask about the uploaded document
                    (after an upload, plain text is asked too)
  session           show the current session id
  health            check the backend
  help              show this help
  quit              leave";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Upload(Option<&'a str>),
    Ask(&'a str),
    Session,
    Health,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse(line: &str) -> Command<'_> {
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "upload" => Command::Upload(Some(rest).filter(|r| !r.is_empty())),
        "ask" => Command::Ask(rest),
        "session" => Command::Session,
        "health" => Command::Health,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(word),
    }
}

/// With the query input focused, any line that is not a command is taken
/// as a question.
fn route(line: &str, query_focused: bool) -> Command<'_> {
    match parse(line) {
        Command::Unknown(_) if query_focused => Command::Ask(line.trim()),
        command => command,
    }
}

/// Interactive loop: one command per line, each awaited before the next is
/// read.
pub async fn run(client: ApiClient, mut state: ClientState) -> Result<()> {
    println!("IntelliQuery client: backend {}", client.config().base_url);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", if state.query_focused { "ask>" } else { ">" });
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match route(line, state.query_focused) {
            Command::Upload(file) => {
                if file.is_some() {
                    println!("{}", UPLOADING_STATUS);
                }
                // A missing file is already reflected in the status line.
                let _ = upload_document(&client, &mut state, file.map(Path::new)).await;
                display::write_status(&mut io::stdout(), &state)?;
            }
            Command::Ask(question) => ask(&client, &mut state, question).await?,
            Command::Session => match state.session() {
                Some(session) => println!("{}", session),
                None => println!("No session yet; upload a document first."),
            },
            Command::Health => match client.health().await {
                Ok(status) => println!("{}", display::sanitize(&status)),
                Err(err) => println!("{}", err.display_message()),
            },
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(word) => println!("Unknown command {:?}. Type `help`.", word),
        }
    }

    Ok(())
}

async fn ask(client: &ApiClient, state: &mut ClientState, question: &str) -> Result<()> {
    if validate_query(question, state.session()).is_ok() {
        println!("Analyzing...");
    }
    if let Err(precondition) = submit_query(client, state, question).await {
        eprintln!("! {}", precondition);
        return Ok(());
    }

    display::write_results(&mut io::stdout(), &state.results)?;
    Ok(())
}
