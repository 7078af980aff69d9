use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use std::process;

use mapchat::api::OpenAiClient;
use mapchat::cli::Args;
use mapchat::config::Config;
use mapchat::error::Result;
use mapchat::orchestrator::Orchestrator;
use mapchat::session::ChatSession;
use mapchat::tools::{PlacesClient, ToolRegistry};
use mapchat::ui;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Config errors are fatal before any network call is attempted.
    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let llm = match OpenAiClient::new(&config) {
        Ok(llm) => llm,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };
    let places = match PlacesClient::new(&config) {
        Ok(places) => places,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let registry = ToolRegistry::new(places, config.search.clone());
    let orchestrator = Orchestrator::new(
        Box::new(llm),
        Box::new(registry),
        config.max_tool_rounds,
        config.verbose,
    );
    let mut session = ChatSession::new(orchestrator, &config.dated_system_prompt());

    if config.verbose {
        eprintln!(
            "{}",
            format!("[session] id {} model {}", session.id(), config.model).dimmed()
        );
    }

    if !args.query.is_empty() {
        let question = args.query.join(" ");
        println!("{} {}", "You:".bold(), question);
        if run_one_turn(&mut session, &question).await.is_err() {
            process::exit(1);
        }
        return;
    }

    println!(
        "{}",
        "Chatbot initialized. Type 'exit' to end the conversation.".cyan()
    );

    let stdin = io::stdin();
    loop {
        print!("{} ", "You:".bold());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        // A turn failure leaves the conversation intact; the user can
        // simply ask again.
        let _ = run_one_turn(&mut session, input).await;
    }
}

async fn run_one_turn(session: &mut ChatSession, text: &str) -> Result<()> {
    ui::display_thinking();
    match session.submit(text).await {
        Ok(conversation) => {
            ui::display_answer(conversation.last_answer().unwrap_or(""));
            ui::display_markers(&conversation.markers());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            Err(e)
        }
    }
}
