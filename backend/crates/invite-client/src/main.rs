//! invite - command-line client for the invite server
//!
//! # Examples
//!
//! ```bash
//! # Request codes for a verified phone number
//! invite --token "$JWT" request-codes --phone 650-555-0100
//!
//! # Redeem a code
//! invite --token "$JWT" claim abc123
//!
//! # What would the site decide for this URL?
//! invite --token "$JWT" gate "https://thavma.club/?code=abc123"
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use invite_client::{AccessGate, Client, ClientResult, LandingUrl, Session};

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&cli.server, cli.token.as_deref());

    let result = match cli.command {
        Commands::RequestCodes { phone } => to_value(client.request_codes(&phone).await),
        Commands::Claim { code } => to_value(client.claim_code(&code).await),
        Commands::Access => to_value(client.check_access().await),
        Commands::Code { id } => to_value(client.code_available(&id).await),
        Commands::Me => to_value(client.current_user().await),
        Commands::Courses => to_value(client.list_courses().await),
        Commands::Feed { course, school } => {
            to_value(client.feed(course.as_deref(), school.as_deref()).await)
        }
        Commands::Gate { url } => match LandingUrl::parse(&url) {
            Ok(landing) => {
                let session = match cli.token.as_deref() {
                    Some(token) => Session::signed_in(token),
                    None => Session::signed_out(),
                };
                let mut gate = AccessGate::new(client.clone(), landing);
                let access = gate.derive(&session).await;
                Ok(json!({ "access": access.as_option(), "state": access.as_str() }))
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn to_value<T: Serialize>(result: ClientResult<T>) -> ClientResult<Value> {
    Ok(serde_json::to_value(result?)?)
}
