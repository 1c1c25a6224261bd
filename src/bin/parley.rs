//! Interactive terminal client for the parley chat service.
//!
//! ```text
//! parley-cli --server http://127.0.0.1:8000
//! ```
//!
//! Pick a conversation (or start a new one), then type messages; `/back`
//! returns to the thread list.

use anyhow::Context;
use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use parley::client::{ApiClient, ChatState, TranscriptEntry};
use parley::models::{Sender, ThreadSummary};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "parley",
    version,
    about = "Chat with the parley server from your terminal"
)]
struct Cli {
    /// Base URL of the parley server
    #[arg(long, env = "PARLEY_SERVER", default_value = "http://127.0.0.1:8000")]
    server: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let api = ApiClient::new(&cli.server);
    let mut state = ChatState::new();

    loop {
        let threads = api
            .list_threads()
            .await
            .context("Could not reach the parley server")?;

        let Some(thread_id) = pick_thread(&api, &threads).await? else {
            return Ok(());
        };

        let transcript = match api.list_messages(&thread_id).await {
            Ok(messages) => messages.iter().map(TranscriptEntry::from).collect(),
            Err(err) => {
                eprintln!("Could not load the conversation: {err}");
                continue;
            }
        };
        state.select_thread(thread_id, transcript);
        print_transcript(state.transcript());

        chat_loop(&api, &mut state).await;
    }
}

async fn pick_thread(
    api: &ApiClient,
    threads: &[ThreadSummary],
) -> anyhow::Result<Option<String>> {
    let mut items: Vec<String> = threads
        .iter()
        .map(|thread| {
            let preview = thread.last_message.as_deref().unwrap_or("(no messages yet)");
            format!(
                "{}  {}",
                thread.created_at.format("%Y-%m-%d %H:%M"),
                truncate(preview, 48)
            )
        })
        .collect();
    items.push("Start a new chat".to_string());
    items.push("Quit".to_string());

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Pick a conversation")
        .items(&items)
        .default(0)
        .interact()?;

    if choice == items.len() - 1 {
        return Ok(None);
    }
    if choice == items.len() - 2 {
        let id = api
            .create_thread()
            .await
            .context("Could not create a new chat")?;
        return Ok(Some(id));
    }
    Ok(Some(threads[choice].id.clone()))
}

async fn chat_loop(api: &ApiClient, state: &mut ChatState) {
    println!("Type a message, or /back to return to the thread list.");
    loop {
        let line: String = match Input::with_theme(&ColorfulTheme::default())
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            Err(_) => return,
        };
        if line.trim() == "/back" {
            return;
        }
        let Some(outbound) = state.begin_send(&line) else {
            continue;
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} waiting for the model...")
                .expect("spinner template"),
        );
        spinner.enable_steady_tick(Duration::from_millis(120));

        match api.send_message(&outbound).await {
            Ok(response) => {
                spinner.finish_and_clear();
                let user = TranscriptEntry {
                    content: response.user_message.content,
                    sender: response.user_message.sender,
                };
                let ai = TranscriptEntry {
                    content: response.ai_message.content,
                    sender: response.ai_message.sender,
                };
                println!("ai> {}\n", ai.content);
                state.complete_send(user, ai);
            }
            Err(err) => {
                spinner.finish_and_clear();
                eprintln!("Message failed, nothing was appended: {err}");
                state.fail_send();
            }
        }
    }
}

fn print_transcript(entries: &[TranscriptEntry]) {
    for entry in entries {
        let who = match entry.sender {
            Sender::User => "you",
            Sender::Ai => "ai",
        };
        println!("{who}> {}", entry.content);
    }
    if !entries.is_empty() {
        println!();
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
