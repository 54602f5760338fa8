//! Run the currency assistant, including the local conversion tool.
//!
//! Run with: cargo run -p openai-brain --example currency
//! Or: cargo run -p openai-brain --example currency -- "How much is 250 GBP in CAD?"
//!
//! Make sure to set environment variables in .env:
//!   OPENAI_API_KEY - OpenAI API key for authentication

use std::env;
use std::sync::Arc;

use agent_tools::{default_registry, RegistryToolExecutor};
use openai_brain::{ConversationHistory, HistoryItem, QaBrain, ResponsesClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let message = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "How much is 100 USD in EUR?".to_string()
    };

    let brain = QaBrain::new(
        Arc::new(ResponsesClient::from_env()?),
        Arc::new(RegistryToolExecutor::new(default_registry())),
    );

    println!("Asking: \"{}\"\n", message);
    let reply = brain
        .currency_assistant(&message, &ConversationHistory::new())
        .await?;

    println!("=== Answer ===");
    println!("{}", reply.answer);
    println!("==============\n");

    println!("History ({} items):", reply.history.len());
    for item in reply.history.items() {
        match item {
            HistoryItem::Message { role, content } => println!("  {:?}: {}", role, content),
            HistoryItem::FunctionCall { name, arguments, .. } => {
                println!("  call {}({})", name, arguments)
            }
            HistoryItem::FunctionCallOutput { output, .. } => println!("  output {}", output),
        }
    }

    Ok(())
}
