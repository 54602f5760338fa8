//! Ask a web-search-enabled question through the Responses API.
//!
//! Run with: cargo run -p openai-brain --example ask
//! Or with a custom question: cargo run -p openai-brain --example ask -- "Your question here"
//!
//! Make sure to set environment variables in .env:
//!   OPENAI_API_KEY - OpenAI API key for authentication

use std::env;
use std::sync::Arc;

use agent_tools::{default_registry, RegistryToolExecutor};
use openai_brain::{ModelBackend, QaBrain, ResponsesClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let question = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "What is the tallest building in the world?".to_string()
    };

    println!("Initializing ResponsesClient...");
    let client = ResponsesClient::from_env()?;

    println!("Backend: {}", client.name());
    println!("API URL: {}", client.config().api_url);
    println!("Model: {}", client.config().model);
    println!();

    let brain = QaBrain::new(
        Arc::new(client),
        Arc::new(RegistryToolExecutor::new(default_registry())),
    );

    println!("Asking: \"{}\"", question);
    println!("Waiting for response...\n");

    let answer = brain.answer(&question).await?;

    println!("=== Answer ===");
    println!("{}", answer);
    println!("==============");

    Ok(())
}
