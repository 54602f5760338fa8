//! Exercise the built-in tools in the registry.
//!
//! Run with: cargo run -p agent-tools --example test_tools

use agent_tools::default_registry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agent_tools=debug".parse()?),
        )
        .init();

    println!("=== Agent Tools Crate Test ===\n");

    let registry = default_registry();

    println!("Registered tools:");
    for def in registry.definitions() {
        println!("  - {}: {}", def.name, def.description);
    }
    println!();

    let cases = [
        r#"{"amount": 100, "from_currency": "USD", "to_currency": "EUR"}"#,
        r#"{"amount": 250.75, "from_currency": "GBP", "to_currency": "CAD"}"#,
        r#"{"amount": 100, "from_currency": "USD", "to_currency": "JPY"}"#,
    ];

    for args in cases {
        println!("convert_currency {}", args);
        match registry.execute_json("convert_currency", args).await {
            Ok(output) => println!("  -> {}", output.content),
            Err(e) => println!("  -> error: {}", e),
        }
    }

    Ok(())
}
