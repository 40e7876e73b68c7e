//! validate-agents: runs Researcher → Writer → Editor once, printing each result as its
//! stage finishes.

use agentry::validate::{Validation, VALIDATION_TONE, VALIDATION_TOPIC};
use cli::{logging, APP_NAME};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_and_apply(APP_NAME, None).ok();
    logging::init("warn")?;

    let validation = Validation::new()?;

    println!("--- Testing Researcher ---");
    println!("Topic: {}", VALIDATION_TOPIC);
    let research = validation.research(None).await?;
    println!("{}", serde_json::to_string_pretty(&research)?);

    println!("\n--- Testing Writer ---");
    println!("Tone: {}", VALIDATION_TONE);
    let draft = validation.write(&research).await?;
    println!("{}", serde_json::to_string_pretty(&draft)?);

    println!("\n--- Testing Editor ---");
    let edited = validation.edit(&draft).await?;
    println!("{}", serde_json::to_string_pretty(&edited)?);

    tracing::info!("validation complete");
    println!("\nSUCCESS: All agents executed correctly.");
    Ok(())
}
