//! Command-line interface for bill lookups.

use clap::{Parser, Subcommand};

use crate::bill_id::{parse_bill_lookup, BillReference};
use crate::config::CongressConfig;
use crate::error::Result;
use crate::fetcher::CongressClient;

/// LawChat Congress - look up US bills on Congress.gov.
#[derive(Parser)]
#[command(name = "lawchat-congress")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch bill metadata and text, printed as JSON.
    ///
    /// Requires CONGRESS_API_KEY.
    Details {
        /// Bill identifier in type.number.congress form (e.g., hr.3076.117)
        bill_id: String,
    },

    /// Parse a `|`-separated list of bill identifiers.
    Parse {
        /// Raw lookup text (e.g., "hr.3076.117|s.1.118")
        text: String,
    },
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Details { bill_id } => details_command(&bill_id).await,
        Commands::Parse { text } => parse_command(&text),
    }
}

/// Execute the details command.
async fn details_command(bill_id: &str) -> Result<()> {
    // Validate input before loading config or making HTTP requests
    let bill = BillReference::parse(bill_id)?;

    let config = CongressConfig::from_env()?;
    let client = CongressClient::new(&config)?;
    let details = client.fetch_law_details(&bill).await?;

    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}

/// Execute the parse command.
fn parse_command(text: &str) -> Result<()> {
    let lookup = parse_bill_lookup(text)?;
    println!("{}", serde_json::to_string_pretty(&lookup)?);
    Ok(())
}
