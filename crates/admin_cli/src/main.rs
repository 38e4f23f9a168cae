use std::error::Error;

use clap::{Parser, Subcommand};
use engine::{HEADER, LedgerStore};
use sheets::SheetsClient;

#[derive(Parser, Debug)]
#[command(name = "khata_admin")]
#[command(about = "Admin utilities for the khata ledger sheet (bootstrap/diagnostics)")]
struct Cli {
    /// Spreadsheet id of the ledger document.
    #[arg(long, env = "KHATA_SPREADSHEET_ID")]
    spreadsheet_id: String,

    /// OAuth bearer token for the Sheets API.
    #[arg(long, env = "KHATA_SHEETS_TOKEN", hide_env_values = true)]
    token: String,

    /// Sheet tab holding the ledger.
    #[arg(long, default_value = "Expenses")]
    tab: String,

    /// Override the Sheets API base url.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the header row into an empty ledger tab.
    Init,
    /// Probe the ledger and report how many expenses it holds.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let store = SheetsClient::new(
        &cli.spreadsheet_id,
        &cli.token,
        &cli.tab,
        cli.base_url.as_deref(),
    )?;

    match cli.command {
        Command::Init => {
            if store.header_present().await? {
                eprintln!("header already present: nothing to do");
                std::process::exit(1);
            }
            store.write_header().await?;
            println!("wrote header row: {}", HEADER.join(", "));
        }
        Command::Status => {
            store.probe().await?;
            let rows = store.read_rows().await?;
            println!("ledger reachable: {} expense(s) recorded", rows.len());
        }
    }

    Ok(())
}
