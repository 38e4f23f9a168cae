use engine::Ledger;
use sheets::SheetsClient;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "khata={level},telegram_bot={level},sheets={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let store = SheetsClient::new(
        &settings.sheets.spreadsheet_id,
        &settings.sheets.token,
        &settings.sheets.tab,
        settings.sheets.base_url.as_deref(),
    )?;

    // Connect-or-fail: a ledger we cannot read at startup is a
    // misconfiguration, not something to limp along with.
    if let Err(err) = store.probe().await {
        tracing::error!("failed to reach the ledger sheet: {err}");
        return Err(err.into());
    }
    tracing::info!("Connected to the ledger sheet");

    let bot = telegram_bot::Bot::builder()
        .token(&settings.telegram.token)
        .allowed_users(settings.telegram.allowed_users)
        .ledger(Ledger::new(store))
        .build()?;

    bot.run().await;

    Ok(())
}
