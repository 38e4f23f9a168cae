//! Telegram bot.
//!
//! The bot is a thin front: every accepted message is parsed and appended
//! to the ledger store, every query re-reads it. Only private chats reach
//! the handlers; group messages never touch the ledger.

use engine::Ledger;
use sheets::SheetsClient;
use teloxide::prelude::*;

mod commands;
mod handlers;

#[derive(Clone)]
pub struct ConfigParameters {
    allowed_users: Option<Vec<UserId>>,
    ledger: Ledger<SheetsClient>,
}

pub struct Bot {
    token: String,
    allowed_users: Option<Vec<UserId>>,
    ledger: Ledger<SheetsClient>,
}

impl Bot {
    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    pub async fn run(&self) {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);
        let parameters = ConfigParameters {
            allowed_users: self.allowed_users.clone(),
            ledger: self.ledger.clone(),
        };

        // One guard for the private-chat rule, one for the allow-list;
        // both apply before any routing.
        let handler = Update::filter_message()
            .filter(|msg: Message| msg.chat.is_private())
            .filter(|cfg: ConfigParameters, msg: Message| {
                msg.from
                    .as_ref()
                    .map(|user| match &cfg.allowed_users {
                        None => true,
                        Some(ids) => ids.contains(&user.id),
                    })
                    .unwrap_or_default()
            })
            .branch(
                dptree::entry()
                    .filter_command::<commands::Command>()
                    .endpoint(handlers::handle_command),
            )
            .branch(dptree::endpoint(handlers::handle_entry));

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![parameters])
            .default_handler(|upd| async move {
                tracing::warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[derive(Default)]
pub struct BotBuilder {
    token: String,
    allowed_users: Option<Vec<UserId>>,
    ledger: Option<Ledger<SheetsClient>>,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    pub fn allowed_users(mut self, allowed_users: Vec<u64>) -> BotBuilder {
        if !allowed_users.is_empty() {
            self.allowed_users = Some(allowed_users.into_iter().map(UserId).collect());
        }
        self
    }

    pub fn ledger(mut self, ledger: Ledger<SheetsClient>) -> BotBuilder {
        self.ledger = Some(ledger);
        self
    }

    pub fn build(self) -> Result<Bot, String> {
        tracing::info!("Initializing telegram bot...");
        let ledger = self.ledger.ok_or("a ledger store is required")?;
        Ok(Bot {
            token: self.token,
            allowed_users: self.allowed_users,
            ledger,
        })
    }
}
