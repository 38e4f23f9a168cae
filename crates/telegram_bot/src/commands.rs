//! Command structs

use teloxide::utils::command::BotCommands;

/// Commands accepted in a private chat.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Expense tracker commands:")]
pub enum Command {
    #[command(description = "Show the total recorded expenses.")]
    Total,
    #[command(description = "Show today's expenses.")]
    Today,
    #[command(description = "Show this help message.")]
    Help,
    /// Sent automatically by Telegram clients on first contact.
    #[command(hide)]
    Start,
}
