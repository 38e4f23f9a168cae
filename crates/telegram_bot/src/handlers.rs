use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Asia::Kolkata;
use engine::{DaySummary, ExpenseRecord, LedgerError, ParseError};
use teloxide::{prelude::*, types::ReactionType};

use crate::{ConfigParameters, commands::Command};

pub(crate) async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    cfg: ConfigParameters,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    match cmd {
        Command::Help | Command::Start => {
            bot.send_message(chat_id, help_text()).await?;
        }
        Command::Total => {
            let reply = match cfg.ledger.total().await {
                Ok(Some(total)) => format!("Total expenses: {total}"),
                Ok(None) => "No expenses recorded yet!".to_string(),
                Err(err) => user_message_for_error(&err),
            };
            bot.send_message(chat_id, reply).await?;
        }
        Command::Today => {
            let reply = match cfg.ledger.today(today_kolkata()).await {
                Ok(summary) => today_reply(&summary),
                Err(err) => user_message_for_error(&err),
            };
            bot.send_message(chat_id, reply).await?;
        }
    }

    Ok(())
}

/// Default path: any non-command private message is an expense entry.
pub(crate) async fn handle_entry(
    bot: Bot,
    msg: Message,
    cfg: ConfigParameters,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // A leading slash marks a command; unrecognized ones are not entries.
    if text.starts_with('/') {
        return Ok(());
    }

    match cfg.ledger.record(text, now_kolkata()).await {
        Ok(record) => {
            // Reaction is best-effort; the confirmation text is the contract.
            let _ = bot
                .set_message_reaction(msg.chat.id, msg.id)
                .reaction(vec![ReactionType::Emoji {
                    emoji: "✅".to_string(),
                }])
                .await;
            bot.send_message(msg.chat.id, confirmation(&record)).await?;
        }
        Err(err) => {
            bot.send_message(msg.chat.id, user_message_for_error(&err))
                .await?;
        }
    }

    Ok(())
}

fn confirmation(record: &ExpenseRecord) -> String {
    let mut reply = format!("Expense tracked: {} for {}", record.amount, record.item);
    if !record.place.is_empty() {
        reply.push_str(" at ");
        reply.push_str(&record.place);
    }
    reply
}

fn today_reply(summary: &DaySummary) -> String {
    if summary.ledger_empty {
        return "No expenses recorded yet!".to_string();
    }
    if summary.entries.is_empty() {
        return "No expenses recorded today!".to_string();
    }

    let mut lines = vec!["Today's expenses:".to_string()];
    for entry in &summary.entries {
        let place = if entry.place.is_empty() {
            "N/A"
        } else {
            entry.place.as_str()
        };
        lines.push(format!("{} - {} ({place})", entry.amount, entry.item));
    }
    lines.push(String::new());
    lines.push(format!("Total: {}", summary.total));
    lines.join("\n")
}

fn user_message_for_error(err: &LedgerError) -> String {
    match err {
        LedgerError::Parse(ParseError::InvalidFormat) => {
            "❌ Invalid format. Please use: `amount, item` or `amount, item, place`".to_string()
        }
        LedgerError::Parse(ParseError::InvalidAmount) => {
            "❌ Invalid amount. The first value must be a number.".to_string()
        }
        err => {
            tracing::warn!("ledger operation failed: {err}");
            format!("❌ Error: {err}")
        }
    }
}

fn help_text() -> &'static str {
    "To track an expense, message me in one of these formats:\n\n\
     amount, item\n\
     amount, item, place\n\n\
     Examples:\n\
     150, Lunch\n\
     45, AI - Samosa, Sion\n\n\
     Commands:\n\
     /total - show total expenses\n\
     /today - show today's expenses\n\
     /help - show this message"
}

/// Wall clock of the ledger. Entries and the today bucket use the
/// Asia/Kolkata calendar regardless of where the process runs.
fn now_kolkata() -> NaiveDateTime {
    Utc::now().with_timezone(&Kolkata).naive_local()
}

fn today_kolkata() -> NaiveDate {
    now_kolkata().date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Amount, DayEntry, StoreError, parse_entry};

    fn record(text: &str) -> ExpenseRecord {
        let now = NaiveDateTime::parse_from_str("2026-08-07 13:05:42", "%Y-%m-%d %H:%M:%S").unwrap();
        ExpenseRecord::from_draft(parse_entry(text).unwrap(), now)
    }

    #[test]
    fn confirmation_without_place() {
        assert_eq!(
            confirmation(&record("150, Lunch")),
            "Expense tracked: ₹150.00 for Lunch"
        );
    }

    #[test]
    fn confirmation_with_place() {
        assert_eq!(
            confirmation(&record("45, AI - Samosa, Sion")),
            "Expense tracked: ₹45.00 for AI - Samosa at Sion"
        );
    }

    #[test]
    fn today_reply_lists_entries_and_total() {
        let summary = DaySummary {
            entries: vec![
                DayEntry {
                    amount: Amount::new(4500),
                    item: "AI - Samosa".to_string(),
                    place: "Sion".to_string(),
                },
                DayEntry {
                    amount: Amount::new(3000),
                    item: "Chai".to_string(),
                    place: String::new(),
                },
            ],
            total: Amount::new(7500),
            ledger_empty: false,
        };

        assert_eq!(
            today_reply(&summary),
            "Today's expenses:\n\
             ₹45.00 - AI - Samosa (Sion)\n\
             ₹30.00 - Chai (N/A)\n\
             \n\
             Total: ₹75.00"
        );
    }

    #[test]
    fn today_reply_distinguishes_the_two_empty_cases() {
        let empty_ledger = DaySummary {
            entries: Vec::new(),
            total: Amount::ZERO,
            ledger_empty: true,
        };
        let nothing_today = DaySummary {
            entries: Vec::new(),
            total: Amount::ZERO,
            ledger_empty: false,
        };

        assert_eq!(today_reply(&empty_ledger), "No expenses recorded yet!");
        assert_eq!(today_reply(&nothing_today), "No expenses recorded today!");
    }

    #[test]
    fn parse_errors_map_to_instructive_replies() {
        let format = user_message_for_error(&LedgerError::Parse(ParseError::InvalidFormat));
        assert!(format.contains("`amount, item`"));

        let amount = user_message_for_error(&LedgerError::Parse(ParseError::InvalidAmount));
        assert!(amount.contains("must be a number"));
    }

    #[test]
    fn store_errors_echo_the_failure() {
        let err = LedgerError::Store(StoreError::Service {
            status: 403,
            message: "The caller does not have permission".to_string(),
        });
        assert_eq!(
            user_message_for_error(&err),
            "❌ Error: 403: The caller does not have permission"
        );
    }
}
