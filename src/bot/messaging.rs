//! Delivery of rendered replies through the Telegram Bot API.
//!
//! Maps the transport-agnostic [`OutboundMessage`] onto a concrete
//! `sendMessage` call: parse mode from the message format, link buttons as
//! a single-column inline keyboard.

use crate::bot::types::{MessageFormat, OutboundMessage};
use anyhow::{Context, Result};
use reqwest::Url;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};

/// Sends one rendered reply to its destination chat.
///
/// # Errors
///
/// Returns an error if a button URL does not parse or the Telegram API
/// call fails.
pub async fn send_outbound(bot: &Bot, outbound: &OutboundMessage) -> Result<()> {
    let mut request = bot.send_message(ChatId(outbound.chat_id), outbound.text.clone());

    request = match outbound.format {
        MessageFormat::Plain => request,
        MessageFormat::MarkdownV2 => request.parse_mode(ParseMode::MarkdownV2),
    };

    if !outbound.buttons.is_empty() {
        request = request.reply_markup(build_keyboard(outbound)?);
    }

    request.await?;
    Ok(())
}

/// One button per row, in the order the formatter listed them.
fn build_keyboard(outbound: &OutboundMessage) -> Result<InlineKeyboardMarkup> {
    let mut rows = Vec::with_capacity(outbound.buttons.len());
    for button in &outbound.buttons {
        let url = Url::parse(&button.url)
            .with_context(|| format!("Invalid button URL: {}", button.url))?;
        rows.push(vec![InlineKeyboardButton::url(button.label.clone(), url)]);
    }
    Ok(InlineKeyboardMarkup::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::render::format_help;

    #[test]
    fn test_help_keyboard_has_one_button_per_row() {
        let outbound = format_help(1, None);
        let keyboard = build_keyboard(&outbound).expect("fixed URLs must parse");

        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert_eq!(keyboard.inline_keyboard[0].len(), 1);
        assert_eq!(keyboard.inline_keyboard[1].len(), 1);
    }

    #[test]
    fn test_malformed_button_url_is_an_error() {
        let outbound = OutboundMessage {
            chat_id: 1,
            text: "x".to_string(),
            format: MessageFormat::Plain,
            buttons: vec![crate::bot::types::LinkButton {
                label: "broken".to_string(),
                url: "not a url".to_string(),
            }],
        };
        assert!(build_keyboard(&outbound).is_err());
    }
}
