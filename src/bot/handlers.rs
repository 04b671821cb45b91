//! Message handlers bridging teloxide updates to the dispatch core.

use crate::bot::messaging::send_outbound;
use crate::bot::router::Router;
use crate::bot::types::InboundMessage;
use crate::geo::GeoClient;
use crate::ip::{classify, AddressClass};
use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

// Helper function to get the sender's first name from a Message
fn get_display_name(msg: &Message) -> Option<String> {
    msg.from
        .as_ref()
        .map(|u| u.first_name.clone())
        .filter(|name| !name.is_empty())
}

/// Handles one text message end to end: builds the inbound record, routes
/// it, and delivers the reply when a route matched.
///
/// # Errors
///
/// Returns an error if the chat action or the reply fails to send.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    router: Arc<Router>,
    geo: Arc<GeoClient>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let inbound = InboundMessage {
        chat_id: msg.chat.id.0,
        sender_display_name: get_display_name(&msg),
        raw_text: text.to_string(),
    };

    // A lookup can block for the full provider timeout; show typing so the
    // chat does not look stuck. Help and ignored messages skip this.
    if classify(inbound.raw_text.trim()) != AddressClass::NotAnAddress {
        bot.send_chat_action(msg.chat.id, teloxide::types::ChatAction::Typing)
            .await?;
    }

    match router.dispatch(&inbound, geo.as_ref()).await {
        Some(outbound) => send_outbound(&bot, &outbound).await,
        None => {
            debug!(chat_id = inbound.chat_id, "No route matched; staying silent");
            Ok(())
        }
    }
}
