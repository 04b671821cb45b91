//! Messages exchanged between the Telegram transport and the dispatch core.
//!
//! These types are transport-agnostic on purpose: the router and formatter
//! operate on them alone, so the whole pipeline is testable without a
//! Telegram connection.

/// A single inbound chat message
#[derive(Clone, Debug)]
pub struct InboundMessage {
    /// Telegram chat the message arrived in
    pub chat_id: i64,
    /// Sender's first name, when Telegram supplies one
    pub sender_display_name: Option<String>,
    /// Raw message text as received
    pub raw_text: String,
}

/// Formatting mode of an outbound message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageFormat {
    /// Sent without a parse mode; the text is displayed verbatim
    Plain,
    /// Telegram MarkdownV2; literal content must be escaped with
    /// [`crate::utils::escape_markdown_v2`]
    MarkdownV2,
}

/// A URL button attached below an outbound message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkButton {
    /// Label shown on the button
    pub label: String,
    /// Target opened on tap
    pub url: String,
}

/// A fully rendered reply, ready for delivery
#[derive(Clone, Debug)]
pub struct OutboundMessage {
    /// Destination chat
    pub chat_id: i64,
    /// Rendered message text
    pub text: String,
    /// Formatting mode for `text`
    pub format: MessageFormat,
    /// Ordered URL buttons, one per keyboard row; empty for most replies
    pub buttons: Vec<LinkButton>,
}
