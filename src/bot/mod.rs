/// Message handlers bridging teloxide updates to the dispatch core
pub mod handlers;
/// Delivery of rendered replies through the Telegram Bot API
pub mod messaging;
/// Rendering of outbound replies
pub mod render;
/// Routing of inbound messages to at most one handler
pub mod router;
/// Messages exchanged between the transport and the dispatch core
pub mod types;
