//! Routing of inbound messages to at most one handler.
//!
//! The router walks an explicit, ordered list of (predicate, handler) pairs
//! per message and stops at the first match. Messages nothing matches are
//! dropped silently: the bot never replies to arbitrary chatter, so a group
//! chat can carry it without noise.

use crate::bot::render;
use crate::bot::types::{InboundMessage, OutboundMessage};
use crate::geo::IpLookup;
use crate::ip::{classify, AddressClass};
use tracing::{info, warn};

/// Command tokens that trigger the help reply
const HELP_COMMANDS: &[&str] = &["/start", "/myip"];

/// Handlers a message can be routed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Handler {
    /// Static help text plus the self-lookup link buttons
    Help,
    /// Geolocation lookup of the message text
    Lookup,
}

struct Route {
    matches: fn(&str) -> bool,
    handler: Handler,
}

/// Stateless message router.
///
/// Holds only the fixed route table; nothing is carried over between
/// messages. At most one outbound message is produced per inbound one.
pub struct Router {
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Builds the router with its fixed route order: help commands first,
    /// then address lookups.
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: vec![
                Route {
                    matches: is_help_command,
                    handler: Handler::Help,
                },
                Route {
                    matches: is_ip_address,
                    handler: Handler::Lookup,
                },
            ],
        }
    }

    /// Dispatches one inbound message.
    ///
    /// Returns the rendered reply when a route matched, `None` when the
    /// message is intentionally ignored. Lookup failures do not surface
    /// here: each failure kind renders into its own reply text.
    pub async fn dispatch(
        &self,
        msg: &InboundMessage,
        lookup: &dyn IpLookup,
    ) -> Option<OutboundMessage> {
        let text = msg.raw_text.trim();

        let route = self.routes.iter().find(|r| (r.matches)(text))?;

        let reply = match route.handler {
            Handler::Help => {
                info!(chat_id = msg.chat_id, "Handling help command");
                render::format_help(msg.chat_id, msg.sender_display_name.as_deref())
            }
            Handler::Lookup => {
                info!(chat_id = msg.chat_id, ip = text, "Handling IP lookup");
                let result = lookup.lookup(text).await;
                if let Err(failure) = &result {
                    warn!(chat_id = msg.chat_id, ip = text, "Lookup failed: {failure}");
                }
                render::format_lookup_result(msg.chat_id, text, &result)
            }
        };

        Some(reply)
    }
}

/// Exact command match; Telegram appends `@botname` in group chats, so a
/// single such suffix is stripped first. Commands take no arguments.
fn is_help_command(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let token = text.split_once('@').map_or(text, |(cmd, _)| cmd);
    HELP_COMMANDS.contains(&token)
}

fn is_ip_address(text: &str) -> bool {
    classify(text) != AddressClass::NotAnAddress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{GeoRecord, LookupError, MockIpLookup};

    fn inbound(text: &str) -> InboundMessage {
        InboundMessage {
            chat_id: 77,
            sender_display_name: Some("Dana".to_string()),
            raw_text: text.to_string(),
        }
    }

    fn sample_record() -> GeoRecord {
        GeoRecord {
            query_ip: Some("8.8.8.8".to_string()),
            country: Some("United States".to_string()),
            country_code: Some("US".to_string()),
            ..GeoRecord::default()
        }
    }

    #[tokio::test]
    async fn test_start_routes_to_help_without_lookup() {
        let mut lookup = MockIpLookup::new();
        lookup.expect_lookup().never();

        let router = Router::new();
        let reply = router
            .dispatch(&inbound("/start"), &lookup)
            .await
            .expect("help reply expected");

        assert!(reply.text.contains("Hi Dana"));
        assert_eq!(reply.buttons.len(), 2);
        assert_eq!(reply.chat_id, 77);
    }

    #[tokio::test]
    async fn test_myip_alias_routes_to_help() {
        let mut lookup = MockIpLookup::new();
        lookup.expect_lookup().never();

        let router = Router::new();
        let reply = router.dispatch(&inbound("/myip"), &lookup).await;
        assert!(reply.is_some());
    }

    #[tokio::test]
    async fn test_command_with_bot_mention_routes_to_help() {
        let mut lookup = MockIpLookup::new();
        lookup.expect_lookup().never();

        let router = Router::new();
        let reply = router.dispatch(&inbound("/start@ipscout_bot"), &lookup).await;
        assert!(reply.is_some());
    }

    #[tokio::test]
    async fn test_command_with_arguments_is_ignored() {
        let mut lookup = MockIpLookup::new();
        lookup.expect_lookup().never();

        let router = Router::new();
        let reply = router.dispatch(&inbound("/start now please"), &lookup).await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_ip_message_triggers_lookup() {
        let mut lookup = MockIpLookup::new();
        lookup
            .expect_lookup()
            .withf(|ip| ip == "8.8.8.8")
            .times(1)
            .returning(|_| Ok(sample_record()));

        let router = Router::new();
        let reply = router
            .dispatch(&inbound("8.8.8.8"), &lookup)
            .await
            .expect("lookup reply expected");

        assert!(reply.text.contains("United States"));
        assert!(reply.buttons.is_empty());
    }

    #[tokio::test]
    async fn test_padded_ip_is_trimmed_before_lookup() {
        let mut lookup = MockIpLookup::new();
        lookup
            .expect_lookup()
            .withf(|ip| ip == "8.8.8.8")
            .times(1)
            .returning(|_| Ok(sample_record()));

        let router = Router::new();
        let reply = router.dispatch(&inbound("  8.8.8.8  "), &lookup).await;
        assert!(reply.is_some());
    }

    #[tokio::test]
    async fn test_ipv6_message_triggers_lookup() {
        let mut lookup = MockIpLookup::new();
        lookup
            .expect_lookup()
            .withf(|ip| ip == "2001:4860:4860::8888")
            .times(1)
            .returning(|_| Ok(GeoRecord::default()));

        let router = Router::new();
        let reply = router
            .dispatch(&inbound("2001:4860:4860::8888"), &lookup)
            .await;
        assert!(reply.is_some());
    }

    #[tokio::test]
    async fn test_chatter_is_silently_ignored() {
        let mut lookup = MockIpLookup::new();
        lookup.expect_lookup().never();

        let router = Router::new();
        let reply = router.dispatch(&inbound("not an ip at all"), &lookup).await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_embedded_ip_is_ignored() {
        let mut lookup = MockIpLookup::new();
        lookup.expect_lookup().never();

        let router = Router::new();
        let reply = router
            .dispatch(&inbound("my ip is 8.8.8.8, right?"), &lookup)
            .await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_lookup_failure_still_yields_one_reply() {
        let mut lookup = MockIpLookup::new();
        lookup
            .expect_lookup()
            .times(1)
            .returning(|_| Err(LookupError::NetworkError("timed out".to_string())));

        let router = Router::new();
        let reply = router
            .dispatch(&inbound("8.8.8.8"), &lookup)
            .await
            .expect("failure reply expected");

        assert!(reply.text.starts_with("⚠️"));
        assert!(!reply.text.contains("Country"));
    }

    #[test]
    fn test_help_command_matching_is_exact() {
        assert!(is_help_command("/start"));
        assert!(is_help_command("/myip"));
        assert!(is_help_command("/start@some_bot"));
        assert!(!is_help_command("/started"));
        assert!(!is_help_command("/START"));
        assert!(!is_help_command("start"));
        assert!(!is_help_command("/start extra"));
        assert!(!is_help_command("@bot"));
    }
}
