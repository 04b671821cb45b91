//! Rendering of outbound replies.
//!
//! Builds the MarkdownV2 help and lookup-result messages. Static template
//! text is pre-escaped by hand; every interpolated string (sender names,
//! provider fields, failure details) passes through
//! [`crate::utils::escape_markdown_v2`] exactly once, here. Coordinates are
//! the exception: they are numeric or the sentinel and render as-is.

use crate::bot::types::{LinkButton, MessageFormat, OutboundMessage};
use crate::geo::{GeoRecord, LookupError};
use crate::utils::escape_markdown_v2;

/// Label of the full-details self-lookup button
pub const IP_DETAILS_BUTTON_LABEL: &str = "Check My Own IP + Full Details";
/// URL of the full-details self-lookup button
pub const IP_DETAILS_BUTTON_URL: &str = "https://whatismyipaddress.com";
/// Label of the raw-IP self-lookup button
pub const RAW_IP_BUTTON_LABEL: &str = "Just My Raw IP";
/// URL of the raw-IP self-lookup button
pub const RAW_IP_BUTTON_URL: &str = "https://api.ipify.org";

/// Greeting used when Telegram supplies no sender name
const FALLBACK_DISPLAY_NAME: &str = "there";
/// Placeholder rendered for provider fields that are absent
const ABSENT: &str = "N/A";

/// Renders the help/greeting reply with its two fixed link buttons.
#[must_use]
pub fn format_help(chat_id: i64, display_name: Option<&str>) -> OutboundMessage {
    let name = escape_markdown_v2(display_name.unwrap_or(FALLBACK_DISPLAY_NAME));

    let text = format!(
        "Hi {name}\\! 👋\n\
         Telegram doesn't share your real IP with bots \\(privacy first\\)\\.\n\n\
         Tap the buttons below to see your own public IP details \\(like on whatismyipaddress\\.com\\)\\.\n\n\
         Or send me any IP address \\(example: `8.8.8.8`\\) and I'll show:\n\
         • Country, city, region\n\
         • ISP, organization\n\
         • Coordinates, timezone\n\
         • Proxy/VPN status"
    );

    OutboundMessage {
        chat_id,
        text,
        format: MessageFormat::MarkdownV2,
        buttons: vec![
            LinkButton {
                label: IP_DETAILS_BUTTON_LABEL.to_string(),
                url: IP_DETAILS_BUTTON_URL.to_string(),
            },
            LinkButton {
                label: RAW_IP_BUTTON_LABEL.to_string(),
                url: RAW_IP_BUTTON_URL.to_string(),
            },
        ],
    }
}

/// Renders a lookup outcome, success or failure, into a reply.
///
/// `ip` is the address the user asked about; it names the query in failure
/// replies and backs the success header when the provider omits its echo.
#[must_use]
pub fn format_lookup_result(
    chat_id: i64,
    ip: &str,
    result: &Result<GeoRecord, LookupError>,
) -> OutboundMessage {
    let text = match result {
        Ok(record) => render_success(ip, record),
        Err(failure) => render_failure(ip, failure),
    };

    OutboundMessage {
        chat_id,
        text,
        format: MessageFormat::MarkdownV2,
        buttons: Vec::new(),
    }
}

fn render_success(ip: &str, record: &GeoRecord) -> String {
    let query = escape_markdown_v2(record.query_ip.as_deref().unwrap_or(ip));

    let mut lines = Vec::new();
    lines.push("*IP Lookup Results* \\(similar to whatismyipaddress\\.com\\):".to_string());
    lines.push(String::new());
    lines.push(format!("IP: *{query}*"));
    lines.push(String::new());
    lines.push(format!(
        "🌍 Country: {} \\({}\\)",
        field(record.country.as_deref()),
        field(record.country_code.as_deref())
    ));
    lines.push(format!(
        "🏞️ Region: {} \\({}\\)",
        field(record.region_name.as_deref()),
        field(record.region_code.as_deref())
    ));
    lines.push(format!("🏙️ City: {}", field(record.city.as_deref())));
    lines.push(format!(
        "📮 ZIP/Postal: {}",
        field(record.postal_code.as_deref())
    ));
    lines.push(format!(
        "📍 Coordinates: {}, {}",
        coordinate(record.latitude),
        coordinate(record.longitude)
    ));
    lines.push(format!("🕒 Timezone: {}", field(record.timezone.as_deref())));
    lines.push(format!("🌐 ISP: {}", field(record.isp.as_deref())));
    lines.push(format!(
        "🏢 Organization: {}",
        field(record.organization.as_deref())
    ));
    lines.push(format!("🔗 AS: {}", field(record.as_info.as_deref())));
    lines.push(format!(
        "📱 Mobile network?: {}",
        yes_no(record.is_mobile)
    ));
    lines.push(format!(
        "🕵️ Proxy/VPN/Hosting?: {}",
        yes_no(record.is_proxy_or_hosting)
    ));

    lines.join("\n")
}

fn render_failure(ip: &str, failure: &LookupError) -> String {
    let ip = escape_markdown_v2(ip);
    match failure {
        LookupError::Rejected(message) => format!(
            "❌ Lookup failed for *{ip}*\nMessage: {}",
            escape_markdown_v2(message)
        ),
        LookupError::NetworkError(detail) => format!(
            "⚠️ Network error while fetching IP info for *{ip}*: {}",
            escape_markdown_v2(detail)
        ),
        LookupError::Unexpected(detail) => format!(
            "❗ Unexpected error while looking up *{ip}*: {}\nTry again later\\.",
            escape_markdown_v2(detail)
        ),
    }
}

fn field(value: Option<&str>) -> String {
    escape_markdown_v2(value.unwrap_or(ABSENT))
}

fn coordinate(value: Option<f64>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |v| v.to_string())
}

const fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
