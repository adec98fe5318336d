// SPDX-License-Identifier: MPL-2.0
//! Contact hand-off: turns a viewer item into a WhatsApp click-to-chat link.
//!
//! The link is `https://wa.me/<digits>?text=<message>`, where the message is
//! the localized `contact-message` template filled with the item's title,
//! seller and price. The viewer session is only read, never changed.

use crate::domain::viewer::{format_price, Item};
use crate::i18n::fluent::I18n;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Base URL of the WhatsApp click-to-chat service.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Characters `encodeURIComponent` leaves alone, besides ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Contact settings the link depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    /// Number used when the item has no seller contact.
    pub default_number: String,
    /// Currency symbol placed before the price.
    pub currency: String,
}

/// Percent-encodes `text` the way `encodeURIComponent` does.
#[must_use]
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Keeps only the ASCII digits of a phone-like string.
#[must_use]
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Fills the localized inquiry message for `item`.
#[must_use]
pub fn compose_message(i18n: &I18n, item: &Item, currency: &str) -> String {
    let price = format_price(item.price);
    i18n.tr_with_args(
        "contact-message",
        &[
            ("title", item.title.as_str()),
            ("seller", item.seller_name.as_deref().unwrap_or_default()),
            ("price", price.as_str()),
            ("currency", currency),
        ],
    )
}

/// Builds the click-to-chat link for `item`.
///
/// The seller's number wins when it has at least one digit; otherwise the
/// configured default number is used.
#[must_use]
pub fn contact_link(i18n: &I18n, item: &Item, settings: &ContactSettings) -> String {
    let number = item
        .seller_contact
        .as_deref()
        .map(phone_digits)
        .filter(|digits| !digits.is_empty())
        .unwrap_or_else(|| phone_digits(&settings.default_number));
    let message = compose_message(i18n, item, &settings.currency);
    format!(
        "{}{}?text={}",
        WHATSAPP_BASE_URL,
        number,
        encode_uri_component(&message)
    )
}
