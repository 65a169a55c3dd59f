//! Filters shared by several list pages.

use crate::shared::list_results::{options, FilterDescriptor};

/// Value the bot-event endpoint expects for the catch-all category.
pub const OTHER_CATEGORY: &str = "OTHER";
/// The attacks endpoint stores the catch-all category capitalized.
pub const OTHER_ATTACK_CATEGORY: &str = "Other";

/// Attack category choice sent under `key`, with `other_value` for the
/// catch-all entry.
pub fn attack_category_filter(key: &str, other_value: &str) -> FilterDescriptor {
    FilterDescriptor::new(
        key,
        "Attack Category",
        options(&[
            ("", "All"),
            ("XSS", "XSS"),
            ("SQLI", "SQL Injection"),
            ("LFI", "LFI"),
            ("CMD", "CMD"),
            ("TRAVERSAL", "TRAVERSAL"),
            ("SSTI", "SSTI"),
            (other_value, "Other"),
        ]),
    )
}

pub fn method_filter() -> FilterDescriptor {
    FilterDescriptor::new(
        "method",
        "Method",
        options(&[
            ("", "All"),
            ("GET", "GET"),
            ("POST", "POST"),
            ("PUT", "PUT"),
            ("PATCH", "PATCH"),
            ("DELETE", "DELETE"),
        ]),
    )
}

pub fn attack_attempted_filter() -> FilterDescriptor {
    FilterDescriptor::new(
        "attack_attempted",
        "Attack Attempted",
        options(&[("", "All"), ("True", "Yes"), ("False", "No")]),
    )
}
