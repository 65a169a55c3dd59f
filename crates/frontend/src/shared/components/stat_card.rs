use crate::shared::icons::icon;
use crate::shared::list_results::PLACEHOLDER;
use leptos::prelude::*;

/// Integer with non-breaking spaces between thousands groups.
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Counter value (None = not reported)
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Highlights the card as an alert
    #[prop(optional)]
    alert: bool,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => PLACEHOLDER.to_string(),
    };

    view! {
        <div class=if alert { "stat-card stat-card--error" } else { "stat-card" }>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1\u{00a0}000");
        assert_eq!(format_count(12_345_678), "12\u{00a0}345\u{00a0}678");
    }
}
