use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// `(href, label, icon)` for every analytics view.
pub const NAV_LINKS: [(&str, &str, &str); 5] = [
    ("/", "Dashboard", "dashboard"),
    ("/bot-event-list", "Bot Events", "events"),
    ("/ip-list", "IP Addresses", "globe"),
    ("/path-list", "Paths", "route"),
    ("/attack-list", "Attacks", "shield"),
];

/// Exact match, ignoring one trailing slash.
pub fn is_active(pathname: &str, href: &str) -> bool {
    let normalize = |p: &str| {
        let trimmed = p.trim_end_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        }
    };
    normalize(pathname) == normalize(href)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Bot Analytics"</a>
            <ul class="navbar__links">
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label, icon_name)| {
                        let active = move || location.pathname.with(|p| is_active(p, href));
                        view! {
                            <li>
                                <a
                                    href=href
                                    class=move || if active() { "navbar__link navbar__link--active" } else { "navbar__link" }
                                >
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_matching() {
        assert!(is_active("/", "/"));
        assert!(is_active("/ip-list/", "/ip-list"));
        assert!(!is_active("/ip-list", "/"));
        assert!(!is_active("/bot-event-list", "/ip-list"));
    }
}
