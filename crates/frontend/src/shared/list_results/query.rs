//! Query-string construction and page bookkeeping for collection endpoints.

use serde::Deserialize;

/// Additional params that only ever come from a deep link. Refresh drops them
/// so a visitor arriving from another view can clear back to the full list.
pub const URL_DERIVED_PARAMS: [&str; 3] = ["ip_address", "exact_request_path", "request_path"];

/// Inputs of one collection request.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryParams<'a> {
    pub page: Option<u32>,
    pub search: &'a str,
    pub ordering: &'a str,
    pub filters: &'a [(String, String)],
    pub additional: &'a [(String, String)],
}

/// Form-style encoding: `%20` becomes `+`, as browsers do for query strings.
fn encode(component: &str) -> String {
    urlencoding::encode(component).replace("%20", "+")
}

/// Builds `base_url?query`, appending `page`, `search`, `ordering`, filters and
/// additional params in that order. Empty values are left out entirely.
pub fn build_url(base_url: &str, params: &QueryParams<'_>) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if let Some(page) = params.page.filter(|p| *p > 0) {
        pairs.push(("page", page.to_string()));
    }
    if !params.search.is_empty() {
        pairs.push(("search", params.search.to_string()));
    }
    if !params.ordering.is_empty() {
        pairs.push(("ordering", params.ordering.to_string()));
    }
    for (key, value) in params.filters.iter().chain(params.additional) {
        if !value.is_empty() {
            pairs.push((key.as_str(), value.clone()));
        }
    }

    if pairs.is_empty() {
        return base_url.to_string();
    }

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base_url, query)
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// `page` query parameter of `url`, if present and positive. Only the
/// leading digits count, so `page=3#top` reads as 3.
pub fn extract_page_number(url: &str) -> Option<u32> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    let parsed: PageQuery = serde_qs::from_str(query).ok()?;
    let digits: String = parsed
        .page?
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<u32>().ok().filter(|p| *p > 0)
}

/// Page number of a response. The server never echoes it, so it comes from
/// the requested URL, or is inferred from the neighbouring cursors.
///
/// A `previous` cursor without `page` points at page 1 (that is how the API
/// links back to the first page), so the current page is 2 in that case.
pub fn resolve_current_page(requested: &str, next: Option<&str>, previous: Option<&str>) -> u32 {
    if let Some(page) = extract_page_number(requested) {
        return page;
    }
    if let Some(next_page) = next.and_then(extract_page_number) {
        return next_page.saturating_sub(1).max(1);
    }
    if let Some(previous) = previous {
        return extract_page_number(previous).map_or(2, |p| p + 1);
    }
    1
}

/// `max(1, ceil(count / page_size))`
pub fn total_pages(count: u64, page_size: u64) -> u32 {
    if page_size == 0 {
        return 1;
    }
    u32::try_from(count.div_ceil(page_size))
        .unwrap_or(u32::MAX)
        .max(1)
}

/// `{base_url}/{id}/` with any trailing slash on the base normalized away.
pub fn detail_url(base_url: &str, id: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://api.test/api/bot-events/";

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_params_leave_base_untouched() {
        assert_eq!(build_url(BASE, &QueryParams::default()), BASE);

        let filters = pairs(&[("method", ""), ("attack_categories", "")]);
        let additional = pairs(&[("ip_address", "")]);
        let params = QueryParams {
            page: None,
            search: "",
            ordering: "",
            filters: &filters,
            additional: &additional,
        };
        assert_eq!(build_url(BASE, &params), BASE);
    }

    #[test]
    fn parameters_follow_fixed_order() {
        let filters = pairs(&[("method", "POST"), ("attack_attempted", "")]);
        let additional = pairs(&[("page_size", "50"), ("ip_address", "10.0.0.1")]);
        let params = QueryParams {
            page: Some(3),
            search: "wp-login",
            ordering: "-created_at",
            filters: &filters,
            additional: &additional,
        };
        assert_eq!(
            build_url(BASE, &params),
            "http://api.test/api/bot-events/?page=3&search=wp-login&ordering=-created_at&method=POST&page_size=50&ip_address=10.0.0.1"
        );
    }

    #[test]
    fn page_zero_or_missing_is_omitted() {
        let params = QueryParams {
            page: Some(0),
            ordering: "-created_at",
            ..QueryParams::default()
        };
        let url = build_url(BASE, &params);
        assert!(!url.contains("page="));
        assert!(url.ends_with("?ordering=-created_at"));
    }

    #[test]
    fn values_are_form_encoded() {
        let additional = pairs(&[("request_path", "/contact/?a=1&b=2")]);
        let params = QueryParams {
            search: "union select",
            additional: &additional,
            ..QueryParams::default()
        };
        assert_eq!(
            build_url(BASE, &params),
            "http://api.test/api/bot-events/?search=union+select&request_path=%2Fcontact%2F%3Fa%3D1%26b%3D2"
        );
    }

    #[test]
    fn extracts_page_parameter() {
        assert_eq!(extract_page_number("http://x/api/?page=2"), Some(2));
        assert_eq!(extract_page_number("http://x/api/?ordering=-id&page=14&search=a"), Some(14));
        assert_eq!(extract_page_number("http://x/api/?page_size=50"), None);
        assert_eq!(extract_page_number("http://x/api/?page=0"), None);
        assert_eq!(extract_page_number("http://x/api/"), None);
        assert_eq!(extract_page_number("http://x/api/?page=5abc&ordering=-id"), Some(5));
        assert_eq!(extract_page_number("http://x/api/?search=page%3D9"), None);
        assert_eq!(extract_page_number("http://x/api/?page=2#results"), Some(2));
    }

    #[test]
    fn current_page_prefers_requested_url() {
        assert_eq!(
            resolve_current_page("http://x/?page=4", Some("http://x/?page=5"), Some("http://x/?page=3")),
            4
        );
    }

    #[test]
    fn current_page_falls_back_to_cursors() {
        assert_eq!(resolve_current_page("http://x/", Some("http://x/?page=2"), None), 1);
        assert_eq!(resolve_current_page("http://x/", Some("http://x/?page=7"), Some("http://x/?page=5")), 6);
        assert_eq!(resolve_current_page("http://x/", None, Some("http://x/")), 2);
        assert_eq!(resolve_current_page("http://x/", None, Some("http://x/?page=8")), 9);
        assert_eq!(resolve_current_page("http://x/", None, None), 1);
    }

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, 25), 1);
        assert_eq!(total_pages(25, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        assert_eq!(total_pages(53, 25), 3);
        assert_eq!(total_pages(10, 0), 1);
    }

    #[test]
    fn detail_url_normalizes_trailing_slash() {
        assert_eq!(detail_url(BASE, "17"), "http://api.test/api/bot-events/17/");
        assert_eq!(detail_url("http://api.test/api/bot-events", "17"), "http://api.test/api/bot-events/17/");
    }
}
