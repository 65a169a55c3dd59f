use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::routes::AppState;

/// Decoy pages advertised to crawlers. Each one renders the contact bait form.
pub const DECOY_PATHS: [&str; 8] = [
    "/contact/",
    "/feedback/",
    "/company/",
    "/search/",
    "/query/",
    "/lookup/",
    "/filter/",
    "/send-message/",
];

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Builds the sitemap document for `public_url` (no trailing slash expected).
pub fn generate_sitemap(public_url: &str, paths: &[&str]) -> String {
    let base = escape_xml(public_url.trim_end_matches('/'));
    let urls = paths
        .iter()
        .map(|path| {
            format!(
                "  <url>\n    <loc>{}{}</loc>\n    <changefreq>weekly</changefreq>\n    <priority>0.5</priority>\n  </url>",
                base,
                escape_xml(path)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>",
        urls
    )
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::debug!("Serving sitemap for {}", state.public_url);
    (
        [(header::CONTENT_TYPE, "text/xml")],
        generate_sitemap(&state.public_url, &DECOY_PATHS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    #[test]
    fn lists_every_decoy_path_under_public_url() {
        let xml = generate_sitemap("https://bots.example.org", &DECOY_PATHS);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        for path in DECOY_PATHS {
            let loc = format!("<loc>https://bots.example.org{}</loc>", path);
            assert!(xml.contains(&loc), "missing {loc}");
        }
        assert_eq!(xml.matches("<changefreq>weekly</changefreq>").count(), 8);
        assert_eq!(xml.matches("<priority>0.5</priority>").count(), 8);
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn trailing_slash_on_public_url_is_not_doubled() {
        let xml = generate_sitemap("https://bots.example.org/", &["/contact/"]);
        assert!(xml.contains("<loc>https://bots.example.org/contact/</loc>"));
    }

    #[test]
    fn markup_in_public_url_is_escaped() {
        let xml = generate_sitemap("https://x.test/?a=1&b=2", &["/query/"]);
        assert!(xml.contains("<loc>https://x.test/?a=1&amp;b=2/query/</loc>"));
    }

    #[tokio::test]
    async fn handler_serves_text_xml() {
        let state = Arc::new(AppState {
            public_url: "http://localhost:3000".to_string(),
        });
        let response = sitemap(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/xml"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("<loc>http://localhost:3000/send-message/</loc>"));
    }
}
