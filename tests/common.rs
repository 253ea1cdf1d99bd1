#![allow(dead_code)]

use httpmock::MockServer;
use url::Url;
use wsb_pulse::{PostRecord, PulseClient, RetryConfig};

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Client pointed at the mock server for both network boundaries.
pub fn client_for(server: &MockServer) -> PulseClient {
    let base = Url::parse(&server.base_url()).unwrap();
    PulseClient::builder()
        .base_submissions(base.clone())
        .base_news(base)
        .build()
        .unwrap()
}

/// Retry policy for failure-path tests, so a mocked 5xx fails fast.
pub fn no_retry() -> RetryConfig {
    RetryConfig {
        enabled: false,
        ..RetryConfig::default()
    }
}

pub fn post(title: &str) -> PostRecord {
    PostRecord {
        title: title.to_string(),
        author: "tester".to_string(),
        url: String::new(),
    }
}

/// Submission API envelope with one row per title.
pub fn submissions_body(titles: &[&str]) -> String {
    let data: Vec<serde_json::Value> = titles
        .iter()
        .map(|t| {
            serde_json::json!({
                "title": t,
                "author": "tester",
                "url": "https://reddit.example/post"
            })
        })
        .collect();
    serde_json::json!({ "data": data }).to_string()
}

/// Minimal quote page with a finviz-shaped news table.
/// Each row is (timestamp cell, headline title).
pub fn news_page(rows: &[(&str, &str)]) -> String {
    let mut body =
        String::from("<html><body><table id=\"news-table\" class=\"fullview-news-outer\">");
    for (stamp, title) in rows {
        body.push_str(&format!(
            "<tr><td align=\"right\">{stamp}&nbsp;</td>\
             <td align=\"left\"><a class=\"tab-link-news\" href=\"https://news.example/a\">{title}</a>\
             <span class=\"news-link-right\">(Example Wire)</span></td></tr>"
        ));
    }
    body.push_str("</table></body></html>");
    body
}
