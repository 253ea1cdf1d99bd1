use crate::{
    core::{PulseClient, PulseError, client::RetryConfig, models::PostRecord, net},
    submissions::wire,
};

pub(super) async fn fetch_submissions(
    client: &PulseClient,
    subreddit: &str,
    after: i64,
    before: i64,
    size: Option<u32>,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<PostRecord>, PulseError> {
    let mut url = client.base_submissions().join("reddit/search/submission/")?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("subreddit", subreddit)
            .append_pair("after", &after.to_string())
            .append_pair("before", &before.to_string())
            .append_pair("fields", "title,author,url");
        if let Some(n) = size {
            qp.append_pair("size", &n.to_string());
        }
    }

    let req = client.http().get(url);
    let resp = client.send_with_retry(req, retry_override).await?;
    let body = net::ok_text(resp).await?;

    let envelope: wire::SubmissionsEnvelope = serde_json::from_str(&body)?;
    let rows = envelope.data.unwrap_or_default();

    // Rows without a title carry nothing the extractor can use.
    let posts = rows
        .into_iter()
        .filter_map(|raw| {
            let title = raw.title?;
            Some(PostRecord {
                title,
                author: raw.author.unwrap_or_default(),
                url: raw.url.unwrap_or_default(),
            })
        })
        .collect();

    Ok(posts)
}
