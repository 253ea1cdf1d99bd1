use crate::{
    core::{PulseClient, PulseError, client::RetryConfig, models::HeadlineRow, net},
    headlines::parse,
};

pub(super) async fn fetch_headlines(
    client: &PulseClient,
    ticker: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<HeadlineRow>, PulseError> {
    let mut url = client.base_news().join("quote.ashx")?;
    url.query_pairs_mut().append_pair("t", ticker);

    let req = client.http().get(url);
    let resp = client.send_with_retry(req, retry_override).await?;
    let body = net::ok_text(resp).await?;

    parse::parse_news_table(ticker, &body)
}
