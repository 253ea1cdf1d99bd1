use crate::core::error::PulseError;

/// Check the response status and read the body as text.
pub(crate) async fn ok_text(resp: reqwest::Response) -> Result<String, PulseError> {
    if !resp.status().is_success() {
        return Err(PulseError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp.text().await?)
}
