use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct SubmissionsEnvelope {
    pub(super) data: Option<Vec<RawSubmission>>,
}

#[derive(Deserialize)]
pub(super) struct RawSubmission {
    pub(super) title: Option<String>,
    pub(super) author: Option<String>,
    pub(super) url: Option<String>,
}
