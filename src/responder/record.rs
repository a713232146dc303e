//! The JSON shape returned as the default response body: everything observed
//! about the request, plus its parsed parameters.

use serde::Serialize;

use super::params::ParamSet;

#[derive(Debug, Serialize)]
pub struct RequestRecord {
    pub protocol: String,
    pub method: String,
    pub user_agent: String,
    pub client_address: String,
    pub host: String,
    pub url_path: String,
    pub content_type: String,
    pub content_length: usize,
    pub request_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_headers: Option<Vec<String>>,
    pub params: ParamSet,
    pub responderapi_id: String,
    pub called_at: String,
    pub execution_time: String,
}
