use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::ResolveError;

/// GitHub rejects requests without a user agent naming the app.
pub const USER_AGENT: &str = "org-members-location";

/// Send `request` and parse a 200 response body as JSON.
pub async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T, ResolveError> {
    let resp = request
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|err| transport(url, err))?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(ResolveError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = resp.bytes().await.map_err(|err| transport(url, err))?;
    decode_json(url, &body)
}

pub fn decode_json<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, ResolveError> {
    serde_json::from_slice(body).map_err(|err| ResolveError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}

fn transport(url: &str, err: reqwest::Error) -> ResolveError {
    ResolveError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}
