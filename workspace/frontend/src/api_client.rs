pub mod actual_data;
pub mod contact;
pub mod prediction;

use common::{ApiFailure, ClientError, Operation};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// POST a JSON body to the prediction service and decode a JSON answer.
pub async fn post<T, B>(endpoint: &str, body: &B, operation: Operation) -> Result<T, ClientError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    let response = send_json(&url, body).await?;
    ensure_success(endpoint, response, operation)
        .await?
        .json::<T>()
        .await
        .map_err(|e| {
            let error = ClientError::Decode(e.to_string());
            log::error!("POST {} - {}", endpoint, error);
            error
        })
        .inspect(|_| log::info!("POST {} - Success", endpoint))
}

/// POST a JSON body to an absolute URL whose success body is not JSON.
pub async fn post_expect_ok<B>(url: &str, body: &B, operation: Operation) -> Result<(), ClientError>
where
    B: Serialize,
{
    let response = send_json(url, body).await?;
    ensure_success(url, response, operation).await?;
    log::info!("POST {} - Success", url);
    Ok(())
}

async fn send_json<B: Serialize>(url: &str, body: &B) -> Result<Response, ClientError> {
    log::debug!("POST request to: {}", url);

    Request::post(url)
        .json(body)
        .map_err(|e| {
            let error = ClientError::Decode(format!("Failed to serialize request: {}", e));
            log::error!("POST {} - {}", url, error);
            error
        })?
        .send()
        .await
        .map_err(|e| {
            let error = ClientError::Network(e.to_string());
            log::error!("POST {} - {}", url, error);
            error
        })
}

/// Turns a non-success response into [`ClientError::Api`].
async fn ensure_success(
    endpoint: &str,
    response: Response,
    operation: Operation,
) -> Result<Response, ClientError> {
    if response.ok() {
        log::trace!("POST {} - Response received", endpoint);
        return Ok(response);
    }

    log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
    let body = response.text().await.unwrap_or_default();
    let failure = ApiFailure::from_body(&body, operation.fallback_message());
    log::error!("POST {} - API error: {}", endpoint, failure);
    Err(ClientError::Api(failure))
}
