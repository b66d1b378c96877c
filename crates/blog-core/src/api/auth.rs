use blog_types::{AuthPayload, Credentials, Registration};

use crate::client::{ApiClient, EnvelopeExt};
use crate::error::{ApiError, ApiResult};

pub async fn register(client: &ApiClient, registration: &Registration) -> ApiResult<AuthPayload> {
    let payload = client
        .post::<AuthPayload, _>("/auth/register", registration)
        .await?
        .into_data()?;
    require_token(payload)
}

pub async fn login(client: &ApiClient, credentials: &Credentials) -> ApiResult<AuthPayload> {
    let payload = client
        .post::<AuthPayload, _>("/auth/login", credentials)
        .await?
        .into_data()?;
    require_token(payload)
}

fn require_token(payload: AuthPayload) -> ApiResult<AuthPayload> {
    if payload.token.trim().is_empty() {
        return Err(ApiError::Decode("response did not include a token".to_string()));
    }
    Ok(payload)
}
