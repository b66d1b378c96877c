use blog_types::{ProfileUpdate, User};

use crate::client::{ApiClient, EnvelopeExt};
use crate::error::ApiResult;

/// `GET /users/me`
pub async fn me(client: &ApiClient) -> ApiResult<User> {
    client.get::<User>("/users/me").await?.into_data()
}

/// `PUT /users/me`
pub async fn update_me(client: &ApiClient, update: &ProfileUpdate) -> ApiResult<User> {
    client
        .put::<User, _>("/users/me", update)
        .await?
        .into_data()
}
