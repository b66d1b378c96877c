use blog_types::{Comment, CommentPage, ListParams, NewComment};

use crate::client::{ApiClient, EnvelopeExt};
use crate::error::ApiResult;

/// `GET /articles/{article_id}/comments`
pub async fn list(
    client: &ApiClient,
    article_id: u64,
    params: ListParams,
) -> ApiResult<CommentPage> {
    client
        .get_with_query::<CommentPage, _>(&format!("/articles/{article_id}/comments"), &params)
        .await?
        .into_data()
}

pub async fn create(
    client: &ApiClient,
    article_id: u64,
    comment: &NewComment,
) -> ApiResult<Comment> {
    client
        .post::<Comment, _>(&format!("/articles/{article_id}/comments"), comment)
        .await?
        .into_data()
}

/// `DELETE /comments/{id}`
pub async fn delete(client: &ApiClient, id: u64) -> ApiResult<Option<String>> {
    client
        .delete::<serde_json::Value>(&format!("/comments/{id}"))
        .await?
        .into_message()
}
