use blog_types::{Article, ArticlePage, ArticleUpdate, ListParams, NewArticle};

use crate::client::{ApiClient, EnvelopeExt};
use crate::error::ApiResult;

/// `GET /articles?page=&limit=`
pub async fn list(client: &ApiClient, params: ListParams) -> ApiResult<ArticlePage> {
    client
        .get_with_query::<ArticlePage, _>("/articles", &params)
        .await?
        .into_data()
}

/// `GET /articles/{id}`
pub async fn get(client: &ApiClient, id: u64) -> ApiResult<Article> {
    client
        .get::<Article>(&format!("/articles/{id}"))
        .await?
        .into_data()
}

pub async fn create(client: &ApiClient, article: &NewArticle) -> ApiResult<Article> {
    client
        .post::<Article, _>("/articles", article)
        .await?
        .into_data()
}

pub async fn update(client: &ApiClient, id: u64, update: &ArticleUpdate) -> ApiResult<Article> {
    client
        .put::<Article, _>(&format!("/articles/{id}"), update)
        .await?
        .into_data()
}

/// Returns the server's confirmation message, if any.
pub async fn delete(client: &ApiClient, id: u64) -> ApiResult<Option<String>> {
    client
        .delete::<serde_json::Value>(&format!("/articles/{id}"))
        .await?
        .into_message()
}
