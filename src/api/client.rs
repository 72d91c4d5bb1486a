use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::gateway::PostsGateway;
use crate::model::{Comment, NewPost, Post, PostId, PostPatch};

/// Public demo API the app talks to unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// HTTP implementation of [`PostsGateway`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client: Client::new(),
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: PostId) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    fn comments_url(&self, post_id: PostId) -> Result<Url, ApiError> {
        let raw = format!("{}/comments", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidBaseUrl {
            url: raw,
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("postId", &post_id.to_string());
        Ok(url)
    }

    /// Send a request and require a 2xx status.
    async fn send(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(operation, "Sending request");

        let response = builder.send().await.map_err(|source| {
            tracing::warn!(operation, error = %source, "Request failed");
            ApiError::Transport { operation, source }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(operation, status = status.as_u16(), "Non-success response");
            return Err(ApiError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(operation, builder).await?;
        response.json::<T>().await.map_err(|source| {
            tracing::warn!(operation, error = %source, "Failed to decode response");
            ApiError::Decode { operation, source }
        })
    }
}

#[async_trait]
impl PostsGateway for ApiClient {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let builder = self.client.get(self.posts_url());
        self.send_json("list posts", builder).await
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, ApiError> {
        let builder = self.client.post(self.posts_url()).json(&post);
        self.send_json("create post", builder).await
    }

    async fn update_post(&self, id: PostId, patch: PostPatch) -> Result<Post, ApiError> {
        let builder = self
            .client
            .request(Method::PATCH, self.post_url(id))
            .json(&patch);
        self.send_json("update post", builder).await
    }

    async fn delete_post(&self, id: PostId) -> Result<PostId, ApiError> {
        let builder = self.client.delete(self.post_url(id));
        self.send("delete post", builder).await?;
        Ok(id)
    }

    async fn get_post(&self, id: PostId) -> Result<Post, ApiError> {
        let builder = self.client.get(self.post_url(id));
        self.send_json("get post", builder).await
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError> {
        let builder = self.client.get(self.comments_url(post_id)?);
        self.send_json("list comments", builder).await
    }
}
