use std::sync::Arc;

use crate::{
    cache::listing_cache::{Collection, ResponseCache},
    entities::{
        post::{NewPostRequest, Post, PostInsert},
        CreatedResponse,
    },
    errors::AppError,
    notifier::webhook::{PostAnnouncement, PostNotifier},
    repositories::post::PostRepository,
};

pub struct PostHandler<R, N>
where
    R: PostRepository,
    N: PostNotifier,
{
    pub post_repo: R,
    pub notifier: Arc<N>,
    pub cache: Arc<ResponseCache>,
    pub post_base_url: String,
}

impl<R, N> PostHandler<R, N>
where
    R: PostRepository,
    N: PostNotifier,
{
    pub fn new(post_repo: R, notifier: Arc<N>, cache: Arc<ResponseCache>, post_base_url: &str) -> Self {
        PostHandler {
            post_repo,
            notifier,
            cache,
            post_base_url: post_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Validates and stores a post, then announces it in the background.
    ///
    /// The announcement outcome never reaches the caller.
    pub async fn create_post(&self, request: NewPostRequest) -> Result<CreatedResponse, AppError> {
        let insert = PostInsert::try_from(request)?;

        let id = self.post_repo.create_post(&insert).await?;

        self.cache.invalidate(Collection::Posts);
        tracing::info!(post_id = id, "Post created");

        self.announce(PostAnnouncement {
            title: insert.title,
            url: format!("{}/{}", self.post_base_url, id),
            description: insert.description,
        });

        Ok(CreatedResponse::new("Post created", id))
    }

    /// All posts, newest first
    pub async fn list_posts(&self) -> Result<Arc<Vec<Post>>, AppError> {
        self.cache.posts
            .get_or_load(|| self.post_repo.list_posts())
            .await
    }

    fn announce(&self, announcement: PostAnnouncement) {
        let notifier = Arc::clone(&self.notifier);

        tokio::spawn(async move {
            match notifier.notify(&announcement).await {
                Ok(()) => tracing::info!(url = %announcement.url, "Embed successfully sent."),
                Err(e) => tracing::error!(url = %announcement.url, error = %e, "Error while sending the embed"),
            }
        });
    }
}
