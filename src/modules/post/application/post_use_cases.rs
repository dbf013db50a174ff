use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, GetPostUseCase, LikePostUseCase, ListLikersUseCase, ListMentionsUseCase,
    ListPostsByAuthorUseCase, ListRecentPostsUseCase, ListRepliesUseCase, SoftDeletePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub get: Arc<dyn GetPostUseCase + Send + Sync>,
    pub recent: Arc<dyn ListRecentPostsUseCase + Send + Sync>,
    pub by_author: Arc<dyn ListPostsByAuthorUseCase + Send + Sync>,
    pub replies: Arc<dyn ListRepliesUseCase + Send + Sync>,
    pub mentions: Arc<dyn ListMentionsUseCase + Send + Sync>,
    pub like: Arc<dyn LikePostUseCase + Send + Sync>,
    pub likers: Arc<dyn ListLikersUseCase + Send + Sync>,
    pub soft_delete: Arc<dyn SoftDeletePostUseCase + Send + Sync>,
}
