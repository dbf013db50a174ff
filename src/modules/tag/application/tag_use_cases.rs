use std::sync::Arc;

use crate::tag::application::ports::incoming::use_cases::{GetTagUseCase, ListPostsByTagUseCase};

#[derive(Clone)]
pub struct TagUseCases {
    pub get: Arc<dyn GetTagUseCase + Send + Sync>,
    pub posts: Arc<dyn ListPostsByTagUseCase + Send + Sync>,
}
