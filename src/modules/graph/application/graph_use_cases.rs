use std::sync::Arc;

use crate::graph::application::ports::incoming::use_cases::{
    FollowUserUseCase, ListConnectionsUseCase,
};

#[derive(Clone)]
pub struct GraphUseCases {
    pub follow: Arc<dyn FollowUserUseCase + Send + Sync>,
    pub connections: Arc<dyn ListConnectionsUseCase + Send + Sync>,
}
