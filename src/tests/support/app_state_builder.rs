use actix_web::web;
use std::sync::Arc;

use crate::graph::application::ports::incoming::use_cases::{
    FollowUserUseCase, ListConnectionsUseCase,
};
use crate::graph::application::GraphUseCases;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, GetPostUseCase, LikePostUseCase, ListLikersUseCase, ListMentionsUseCase,
    ListPostsByAuthorUseCase, ListRecentPostsUseCase, ListRepliesUseCase, SoftDeletePostUseCase,
};
use crate::post::application::PostUseCases;
use crate::tag::application::ports::incoming::use_cases::{GetTagUseCase, ListPostsByTagUseCase};
use crate::tag::application::TagUseCases;
use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, GetUserByUsernameUseCase, GetUserUseCase, PictureUrlUseCase,
    SoftDeleteUserUseCase,
};
use crate::user::application::UserUseCases;
use crate::AppState;

/// Builds an `AppState` where every use case answers with a "not used"
/// error unless a test swaps in its own implementation.
pub struct TestAppStateBuilder {
    user: UserUseCases,
    graph: GraphUseCases,
    post: PostUseCases,
    tag: TagUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let list_posts = Arc::new(StubListPostsUseCase::default());

        Self {
            user: UserUseCases {
                create: Arc::new(StubCreateUserUseCase::default()),
                get: Arc::new(StubGetUserUseCase::default()),
                get_by_username: Arc::new(StubGetUserUseCase::default()),
                soft_delete: Arc::new(StubSoftDeleteUserUseCase::default()),
                picture_url: Arc::new(StubPictureUrlUseCase::default()),
                add_picture: Arc::new(StubAddPictureUseCase),
            },
            graph: GraphUseCases {
                follow: Arc::new(StubFollowUserUseCase::default()),
                connections: Arc::new(StubListConnectionsUseCase::default()),
            },
            post: PostUseCases {
                create: Arc::new(StubCreatePostUseCase::default()),
                get: Arc::new(StubGetPostUseCase::default()),
                recent: list_posts.clone(),
                by_author: list_posts.clone(),
                replies: list_posts.clone(),
                mentions: list_posts,
                like: Arc::new(StubLikePostUseCase::default()),
                likers: Arc::new(StubListLikersUseCase::default()),
                soft_delete: Arc::new(StubSoftDeletePostUseCase::default()),
            },
            tag: TagUseCases {
                get: Arc::new(StubGetTagUseCase::default()),
                posts: Arc::new(StubListPostsByTagUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ── users ──

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + Send + Sync + 'static) -> Self {
        self.user.create = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + Send + Sync + 'static) -> Self {
        self.user.get = Arc::new(uc);
        self
    }

    pub fn with_get_user_by_username(
        mut self,
        uc: impl GetUserByUsernameUseCase + Send + Sync + 'static,
    ) -> Self {
        self.user.get_by_username = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_user(
        mut self,
        uc: impl SoftDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.user.soft_delete = Arc::new(uc);
        self
    }

    pub fn with_picture_url(mut self, uc: impl PictureUrlUseCase + Send + Sync + 'static) -> Self {
        self.user.picture_url = Arc::new(uc);
        self
    }

    // ── graph ──

    pub fn with_follow_user(mut self, uc: impl FollowUserUseCase + Send + Sync + 'static) -> Self {
        self.graph.follow = Arc::new(uc);
        self
    }

    pub fn with_list_connections(
        mut self,
        uc: impl ListConnectionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.graph.connections = Arc::new(uc);
        self
    }

    // ── posts ──

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + Send + Sync + 'static) -> Self {
        self.post.create = Arc::new(uc);
        self
    }

    pub fn with_get_post(mut self, uc: impl GetPostUseCase + Send + Sync + 'static) -> Self {
        self.post.get = Arc::new(uc);
        self
    }

    pub fn with_list_recent_posts(
        mut self,
        uc: impl ListRecentPostsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.recent = Arc::new(uc);
        self
    }

    pub fn with_list_posts_by_author(
        mut self,
        uc: impl ListPostsByAuthorUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.by_author = Arc::new(uc);
        self
    }

    pub fn with_list_replies(
        mut self,
        uc: impl ListRepliesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.replies = Arc::new(uc);
        self
    }

    pub fn with_list_mentions(
        mut self,
        uc: impl ListMentionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.mentions = Arc::new(uc);
        self
    }

    pub fn with_like_post(mut self, uc: impl LikePostUseCase + Send + Sync + 'static) -> Self {
        self.post.like = Arc::new(uc);
        self
    }

    pub fn with_list_likers(mut self, uc: impl ListLikersUseCase + Send + Sync + 'static) -> Self {
        self.post.likers = Arc::new(uc);
        self
    }

    pub fn with_soft_delete_post(
        mut self,
        uc: impl SoftDeletePostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.soft_delete = Arc::new(uc);
        self
    }

    // ── tags ──

    pub fn with_get_tag(mut self, uc: impl GetTagUseCase + Send + Sync + 'static) -> Self {
        self.tag.get = Arc::new(uc);
        self
    }

    pub fn with_list_posts_by_tag(
        mut self,
        uc: impl ListPostsByTagUseCase + Send + Sync + 'static,
    ) -> Self {
        self.tag.posts = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            user: self.user,
            graph: self.graph,
            post: self.post,
            tag: self.tag,
        })
    }
}
