use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::graph::application::domain::entities::{Direction, EdgeRef};
use crate::graph::application::ports::incoming::use_cases::{
    FollowCommand, FollowUserError, FollowUserUseCase, ListConnectionsError,
    ListConnectionsUseCase,
};
use crate::post::application::assembler::{PostView, PostsResponse};
use crate::post::application::domain::entities::PostId;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, CreatePostUseCase, GetPostError, GetPostUseCase,
    LikePostError, LikePostUseCase, ListLikersError, ListLikersUseCase, ListMentionsUseCase,
    ListPostsByAuthorUseCase, ListPostsError, ListRecentPostsUseCase, ListRepliesUseCase,
    SoftDeletePostError, SoftDeletePostUseCase,
};
use crate::tag::application::domain::entities::Tag;
use crate::tag::application::ports::incoming::use_cases::{
    GetTagError, GetTagUseCase, ListPostsByTagError, ListPostsByTagUseCase,
};
use crate::user::application::domain::entities::{
    PictureKind, User, UserId, UserRef, UserSummary,
};
use crate::user::application::ports::incoming::use_cases::{
    AddPictureError, AddPictureUseCase, CreateUserCommand, CreateUserError, CreateUserUseCase,
    GetUserByUsernameUseCase, GetUserError, GetUserUseCase, PictureUrlError, PictureUrlUseCase,
    SoftDeleteUserError, SoftDeleteUserUseCase,
};
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError};

// ──────────────────────────────────────────────────────────
// Fixtures
// ──────────────────────────────────────────────────────────

pub fn sample_user(username: &str) -> User {
    User {
        id: UserId::new(),
        username: username.to_string(),
        display_name: format!("{} (display)", username),
        biography: String::new(),
        verified: false,
        created_at: Utc::now(),
    }
}

pub fn sample_post_view(author: UserId) -> PostView {
    PostView {
        id: PostId::new(),
        content: "Morning run done #fitness".to_string(),
        likes: 0,
        replies: 0,
        reshares: 0,
        author,
        parent: None,
        tags: vec!["fitness".to_string()],
        created_at: Utc::now(),
    }
}

// ──────────────────────────────────────────────────────────
// Outgoing port stubs
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct StubUserQuery {
    users: Vec<User>,
    failure: Option<String>,
}

impl StubUserQuery {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            users: vec![],
            failure: Some(message.to_string()),
        }
    }

    fn check(&self) -> Result<(), UserQueryError> {
        match &self.failure {
            Some(msg) => Err(UserQueryError::DatabaseError(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError> {
        self.check()?;
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        self.check()?;
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<UserSummary>, UserQueryError> {
        self.check()?;
        Ok(self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(User::summary)
            .collect())
    }
}

// ──────────────────────────────────────────────────────────
// User use cases
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubCreateUserUseCase {
    result: Result<UserRef, CreateUserError>,
}

impl StubCreateUserUseCase {
    pub fn success(user: UserRef) -> Self {
        Self { result: Ok(user) }
    }

    pub fn failure(err: CreateUserError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubCreateUserUseCase {
    fn default() -> Self {
        Self::failure(CreateUserError::RepositoryError("not used".into()))
    }
}

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _command: CreateUserCommand) -> Result<UserRef, CreateUserError> {
        self.result.clone()
    }
}

/// Serves both lookups by id and by username.
#[derive(Clone)]
pub struct StubGetUserUseCase {
    result: Result<User, GetUserError>,
}

impl StubGetUserUseCase {
    pub fn success(user: User) -> Self {
        Self { result: Ok(user) }
    }

    pub fn failure(err: GetUserError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetUserUseCase {
    fn default() -> Self {
        Self::failure(GetUserError::QueryFailed("not used".into()))
    }
}

#[async_trait]
impl GetUserUseCase for StubGetUserUseCase {
    async fn execute(&self, _id: UserId) -> Result<User, GetUserError> {
        self.result.clone()
    }
}

#[async_trait]
impl GetUserByUsernameUseCase for StubGetUserUseCase {
    async fn execute(&self, _username: &str) -> Result<User, GetUserError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubSoftDeleteUserUseCase {
    result: Result<(), SoftDeleteUserError>,
}

impl StubSoftDeleteUserUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failure(err: SoftDeleteUserError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubSoftDeleteUserUseCase {
    fn default() -> Self {
        Self::failure(SoftDeleteUserError::RepositoryError("not used".into()))
    }
}

#[async_trait]
impl SoftDeleteUserUseCase for StubSoftDeleteUserUseCase {
    async fn execute(&self, _id: UserId) -> Result<(), SoftDeleteUserError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubPictureUrlUseCase {
    result: Result<String, PictureUrlError>,
}

impl StubPictureUrlUseCase {
    pub fn success(url: &str) -> Self {
        Self {
            result: Ok(url.to_string()),
        }
    }

    pub fn failure(err: PictureUrlError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubPictureUrlUseCase {
    fn default() -> Self {
        Self::failure(PictureUrlError::QueryFailed("not used".into()))
    }
}

#[async_trait]
impl PictureUrlUseCase for StubPictureUrlUseCase {
    async fn execute(&self, _username: &str, _kind: PictureKind) -> Result<String, PictureUrlError> {
        self.result.clone()
    }
}

#[derive(Clone, Default)]
pub struct StubAddPictureUseCase;

#[async_trait]
impl AddPictureUseCase for StubAddPictureUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _kind: PictureKind,
        _url: &str,
    ) -> Result<(), AddPictureError> {
        Err(AddPictureError::RepositoryError("not used".into()))
    }
}

// ──────────────────────────────────────────────────────────
// Graph use cases
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubFollowUserUseCase {
    result: Result<EdgeRef, FollowUserError>,
}

impl StubFollowUserUseCase {
    pub fn failure(err: FollowUserError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubFollowUserUseCase {
    fn default() -> Self {
        Self::failure(FollowUserError::StoreUnavailable("not used".into()))
    }
}

#[async_trait]
impl FollowUserUseCase for StubFollowUserUseCase {
    async fn execute(&self, _command: FollowCommand) -> Result<EdgeRef, FollowUserError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListConnectionsUseCase {
    result: Result<Vec<UserSummary>, ListConnectionsError>,
}

impl StubListConnectionsUseCase {
    pub fn success(users: Vec<UserSummary>) -> Self {
        Self { result: Ok(users) }
    }

    pub fn failure(err: ListConnectionsError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubListConnectionsUseCase {
    fn default() -> Self {
        Self::failure(ListConnectionsError::QueryFailed("not used".into()))
    }
}

#[async_trait]
impl ListConnectionsUseCase for StubListConnectionsUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _direction: Direction,
    ) -> Result<Vec<UserSummary>, ListConnectionsError> {
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// Post use cases
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubCreatePostUseCase {
    result: Result<PostView, CreatePostError>,
}

impl StubCreatePostUseCase {
    pub fn success(view: PostView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn failure(err: CreatePostError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubCreatePostUseCase {
    fn default() -> Self {
        Self::failure(CreatePostError::RepositoryError("not used".into()))
    }
}

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, _command: CreatePostCommand) -> Result<PostView, CreatePostError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetPostUseCase {
    result: Result<PostsResponse, GetPostError>,
}

impl StubGetPostUseCase {
    pub fn success(response: PostsResponse) -> Self {
        Self {
            result: Ok(response),
        }
    }

    pub fn failure(err: GetPostError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetPostUseCase {
    fn default() -> Self {
        Self::failure(GetPostError::QueryFailed("not used".into()))
    }
}

#[async_trait]
impl GetPostUseCase for StubGetPostUseCase {
    async fn execute(&self, _id: PostId) -> Result<PostsResponse, GetPostError> {
        self.result.clone()
    }
}

/// Answers every post listing with the same page and remembers the last
/// key and limit it was called with.
#[derive(Clone)]
pub struct StubListPostsUseCase {
    result: Result<PostsResponse, ListPostsError>,
    last_key: Arc<Mutex<Option<String>>>,
    last_limit: Arc<Mutex<Option<u64>>>,
}

impl StubListPostsUseCase {
    pub fn with_response(response: PostsResponse) -> Self {
        Self {
            result: Ok(response),
            last_key: Arc::default(),
            last_limit: Arc::default(),
        }
    }

    pub fn with_posts(posts: Vec<PostView>) -> Self {
        Self::with_response(PostsResponse {
            posts,
            users: vec![],
        })
    }

    pub fn failure(err: ListPostsError) -> Self {
        Self {
            result: Err(err),
            last_key: Arc::default(),
            last_limit: Arc::default(),
        }
    }

    pub fn last_key(&self) -> Option<String> {
        self.last_key.lock().unwrap().clone()
    }

    pub fn last_limit(&self) -> Option<u64> {
        *self.last_limit.lock().unwrap()
    }

    fn record(&self, key: Option<String>, limit: Option<u64>) {
        *self.last_key.lock().unwrap() = key;
        *self.last_limit.lock().unwrap() = limit;
    }

    fn posts(&self) -> Result<Vec<PostView>, ListPostsError> {
        self.result.clone().map(|r| r.posts)
    }
}

impl Default for StubListPostsUseCase {
    fn default() -> Self {
        Self::failure(ListPostsError::QueryFailed("not used".into()))
    }
}

#[async_trait]
impl ListRecentPostsUseCase for StubListPostsUseCase {
    async fn execute(&self, limit: Option<u64>) -> Result<PostsResponse, ListPostsError> {
        self.record(None, limit);
        self.result.clone()
    }
}

#[async_trait]
impl ListPostsByAuthorUseCase for StubListPostsUseCase {
    async fn execute(&self, author: &str) -> Result<Vec<PostView>, ListPostsError> {
        self.record(Some(author.to_string()), None);
        self.posts()
    }
}

#[async_trait]
impl ListRepliesUseCase for StubListPostsUseCase {
    async fn execute(
        &self,
        parent: PostId,
        limit: Option<u64>,
    ) -> Result<Vec<PostView>, ListPostsError> {
        self.record(Some(parent.to_string()), limit);
        self.posts()
    }
}

#[async_trait]
impl ListMentionsUseCase for StubListPostsUseCase {
    async fn execute(
        &self,
        username: &str,
        limit: Option<u64>,
    ) -> Result<Vec<PostView>, ListPostsError> {
        self.record(Some(username.to_string()), limit);
        self.posts()
    }
}

#[derive(Clone)]
pub struct StubLikePostUseCase {
    result: Result<(), LikePostError>,
}

impl StubLikePostUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failure(err: LikePostError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubLikePostUseCase {
    fn default() -> Self {
        Self::failure(LikePostError::RepositoryError("not used".into()))
    }
}

#[async_trait]
impl LikePostUseCase for StubLikePostUseCase {
    async fn execute(&self, _post: PostId, _user: UserId) -> Result<(), LikePostError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListLikersUseCase {
    result: Result<Vec<UserSummary>, ListLikersError>,
}

impl StubListLikersUseCase {
    pub fn success(users: Vec<UserSummary>) -> Self {
        Self { result: Ok(users) }
    }
}

impl Default for StubListLikersUseCase {
    fn default() -> Self {
        Self {
            result: Err(ListLikersError::QueryFailed("not used".into())),
        }
    }
}

#[async_trait]
impl ListLikersUseCase for StubListLikersUseCase {
    async fn execute(
        &self,
        _post: PostId,
        _limit: Option<u64>,
    ) -> Result<Vec<UserSummary>, ListLikersError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubSoftDeletePostUseCase {
    result: Result<(), SoftDeletePostError>,
}

impl StubSoftDeletePostUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn failure(err: SoftDeletePostError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubSoftDeletePostUseCase {
    fn default() -> Self {
        Self::failure(SoftDeletePostError::RepositoryError("not used".into()))
    }
}

#[async_trait]
impl SoftDeletePostUseCase for StubSoftDeletePostUseCase {
    async fn execute(&self, _id: PostId) -> Result<(), SoftDeletePostError> {
        self.result.clone()
    }
}

// ──────────────────────────────────────────────────────────
// Tag use cases
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubGetTagUseCase {
    result: Result<Tag, GetTagError>,
}

impl StubGetTagUseCase {
    pub fn success(tag: Tag) -> Self {
        Self { result: Ok(tag) }
    }

    pub fn failure(err: GetTagError) -> Self {
        Self { result: Err(err) }
    }
}

impl Default for StubGetTagUseCase {
    fn default() -> Self {
        Self::failure(GetTagError::QueryFailed("not used".into()))
    }
}

#[async_trait]
impl GetTagUseCase for StubGetTagUseCase {
    async fn execute(&self, _text: &str) -> Result<Tag, GetTagError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListPostsByTagUseCase {
    result: Result<Vec<PostView>, ListPostsByTagError>,
}

impl StubListPostsByTagUseCase {
    pub fn success(posts: Vec<PostView>) -> Self {
        Self { result: Ok(posts) }
    }
}

impl Default for StubListPostsByTagUseCase {
    fn default() -> Self {
        Self {
            result: Err(ListPostsByTagError::QueryFailed("not used".into())),
        }
    }
}

#[async_trait]
impl ListPostsByTagUseCase for StubListPostsByTagUseCase {
    async fn execute(
        &self,
        _text: &str,
        _limit: Option<u64>,
    ) -> Result<Vec<PostView>, ListPostsByTagError> {
        self.result.clone()
    }
}
