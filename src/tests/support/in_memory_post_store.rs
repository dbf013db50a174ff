use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::post::application::domain::entities::{PostId, PostRecord};
use crate::post::application::ports::incoming::use_cases::CreatePostCommand;
use crate::post::application::ports::outgoing::{
    NewPostData, PostQuery, PostQueryError, PostRepository, PostRepositoryError,
};
use crate::tag::application::domain::entities::Tag;
use crate::tag::application::ports::outgoing::{TagQuery, TagQueryError};
use crate::user::application::domain::entities::{User, UserId, UserSummary};
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError};

struct StoredPost {
    record: PostRecord,
    deleted: bool,
    tags: Vec<Uuid>,
    mentions: Vec<UserId>,
}

#[derive(Default)]
struct PostState {
    users: Vec<User>,
    // Keyed by id, so iteration is creation order.
    posts: BTreeMap<PostId, StoredPost>,
    tags: HashMap<String, Uuid>,
    likes: Vec<(PostId, UserId)>,
    failure: Option<String>,
}

impl PostState {
    fn fail(&self) -> Option<String> {
        self.failure.clone()
    }

    fn user_active(&self, id: UserId) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    fn post_active(&self, id: PostId) -> bool {
        self.posts.get(&id).is_some_and(|p| !p.deleted)
    }

    fn active_posts(&self) -> impl DoubleEndedIterator<Item = &StoredPost> {
        self.posts.values().filter(|p| !p.deleted)
    }

    fn newest_first<'a>(
        &'a self,
        filter: impl Fn(&StoredPost) -> bool + 'a,
        limit: u64,
    ) -> Vec<PostRecord> {
        self.active_posts()
            .rev()
            .filter(|p| filter(p))
            .take(limit as usize)
            .map(|p| p.record.clone())
            .collect()
    }

    fn write(&mut self, data: NewPostData) -> Result<PostRecord, PostRepositoryError> {
        if !self.user_active(data.author) {
            return Err(PostRepositoryError::AuthorNotFound);
        }
        if let Some(parent) = data.parent {
            if !self.post_active(parent) {
                return Err(PostRepositoryError::ParentNotFound);
            }
        }

        let mut tags = Vec::new();
        for text in &data.tags {
            let id = *self.tags.entry(text.clone()).or_insert_with(Uuid::new_v4);
            if !tags.contains(&id) {
                tags.push(id);
            }
        }

        let mut mentions = Vec::new();
        for username in &data.mentions {
            if let Some(user) = self.users.iter().find(|u| &u.username == username) {
                if !mentions.contains(&user.id) {
                    mentions.push(user.id);
                }
            }
        }

        let record = PostRecord {
            id: data.id,
            author: data.author,
            parent: data.parent,
            content: data.content,
            reshares: 0,
            created_at: Utc::now(),
        };
        self.posts.insert(
            record.id,
            StoredPost {
                record: record.clone(),
                deleted: false,
                tags,
                mentions,
            },
        );

        Ok(record)
    }
}

/// Single in-memory store behind the post, tag and user read ports, so
/// services that join across them see one consistent state.
#[derive(Clone, Default)]
pub struct InMemoryPostStore {
    state: Arc<Mutex<PostState>>,
}

impl InMemoryPostStore {
    pub fn with_users(users: Vec<User>) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().users = users;
        store
    }

    /// Writes a post the way `create_post` does: explicit tags merged with
    /// hashtags, mentions resolved against known users.
    pub fn seed_post(
        &self,
        author: UserId,
        content: &str,
        parent: Option<PostId>,
        tags: &[&str],
    ) -> PostId {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        let command = CreatePostCommand::new(author, content, parent, &tags).unwrap();
        let data = NewPostData {
            id: PostId::new(),
            author,
            parent,
            content: command.content().to_string(),
            tags: command.tags().to_vec(),
            mentions: command.mentions().to_vec(),
        };

        self.state.lock().unwrap().write(data).unwrap().id
    }

    pub fn seed_like(&self, post: PostId, user: UserId) {
        self.state.lock().unwrap().likes.push((post, user));
    }

    pub fn seed_mention(&self, post: PostId, user: UserId) {
        let mut state = self.state.lock().unwrap();
        let stored = state.posts.get_mut(&post).unwrap();
        if !stored.mentions.contains(&user) {
            stored.mentions.push(user);
        }
    }

    pub fn seed_deleted(&self, post: PostId) {
        self.state.lock().unwrap().posts.get_mut(&post).unwrap().deleted = true;
    }

    pub fn records(&self, ids: &[PostId]) -> Vec<PostRecord> {
        let state = self.state.lock().unwrap();
        ids.iter()
            .map(|id| state.posts[id].record.clone())
            .collect()
    }

    pub fn post_count(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }

    /// Every subsequent port call fails with a database error carrying
    /// `message`.
    pub fn fail_with(&self, message: &str) {
        self.state.lock().unwrap().failure = Some(message.to_string());
    }
}

// ──────────────────────────────────────────────────────────
// PostQuery
// ──────────────────────────────────────────────────────────

#[async_trait]
impl PostQuery for InMemoryPostStore {
    async fn find_by_id(&self, id: PostId) -> Result<Option<PostRecord>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }
        Ok(state
            .posts
            .get(&id)
            .filter(|p| !p.deleted)
            .map(|p| p.record.clone()))
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<PostRecord>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }
        Ok(state.newest_first(|_| true, limit))
    }

    async fn list_by_author(
        &self,
        author: UserId,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }
        Ok(state.newest_first(move |p| p.record.author == author, limit))
    }

    async fn list_by_tag(
        &self,
        tag_id: Uuid,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }
        Ok(state.newest_first(move |p| p.tags.contains(&tag_id), limit))
    }

    async fn list_replies(
        &self,
        parent: PostId,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }
        Ok(state
            .active_posts()
            .filter(|p| p.record.parent == Some(parent))
            .take(limit as usize)
            .map(|p| p.record.clone())
            .collect())
    }

    async fn list_mentioning(
        &self,
        user: UserId,
        limit: u64,
    ) -> Result<Vec<PostRecord>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }
        Ok(state.newest_first(move |p| p.mentions.contains(&user), limit))
    }

    async fn like_counts(&self, ids: &[PostId]) -> Result<HashMap<PostId, u64>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }

        let mut counts = HashMap::new();
        for (post, user) in &state.likes {
            if ids.contains(post) && state.user_active(*user) {
                *counts.entry(*post).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn reply_counts(&self, ids: &[PostId]) -> Result<HashMap<PostId, u64>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }

        let mut counts = HashMap::new();
        for post in state.active_posts() {
            if let Some(parent) = post.record.parent.filter(|p| ids.contains(p)) {
                *counts.entry(parent).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    async fn tags_for(
        &self,
        ids: &[PostId],
    ) -> Result<HashMap<PostId, Vec<String>>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }

        let mut tags = HashMap::new();
        for id in ids {
            let Some(post) = state.posts.get(id) else {
                continue;
            };
            let mut texts: Vec<String> = state
                .tags
                .iter()
                .filter(|(_, tag_id)| post.tags.contains(tag_id))
                .map(|(text, _)| text.clone())
                .collect();
            if texts.is_empty() {
                continue;
            }
            texts.sort();
            tags.insert(*id, texts);
        }
        Ok(tags)
    }

    async fn list_likers(
        &self,
        post: PostId,
        limit: u64,
    ) -> Result<Vec<UserSummary>, PostQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostQueryError::DatabaseError(msg));
        }

        Ok(state
            .likes
            .iter()
            .filter(|(p, _)| *p == post)
            .filter_map(|(_, user)| state.users.iter().find(|u| u.id == *user))
            .take(limit as usize)
            .map(User::summary)
            .collect())
    }
}

// ──────────────────────────────────────────────────────────
// PostRepository
// ──────────────────────────────────────────────────────────

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn create_post(&self, data: NewPostData) -> Result<PostRecord, PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostRepositoryError::DatabaseError(msg));
        }
        state.write(data)
    }

    async fn like_post(&self, post: PostId, user: UserId) -> Result<(), PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostRepositoryError::DatabaseError(msg));
        }

        if !state.post_active(post) {
            return Err(PostRepositoryError::PostNotFound);
        }
        if !state.user_active(user) {
            return Err(PostRepositoryError::UserNotFound);
        }
        if state.likes.contains(&(post, user)) {
            return Err(PostRepositoryError::AlreadyLiked);
        }

        state.likes.push((post, user));
        Ok(())
    }

    async fn soft_delete_post(&self, id: PostId) -> Result<(), PostRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(PostRepositoryError::DatabaseError(msg));
        }

        match state.posts.get_mut(&id).filter(|p| !p.deleted) {
            Some(post) => {
                post.deleted = true;
                Ok(())
            }
            None => Err(PostRepositoryError::PostNotFound),
        }
    }
}

// ──────────────────────────────────────────────────────────
// TagQuery / UserQuery
// ──────────────────────────────────────────────────────────

#[async_trait]
impl TagQuery for InMemoryPostStore {
    async fn find_by_text(&self, text: &str) -> Result<Option<Tag>, TagQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(TagQueryError::DatabaseError(msg));
        }
        Ok(state.tags.get(text).map(|id| Tag {
            id: *id,
            text: text.to_string(),
        }))
    }
}

#[async_trait]
impl UserQuery for InMemoryPostStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<UserSummary>, UserQueryError> {
        let state = self.state.lock().unwrap();
        if let Some(msg) = state.fail() {
            return Err(UserQueryError::DatabaseError(msg));
        }
        Ok(state
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(User::summary)
            .collect())
    }
}
