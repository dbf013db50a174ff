mod create_post_use_case;
mod get_post_use_case;
mod like_post_use_case;
mod list_posts_use_case;
mod soft_delete_post_use_case;

pub use create_post_use_case::{
    CreatePostCommand, CreatePostCommandError, CreatePostError, CreatePostUseCase,
};
pub use get_post_use_case::{GetPostError, GetPostUseCase};
pub use like_post_use_case::{
    LikePostError, LikePostUseCase, ListLikersError, ListLikersUseCase, LIKERS_LIMIT,
};
pub use list_posts_use_case::{
    ListMentionsUseCase, ListPostsByAuthorUseCase, ListPostsError, ListRecentPostsUseCase,
    ListRepliesUseCase, AUTHOR_POSTS_LIMIT, MENTIONS_LIMIT, RECENT_POSTS_LIMIT, REPLIES_LIMIT,
};
pub use soft_delete_post_use_case::{SoftDeletePostError, SoftDeletePostUseCase};
