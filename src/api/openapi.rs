use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiError;
use utoipa::OpenApi;

use crate::graph::application::domain::entities::{EdgeLabel, EdgeRef};
use crate::post::adapter::incoming::web::routes::CreatePostRequest;
use crate::post::application::assembler::{PostView, PostsResponse};
use crate::tag::application::domain::entities::Tag;
use crate::user::adapter::incoming::web::routes::CreateUserRequest;
use crate::user::application::domain::entities::{User, UserRef, UserSummary};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Backend API",
        version = "1.0.0",
        description = "Users, follow graph, posts, likes and tags"
    ),
    paths(
        // User endpoints
        crate::user::adapter::incoming::web::routes::create_user_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,
        crate::user::adapter::incoming::web::routes::get_user_by_username_handler,
        crate::user::adapter::incoming::web::routes::soft_delete_user_handler,
        crate::user::adapter::incoming::web::routes::profile_picture_handler,
        crate::user::adapter::incoming::web::routes::bio_picture_handler,

        // Graph endpoints
        crate::graph::adapter::incoming::web::routes::follow_user_handler,
        crate::graph::adapter::incoming::web::routes::list_following_handler,
        crate::graph::adapter::incoming::web::routes::list_followers_handler,

        // Post endpoints
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::get_post_handler,
        crate::post::adapter::incoming::web::routes::list_recent_posts_handler,
        crate::post::adapter::incoming::web::routes::list_posts_by_author_handler,
        crate::post::adapter::incoming::web::routes::list_replies_handler,
        crate::post::adapter::incoming::web::routes::list_mentions_handler,
        crate::post::adapter::incoming::web::routes::like_post_handler,
        crate::post::adapter::incoming::web::routes::list_likers_handler,
        crate::post::adapter::incoming::web::routes::soft_delete_post_handler,

        // Tag endpoints
        crate::tag::adapter::incoming::web::routes::get_tag_handler,
        crate::tag::adapter::incoming::web::routes::list_posts_by_tag_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PostsResponse>,
            ErrorResponse,
            ApiError,

            // Users
            CreateUserRequest,
            User,
            UserRef,
            UserSummary,

            // Graph
            EdgeRef,
            EdgeLabel,

            // Posts
            CreatePostRequest,
            PostView,
            PostsResponse,

            // Tags
            Tag
        )
    ),
    tags(
        (name = "users", description = "User accounts and pictures"),
        (name = "graph", description = "Follow relations between users"),
        (name = "posts", description = "Posts, replies, mentions and likes"),
        (name = "tags", description = "Hashtag lookups"),
    )
)]
pub struct ApiDoc;
