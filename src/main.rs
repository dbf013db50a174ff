pub mod modules;
pub use modules::{graph, post, tag, user};
pub mod health;

mod api;
mod demo;
mod shared;

use crate::api::openapi::ApiDoc;
use crate::graph::adapter::outgoing::GraphStorePostgres;
use crate::graph::application::services::{FollowUserService, ListConnectionsService};
use crate::graph::application::GraphUseCases;
use crate::post::adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres};
use crate::post::application::services::{
    CreatePostService, GetPostService, LikePostService, ListLikersService, ListPostsService,
    SoftDeletePostService,
};
use crate::post::application::PostUseCases;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::config::AppConfig;
use crate::tag::adapter::outgoing::TagQueryPostgres;
use crate::tag::application::services::{GetTagService, ListPostsByTagService};
use crate::tag::application::TagUseCases;
use crate::user::adapter::outgoing::{
    PictureQueryPostgres, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::user::application::services::{
    AddPictureService, CreateUserService, GetUserService, PictureUrlService,
    SoftDeleteUserService,
};
use crate::user::application::UserUseCases;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
    pub graph: GraphUseCases,
    pub post: PostUseCases,
    pub tag: TagUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: &Arc<DatabaseConnection>) -> AppState {
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let picture_query = PictureQueryPostgres::new(Arc::clone(db));
    let graph_store = GraphStorePostgres::new(Arc::clone(db));
    let post_query = PostQueryPostgres::new(Arc::clone(db));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(db));
    let tag_query = TagQueryPostgres::new(Arc::clone(db));

    let get_user = Arc::new(GetUserService::new(user_query.clone()));
    let list_posts = Arc::new(ListPostsService::new(post_query.clone(), user_query.clone()));

    AppState {
        user: UserUseCases {
            create: Arc::new(CreateUserService::new(user_repo.clone())),
            get: get_user.clone(),
            get_by_username: get_user,
            soft_delete: Arc::new(SoftDeleteUserService::new(user_repo.clone())),
            picture_url: Arc::new(PictureUrlService::new(user_query.clone(), picture_query)),
            add_picture: Arc::new(AddPictureService::new(user_query.clone(), user_repo)),
        },
        graph: GraphUseCases {
            follow: Arc::new(FollowUserService::new(graph_store.clone())),
            connections: Arc::new(ListConnectionsService::new(graph_store, user_query.clone())),
        },
        post: PostUseCases {
            create: Arc::new(CreatePostService::new(post_repo.clone())),
            get: Arc::new(GetPostService::new(post_query.clone(), user_query)),
            recent: list_posts.clone(),
            by_author: list_posts.clone(),
            replies: list_posts.clone(),
            mentions: list_posts,
            like: Arc::new(LikePostService::new(post_repo.clone())),
            likers: Arc::new(ListLikersService::new(post_query.clone())),
            soft_delete: Arc::new(SoftDeletePostService::new(post_repo)),
        },
        tag: TagUseCases {
            get: Arc::new(GetTagService::new(tag_query.clone())),
            posts: Arc::new(ListPostsByTagService::new(tag_query, post_query)),
        },
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(config.db_connect_timeout)
        .acquire_timeout(config.db_acquire_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("failed to run migrations")?;
        info!("migrations applied");
    }

    let db_arc = Arc::new(conn);
    let state = build_state(&db_arc);

    if config.demo_mode {
        demo::seed(&state).await.context("demo seeding failed")?;
    }

    let (host, port) = config.bind_address();
    info!("Server run on: {}:{}", host, port);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::graph::adapter::incoming::web::routes as graph_routes;
    use crate::post::adapter::incoming::web::routes as post_routes;
    use crate::tag::adapter::incoming::web::routes as tag_routes;
    use crate::user::adapter::incoming::web::routes as user_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users: `by-username` paths first so they are not captured by `{id}`
    cfg.service(user_routes::get_user_by_username_handler);
    cfg.service(user_routes::profile_picture_handler);
    cfg.service(user_routes::bio_picture_handler);
    cfg.service(post_routes::list_mentions_handler);
    cfg.service(user_routes::create_user_handler);
    cfg.service(user_routes::get_user_handler);
    cfg.service(user_routes::soft_delete_user_handler);
    // Graph
    cfg.service(graph_routes::follow_user_handler);
    cfg.service(graph_routes::list_following_handler);
    cfg.service(graph_routes::list_followers_handler);
    // Posts
    cfg.service(post_routes::list_posts_by_author_handler);
    cfg.service(post_routes::create_post_handler);
    cfg.service(post_routes::list_recent_posts_handler);
    cfg.service(post_routes::get_post_handler);
    cfg.service(post_routes::soft_delete_post_handler);
    cfg.service(post_routes::list_replies_handler);
    cfg.service(post_routes::list_likers_handler);
    cfg.service(post_routes::like_post_handler);
    // Tags
    cfg.service(tag_routes::get_tag_handler);
    cfg.service(tag_routes::list_posts_by_tag_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
