//! Demo data for `DEMO_MODE=true`.
//!
//! Everything goes through the same use cases the HTTP layer calls. Re-running
//! against an already seeded database skips what exists instead of failing.

use anyhow::{anyhow, Context};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::graph::application::ports::incoming::use_cases::{FollowCommand, FollowUserError};
use crate::post::application::ports::incoming::use_cases::{CreatePostCommand, LikePostError};
use crate::shared::unsplash::{bio_picture_url, profile_picture_url};
use crate::user::application::domain::entities::{PictureKind, UserId};
use crate::user::application::ports::incoming::use_cases::{CreateUserCommand, CreateUserError};
use crate::AppState;

struct DemoUser {
    username: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    bio: &'static str,
    profile_photo: &'static str,
    bio_photo: &'static str,
    verified: bool,
}

const USERS: [DemoUser; 6] = [
    DemoUser {
        username: "jdoe",
        first_name: "John",
        last_name: "Doe",
        bio: "Just a random guy testing out this platform",
        profile_photo: "lETfyhB8g4Q",
        bio_photo: "ukvgqriuOgo",
        verified: true,
    },
    DemoUser {
        username: "sjohnson",
        first_name: "Samantha",
        last_name: "Johnson",
        bio: "Marketing professional and social media enthusiast",
        profile_photo: "O3ymvT7Wf9U",
        bio_photo: "Nyvq2juw4_o",
        verified: true,
    },
    DemoUser {
        username: "mwilson",
        first_name: "Mike",
        last_name: "Wilson",
        bio: "Professional photographer and travel blogger",
        profile_photo: "hh3ViD0r0Rc",
        bio_photo: "LY1eyQMFeyo",
        verified: false,
    },
    DemoUser {
        username: "paula_g",
        first_name: "Paula",
        last_name: "Garcia",
        bio: "Entrepreneur and business owner",
        profile_photo: "cUKy1J3wzqg",
        bio_photo: "99SXcea3uOk",
        verified: true,
    },
    DemoUser {
        username: "tjones",
        first_name: "Tina",
        last_name: "Jones",
        bio: "Freelance writer and book lover",
        profile_photo: "zNWlX5Sw9a4",
        bio_photo: "f4845LpnSbs",
        verified: false,
    },
    DemoUser {
        username: "samantha_j",
        first_name: "Samantha",
        last_name: "Johnson",
        bio: "Marketing professional and social media enthusiast",
        profile_photo: "-zqoE7jnQgw",
        bio_photo: "KEHVSsRtnL0",
        verified: true,
    },
];

/// (author, content, liked by)
const POSTS: [(&str, &str, &[&str]); 8] = [
    (
        "jdoe",
        "Just finished a great hike in the mountains! #nature #adventure",
        &["sjohnson", "mwilson", "paula_g", "tjones"],
    ),
    (
        "sjohnson",
        "Can't wait for the weekend! Anyone up for a road trip? #roadtrip #friends",
        &["jdoe", "mwilson"],
    ),
    (
        "mwilson",
        "Just had the best sushi of my life! #foodie #yum",
        &["jdoe"],
    ),
    (
        "paula_g",
        "Who's ready for some live music tonight? #concert #music",
        &[],
    ),
    (
        "tjones",
        "Just landed in a new city! Excited to explore! #travel #citylife",
        &["sjohnson", "paula_g"],
    ),
    (
        "jdoe",
        "Who's ready for some football? #sports #gameon",
        &["sjohnson"],
    ),
    (
        "sjohnson",
        "Just finished reading a great book! #reading #bookworm",
        &[],
    ),
    (
        "mwilson",
        "Who's up for a round of golf this weekend? #golf #weekendfun",
        &["samantha_j"],
    ),
];

const FOLLOWS: [(&str, &str); 5] = [
    ("jdoe", "sjohnson"),
    ("jdoe", "mwilson"),
    ("sjohnson", "jdoe"),
    ("paula_g", "tjones"),
    ("tjones", "jdoe"),
];

#[cfg(not(tarpaulin_include))]
pub async fn seed(state: &AppState) -> anyhow::Result<()> {
    let ids = seed_users(state).await?;
    seed_follows(state, &ids).await?;
    seed_posts(state, &ids).await?;
    info!("demo data ready");
    Ok(())
}

async fn seed_users(state: &AppState) -> anyhow::Result<HashMap<&'static str, UserId>> {
    let mut ids = HashMap::new();

    for demo in &USERS {
        let mut command = CreateUserCommand::new(demo.username, demo.first_name, demo.last_name)
            .with_context(|| format!("invalid demo user {}", demo.username))?
            .with_biography(demo.bio);
        if demo.verified {
            command = command.mark_verified();
        }

        match state.user.create.execute(command).await {
            Ok(created) => {
                let pictures = [
                    (PictureKind::Profile, profile_picture_url(demo.profile_photo)),
                    (PictureKind::Bio, bio_picture_url(demo.bio_photo)),
                ];
                for (kind, url) in pictures {
                    state
                        .user
                        .add_picture
                        .execute(created.id, kind, &url)
                        .await
                        .with_context(|| format!("picture for {}", demo.username))?;
                }
                info!(username = demo.username, "demo user created");
                ids.insert(demo.username, created.id);
            }
            Err(CreateUserError::UsernameTaken) => {
                warn!(username = demo.username, "demo user exists, skipping");
                let existing = state
                    .user
                    .get_by_username
                    .execute(demo.username)
                    .await
                    .with_context(|| format!("lookup of {}", demo.username))?;
                ids.insert(demo.username, existing.id);
            }
            Err(e) => return Err(anyhow!(e).context(format!("create {}", demo.username))),
        }
    }

    Ok(ids)
}

async fn seed_follows(
    state: &AppState,
    ids: &HashMap<&'static str, UserId>,
) -> anyhow::Result<()> {
    for (actor, target) in FOLLOWS {
        let command = FollowCommand::new(
            &id_of(ids, actor)?.to_string(),
            &id_of(ids, target)?.to_string(),
        )?;

        match state.graph.follow.execute(command).await {
            Ok(_) => {}
            Err(FollowUserError::AlreadyFollowing) => {
                warn!(actor, target, "demo follow exists, skipping");
            }
            Err(e) => return Err(anyhow!(e).context(format!("{actor} follows {target}"))),
        }
    }
    Ok(())
}

async fn seed_posts(state: &AppState, ids: &HashMap<&'static str, UserId>) -> anyhow::Result<()> {
    // Posts carry fresh ids, so a non-empty timeline means they were seeded before.
    let existing = state.post.recent.execute(Some(1)).await?;
    if !existing.posts.is_empty() {
        warn!("posts already present, skipping demo posts");
        return Ok(());
    }

    for (author, content, liked_by) in POSTS {
        let command = CreatePostCommand::new(id_of(ids, author)?, content, None, &[])?;
        let post = state.post.create.execute(command).await?;

        for fan in liked_by {
            match state.post.like.execute(post.id, id_of(ids, fan)?).await {
                Ok(()) | Err(LikePostError::AlreadyLiked) => {}
                Err(e) => return Err(anyhow!(e).context(format!("{fan} likes {}", post.id))),
            }
        }
        info!(author, post_id = %post.id, "demo post created");
    }
    Ok(())
}

fn id_of(ids: &HashMap<&'static str, UserId>, username: &str) -> anyhow::Result<UserId> {
    ids.get(username)
        .copied()
        .ok_or_else(|| anyhow!("demo user {username} was not seeded"))
}
