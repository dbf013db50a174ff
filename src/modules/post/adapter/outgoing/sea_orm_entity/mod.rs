pub mod post_likes;
pub mod post_mentions;
pub mod post_tags;
pub mod posts;
