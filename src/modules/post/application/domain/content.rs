//! Hashtag and mention extraction from post bodies.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tag::application::domain::entities::normalize_tag;
use crate::user::application::domain::entities::validate_username;

static HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^\w#])#(\w+)").expect("hashtag pattern is valid"));

static MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^\w@])@([A-Za-z0-9_.]+)").expect("mention pattern is valid"));

/// Normalized hashtags in order of first appearance. Tags that fail
/// normalization (too long, non-ASCII) are skipped.
pub fn extract_hashtags(content: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for cap in HASHTAG.captures_iter(content) {
        if let Ok(tag) = normalize_tag(&cap[1]) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}

/// Mentioned usernames in order of first appearance. A trailing `.` is
/// treated as punctuation.
pub fn extract_mentions(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in MENTION.captures_iter(content) {
        let raw = cap[1].trim_end_matches('.');
        if let Ok(name) = validate_username(raw) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}
