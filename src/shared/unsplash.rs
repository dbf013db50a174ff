//! Demo pictures are hosted on Unsplash and addressed by photo id.

const BASE_URL: &str = "https://unsplash.com/photos";

pub fn profile_picture_url(photo_id: &str) -> String {
    download_url(photo_id, 200)
}

pub fn bio_picture_url(photo_id: &str) -> String {
    download_url(photo_id, 1080)
}

fn download_url(photo_id: &str, width: u32) -> String {
    format!(
        "{}/{}/download?w={}",
        BASE_URL,
        urlencoding::encode(photo_id),
        width
    )
}
