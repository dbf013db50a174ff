mod get_tag;

pub use get_tag::*;
