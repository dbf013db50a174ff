pub mod content;
pub mod entities;
