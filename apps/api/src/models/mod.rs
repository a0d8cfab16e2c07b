pub mod content;
pub mod resume;
pub mod theme;
pub mod user;
