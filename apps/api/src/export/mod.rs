pub mod format;
pub mod handlers;
pub mod pdf;
