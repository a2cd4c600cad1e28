pub mod app;
pub mod cache;
pub mod github;
pub mod ui;
pub mod util;
