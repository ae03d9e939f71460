pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod library;
pub mod nav;
pub mod pane;
pub mod scene;
pub mod search;
pub mod ui;
pub mod util;
