pub mod app;
pub mod components;
pub mod handler;
pub mod layout;
pub mod tui;
