pub mod pane;
pub mod sidebar;
pub mod spinner;
