#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorStatus {
    #[default]
    None,
    Offline,
    Loaded,
    Outdated,
}

impl ConnectorStatus {
    pub fn is_loaded(self) -> bool {
        self == ConnectorStatus::Loaded
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConnectorStatus::None => "none",
            ConnectorStatus::Offline => "offline",
            ConnectorStatus::Loaded => "loaded",
            ConnectorStatus::Outdated => "outdated",
        }
    }
}
