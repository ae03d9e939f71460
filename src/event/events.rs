use std::sync::Arc;

use crate::{
    input::{
        gesture::{AxisSample, ControllerId},
        Direction,
    },
    library::{
        ConnectorStatus, SearchResults,
        model::{Entity, Snapshot},
    },
    nav::route::Route,
};

#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    // Library
    LibraryUpdated(Arc<Snapshot>),
    EntityUpdated(Entity),
    ConnectorStatusChanged(ConnectorStatus),

    // Input
    ControllerConnected(ControllerId),
    ControllerDisconnected(ControllerId),
    Axis(ControllerId, AxisSample),
    Direction(Direction),

    // Navigation
    SelectSidebar(Route),
    Open(Route),
    Back,

    // Search
    QueryChanged(String),
    SearchResults { generation: u64, results: SearchResults },
    SearchCleared { generation: u64 },
}
