pub mod fixture;
pub mod memory;
pub mod model;
pub mod provider;
pub mod status;

pub use memory::MemoryLibrary;
pub use provider::{LibraryProvider, SearchResults};
pub use status::ConnectorStatus;
