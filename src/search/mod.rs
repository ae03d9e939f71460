pub mod debounce;

pub use debounce::{SELECTION_DELAY, SearchDebouncer, TYPE_AHEAD_DELAY};
