pub mod gesture;
pub mod keys;

pub use gesture::{AxisSample, ControllerId, GestureAccumulator, GestureConfig};
pub use keys::{Command, InputHandler};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
