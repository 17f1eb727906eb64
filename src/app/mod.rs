//! Application state and logic

mod actions;
mod event;
mod input;
mod state;

pub use actions::Actions;
pub use event::{Event, Handler};
pub use input::InputState;
pub use state::{App, Mode, Pane, Request};
