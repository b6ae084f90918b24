//! TUI pane rendering modules
//!
//! - [`viewport`]: the replay frame, scaled into the terminal with half-block cells
//! - [`status`]: status bar with keybindings and replay position

pub mod status;
pub mod viewport;

pub use status::{render_status_bar, StatusRenderData};
pub use viewport::{place, Placement, Viewport};
