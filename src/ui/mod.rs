//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state and the fixed-rate replay loop
//! - **[`input`]** — maps terminal events to replay commands
//! - **[`panes`]** — the frame viewport and the status bar
//! - **[`theme`]** — colors for everything that is not part of the frame itself
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Navigator`] and a [`Renderer`], then call [`App::run`].
//!
//! [`Navigator`]: crate::navigator::Navigator
//! [`Renderer`]: crate::render::Renderer
//! [`App::run`]: app::App::run

pub mod app;
pub mod input;
pub mod panes;
pub mod theme;

pub use app::App;
pub use input::{Command, KeyMap};
