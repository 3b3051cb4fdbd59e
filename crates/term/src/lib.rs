//! Terminal rendering module.
//!
//! Renders the grid into a simple framebuffer that is then diff-flushed to a
//! terminal backend. The view layer is pure (no I/O) and unit-testable; only
//! [`renderer::TerminalRenderer`] touches stdout.
//!
//! Rendering is strictly read-only over the core: it runs between simulation
//! steps and never mutates the game.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_boulders_core as core;
pub use tui_boulders_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, ScreenCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
