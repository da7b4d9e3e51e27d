//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: the view draws into a plain
//! framebuffer of styled character cells, and the renderer flushes that to
//! the terminal. Keeping the view pure makes the board layout - and the
//! click hit test that depends on it - unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod toast;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use toast::{Toast, ToastKind, Toasts};
