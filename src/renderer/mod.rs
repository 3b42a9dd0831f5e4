//! Rendering module
//!
//! Scene and HUD drawing over an abstract `Surface`. Frontends supply the
//! surface; `DrawList` records frames for headless runs and tests.

pub mod draw_list;
pub mod scene;
pub mod surface;

pub use draw_list::{DrawCommand, DrawList};
pub use scene::{draw_frame, draw_hud};
pub use surface::{Half, Surface, TextStyle};
