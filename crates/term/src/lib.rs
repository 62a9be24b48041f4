//! Terminal front-end for the miner scene.
//!
//! A small, game-oriented renderer: the scene adapter's draw list is rasterised
//! into a framebuffer of styled characters, which is then diffed against the
//! previous frame and flushed with crossterm. No widget or layout library sits in
//! between.
//!
//! - [`scene_view`]: pure draw-list -> framebuffer rasteriser (unit-testable)
//! - [`fb`]: the framebuffer and its styles
//! - [`renderer`]: terminal mode handling and diff encoding

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use tui_miner_scene as scene;
pub use tui_miner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
pub use scene_view::{AnchorY, SceneView, StatusView, Viewport};
