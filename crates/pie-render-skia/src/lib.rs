// File: crates/pie-render-skia/src/lib.rs
// Summary: Skia renderer crate; draws a pie-core layout to PNG or RGBA8 buffers.

pub mod chart;
pub mod text;
pub mod theme;

pub use chart::{RenderOptions, RenderPie};
pub use text::TextShaper;
pub use theme::Theme;
