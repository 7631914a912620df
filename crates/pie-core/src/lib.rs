// File: crates/pie-core/src/lib.rs
// Summary: Core library entry point; exports pie layout, arc parameters, hit testing, and selection.

pub mod arc;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod label;
pub mod layout;
pub mod pie;
pub mod selection;
pub mod series;
pub mod types;

pub use arc::{path_params, ArcParams, PaddedAngles};
pub use error::PieError;
pub use geometry::{ChartGeometry, Point};
pub use hit::hit_test;
pub use label::{floating_label, FloatingLabel};
pub use layout::{layout, layout_or_equal, layout_with, LayoutOptions, PieSort, WedgeDescriptor};
pub use pie::PieLayout;
pub use selection::{apply_hit, ItemSelected, SelectionState};
pub use series::DataItem;
pub use types::{ArcStyle, Margins, PieConfig};
