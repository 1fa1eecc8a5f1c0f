//! Layer-übergreifende Bausteine: Optionen und Bezier-Geometrie.

pub mod bezier_geometry;
pub mod options;

pub use bezier_geometry::{bezier_chain, cubic_bezier_point, polyline_length, segments, CubicSegment};
pub use options::EditorOptions;
