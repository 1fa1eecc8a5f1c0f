//! Core-Domänentypen: Sample-Kurven, Bewegungspfad, Bezier-Sicht und
//! Konvertierung.

pub mod bezier;
pub mod convert;
pub mod path;
pub mod sample;
pub mod tangent;

pub use bezier::{BezierPoint, ControlPoint, PointId};
pub use convert::{apply_bezier, to_bezier};
pub use path::{MotionPath, PathError, PathKey, TIME_EPSILON};
pub use sample::{Axis, SamplePoint};
pub use tangent::{mirror_through, snap_to_grid};
