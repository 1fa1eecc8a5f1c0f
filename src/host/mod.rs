//! Host-Grenze: Schnittstelle zum Animationsmodell des Hosts.

pub mod clip;

pub use clip::{read_motion_path, write_motion_path, AnimationClip, AnimationCurves};
