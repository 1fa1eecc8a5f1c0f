//! Motion-Path-Editor-Engine.
//!
//! Hält die drei Achsen-Keyframe-Kurven eines Animationsclips
//! (`localPosition.x/y/z`) synchron mit einer interaktiven
//! 3D-Bezier-Kontrollpunkt-Sicht. Handle-Verschiebungen werden über die
//! Hermite↔Bezier-Beziehung in Tangenten zurückgerechnet, Struktur-Edits
//! (Key einfügen/löschen) verschieben die Zeiten der nachfolgenden Keys,
//! alle Mutationen laufen über Snapshots durch die Undo-History.
//!
//! Schichten:
//! - [`core`] — Pfad-Modell, Hermite↔Bezier-Konvertierung, Tangenten-Helfer
//! - [`host`] — Seam zum Animationsmodell des Hosts plus In-Memory-Clip
//! - [`app`] — Edit-Session (Reconciliation pro Frame), Gesten, History
//! - [`shared`] — Optionen und Bezier-Zeichengeometrie

pub mod app;
pub mod core;
pub mod host;
pub mod shared;

pub use self::app::{EditorState, FrameInput, GestureEvent, GestureKind, HandleKind, HandleUpdate};
pub use self::core::{BezierPoint, ControlPoint, MotionPath, PathError, PointId};
pub use self::host::{AnimationClip, AnimationCurves};
pub use self::shared::EditorOptions;
