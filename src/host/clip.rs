//! Host-Schnittstelle zum Animationsmodell und ein In-Memory-Clip.

use crate::core::{Axis, MotionPath, PathError, SamplePoint};
use glam::Vec3;

/// Schnittstelle zum Host-Animationsmodell.
///
/// Die Engine liest und schreibt Achsen-Kurven ausschließlich über diesen
/// Seam — pro Reconciliation-Runde einmal vollständig lesen, rechnen,
/// vollständig zurückschreiben.
pub trait AnimationCurves {
    /// Liefert die Kurve einer Achse (None wenn die Property fehlt).
    fn axis_curve(&self, axis: Axis) -> Option<Vec<SamplePoint>>;
    /// Übernimmt die Kurve einer Achse vollständig.
    fn set_axis_curve(&mut self, axis: Axis, samples: Vec<SamplePoint>);
    /// Markiert die Ressource als geändert.
    fn mark_modified(&mut self);
}

/// Liest alle drei Achsen-Kurven und verschmilzt sie zu einem Pfad.
///
/// Fehlende Kurven gelten als leer; ein komplett leerer Clip ergibt einen
/// leeren Pfad (gültiger Endzustand).
pub fn read_motion_path<C: AnimationCurves>(clip: &C) -> Result<MotionPath, PathError> {
    let x = clip.axis_curve(Axis::X).unwrap_or_default();
    let y = clip.axis_curve(Axis::Y).unwrap_or_default();
    let z = clip.axis_curve(Axis::Z).unwrap_or_default();
    MotionPath::from_axis_curves(&x, &y, &z)
}

/// Schreibt einen Pfad als drei Achsen-Kurven in den Clip zurück.
pub fn write_motion_path<C: AnimationCurves>(clip: &mut C, path: &MotionPath) {
    for axis in Axis::ALL {
        clip.set_axis_curve(axis, path.axis_curve(axis));
    }
}

/// In-Memory-Animationsclip mit drei Positions-Kurven.
///
/// Dient Tests und Hosts ohne eigenes Animationsmodell als
/// Standard-Implementierung der [`AnimationCurves`]-Schnittstelle.
#[derive(Debug, Clone, Default)]
pub struct AnimationClip {
    /// Anzeigename des Clips
    pub name: String,
    curves: [Vec<SamplePoint>; 3],
    modified: bool,
}

impl AnimationClip {
    /// Erstellt einen leeren Clip.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            curves: Default::default(),
            modified: false,
        }
    }

    /// Prüft ob der Clip keine Keys trägt.
    pub fn is_empty(&self) -> bool {
        self.curves.iter().all(|c| c.is_empty())
    }

    /// Gibt zurück, ob der Clip seit dem letzten Reset geändert wurde.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Setzt das Geändert-Flag zurück (nach dem Persistieren durch den Host).
    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    /// Erstellt den Standard-Pfad für einen leeren Clip:
    /// zwei Keys bei t=0 und t=1, Positionen (−2, 0, 0) und (2, 0, 0).
    pub fn create_default_path(&mut self) {
        let start = Vec3::new(-2.0, 0.0, 0.0);
        let end = Vec3::new(2.0, 0.0, 0.0);

        for axis in Axis::ALL {
            let c = axis.component();
            self.curves[c] = vec![
                SamplePoint::new(0.0, start[c]),
                SamplePoint::new(1.0, end[c]),
            ];
        }
        self.modified = true;
        log::info!("Standard-Pfad für leeren Clip '{}' erstellt", self.name);
    }
}

impl AnimationCurves for AnimationClip {
    fn axis_curve(&self, axis: Axis) -> Option<Vec<SamplePoint>> {
        Some(self.curves[axis.component()].clone())
    }

    fn set_axis_curve(&mut self, axis: Axis, samples: Vec<SamplePoint>) {
        self.curves[axis.component()] = samples;
    }

    fn mark_modified(&mut self) {
        self.modified = true;
    }
}
