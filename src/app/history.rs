//! Undo/Redo über Momentaufnahmen der drei Achsen-Kurven.

use crate::core::{Axis, SamplePoint};
use crate::host::AnimationCurves;

/// Momentaufnahme der Achsen-Kurven vor einer mutierenden Operation.
///
/// Die Kurven eines Bewegungspfads sind klein (dutzende Keys), ein
/// vollständiger Klon pro Mutation ist billig und hält die History einfach.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Achsen-Kurven zum Zeitpunkt der Aufnahme (X, Y, Z)
    pub curves: [Vec<SamplePoint>; 3],
    /// Beschriftung der Operation, vor der aufgenommen wurde
    pub label: &'static str,
}

impl Snapshot {
    /// Nimmt den aktuellen Kurvenstand eines Clips auf.
    pub fn capture<C: AnimationCurves>(clip: &C, label: &'static str) -> Self {
        let curves = Axis::ALL.map(|axis| clip.axis_curve(axis).unwrap_or_default());
        Self { curves, label }
    }

    /// Stellt den aufgenommenen Stand im Clip wieder her.
    pub fn apply_to<C: AnimationCurves>(self, clip: &mut C) {
        let [x, y, z] = self.curves;
        clip.set_axis_curve(Axis::X, x);
        clip.set_axis_curve(Axis::Y, y);
        clip.set_axis_curve(Axis::Z, z);
        clip.mark_modified();
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen Snapshot in den Undo-Stack auf (vor der Mutation aufrufen).
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        log::debug!("History: Snapshot '{}' aufgenommen", snap.label);
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Verwirft beide Stacks (z.B. beim Ressourcen-Wechsel).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop vom Undo-Stack; `current` wandert auf den Redo-Stack.
    /// Gibt den wiederherzustellenden Snapshot zurück (Anwenden macht der Aufrufer).
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(prev) = self.undo_stack.pop() {
            if self.redo_stack.len() >= self.max_depth {
                self.redo_stack.remove(0);
            }
            self.redo_stack.push(current);
            Some(prev)
        } else {
            None
        }
    }

    /// Pop vom Redo-Stack; `current` wandert auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(next) = self.redo_stack.pop() {
            if self.undo_stack.len() >= self.max_depth {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }
}
