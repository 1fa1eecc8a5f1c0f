//! Interaktive Edit-Session: die Reconciliation-Schleife pro Frame.
//!
//! Die Session besitzt die abgeleitete Kontrollpunkt-Sicht und gleicht sie
//! einmal pro visueller Auffrischung mit den Eingaben der Zeichenfläche ab:
//! Handle-Verschiebungen anwenden (inklusive Spiegelung und Snapping),
//! Insert-/Delete-Gesten auflösen (höchstens ein Struktur-Edit pro Runde,
//! Delete gewinnt) und das Ergebnis über die inverse Konvertierung in die
//! Achsen-Kurven des Clips persistieren.


use crate::app::gesture::{GestureKind, GestureState};
use crate::app::history::{EditHistory, Snapshot};
use crate::core::{
    apply_bezier, mirror_through, snap_to_grid, to_bezier, BezierPoint, ControlPoint, PathError,
    PointId,
};
use crate::host::{read_motion_path, write_motion_path, AnimationCurves};
use crate::shared::bezier_geometry::{segments, CubicSegment};
use crate::shared::EditorOptions;
use glam::Vec3;

/// Welches Handle eines Kontrollpunkts eine Eingabe betrifft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Der Kontrollpunkt selbst
    Position,
    /// Handle der eingehenden Kurve
    InHandle,
    /// Handle der ausgehenden Kurve
    OutHandle,
}

/// Eine von der Eingabefläche bereits aufgelöste Handle-Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleUpdate {
    /// Betroffener Kontrollpunkt
    pub id: PointId,
    /// Betroffenes Handle
    pub handle: HandleKind,
    /// Neue Weltposition des Handles
    pub position: Vec3,
}

/// Eine erkannte Geste auf dem Primär-Handle eines Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEvent {
    /// Betroffener Kontrollpunkt
    pub id: PointId,
    /// Art der Geste
    pub kind: GestureKind,
}

/// Eingaben einer Reconciliation-Runde.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Neue Handle-Positionen (in Eingabereihenfolge)
    pub updates: Vec<HandleUpdate>,
    /// Erkannte Struktur-Gesten
    pub gestures: Vec<GestureEvent>,
}

/// In einer Runde ausgeführter Struktur-Edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralEdit {
    /// Neuer Punkt wurde vor `index` eingefügt
    Inserted { index: usize, id: PointId },
    /// Punkt an `index` wurde gelöscht
    Deleted { index: usize, id: PointId },
}

/// Ergebnis einer Reconciliation-Runde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileOutcome {
    /// Wurde irgendetwas am Pfad geändert (Handles oder Struktur)?
    pub changed: bool,
    /// Ausgeführter Struktur-Edit, falls vorhanden
    pub edit: Option<StructuralEdit>,
}

/// Die Edit-Session eines Bewegungspfads.
#[derive(Debug)]
pub struct EditSession {
    points: Vec<ControlPoint>,
    stale: bool,
    next_id: u64,
    last_inserted: Option<PointId>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Erstellt eine Session ohne Sicht; der erste Abgleich baut sie auf.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            stale: true,
            next_id: 0,
            last_inserted: None,
        }
    }

    /// Read-only Zugriff auf die Kontrollpunkt-Sicht.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Baut die Segment-Folge für die Zeichenfläche.
    pub fn segments(&self) -> Vec<CubicSegment> {
        let beziers: Vec<BezierPoint> = self.points.iter().map(|p| p.point).collect();
        segments(&beziers)
    }

    /// Id des zuletzt eingefügten Punkts (für Fokus-Übernahme im Frontend).
    pub fn last_inserted(&self) -> Option<PointId> {
        self.last_inserted
    }

    /// Markiert die Sicht als veraltet (Ressourcen-Wechsel, Undo/Redo,
    /// expliziter Neuzeichnen-Wunsch). Der nächste Abgleich baut sie neu auf.
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Verwirft die Sicht vollständig, ohne sie zu synchronisieren
    /// (Bearbeitung wurde ausgeschaltet).
    pub fn clear(&mut self) {
        self.points.clear();
        self.stale = true;
        self.last_inserted = None;
    }

    /// Prüft ob die Sicht vor dem nächsten Abgleich neu aufgebaut wird.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Baut die Kontrollpunkt-Sicht aus dem Clip neu auf (frische Ids).
    pub fn rebuild<C: AnimationCurves>(&mut self, clip: &C) -> Result<(), PathError> {
        let path = read_motion_path(clip)?;
        self.adopt_view(to_bezier(&path));
        log::debug!("Session-Sicht neu aufgebaut ({} Punkte)", self.points.len());
        Ok(())
    }

    /// Eine Reconciliation-Runde: Eingaben anwenden, Gesten auflösen,
    /// Ergebnis in den Clip persistieren.
    ///
    /// Eine veraltete Sicht wird zu Beginn der Runde neu aufgebaut; ebenso
    /// eine Sicht, deren Länge nicht mehr zum Clip passt (externe Änderung
    /// an den Kurven, die nicht über diese Engine lief).
    pub fn reconcile<C: AnimationCurves>(
        &mut self,
        clip: &mut C,
        input: &FrameInput,
        options: &EditorOptions,
        history: &mut EditHistory,
    ) -> Result<ReconcileOutcome, PathError> {
        if self.stale {
            self.rebuild(clip)?;
        }
        let mut path = read_motion_path(clip)?;
        if path.len() != self.points.len() {
            log::warn!(
                "Sicht ({} Punkte) passt nicht zum Clip ({} Keys) — baue neu auf",
                self.points.len(),
                path.len()
            );
            self.adopt_view(to_bezier(&path));
        }
        self.last_inserted = None;

        // Gesten-Zustände pro Punkt einsammeln (Erkennung getrennt von Mutation)
        let mut gestures = vec![GestureState::default(); self.points.len()];
        for event in &input.gestures {
            if let Some(i) = self.index_of(event.id) {
                gestures[i].trigger(event.kind);
            }
        }

        let count = self.points.len();
        let mut moved = false;
        let mut pending_delete: Option<usize> = None;
        let mut pending_insert: Option<(usize, Vec3)> = None;

        for i in 0..count {
            let id = self.points[i].id;
            for update in input.updates.iter().filter(|u| u.id == id) {
                moved |= self.apply_update(i, count, update, options);
            }

            match gestures[i].pending() {
                Some(GestureKind::Delete) => {
                    // Delete gewinnt und bricht die Punkt-Verarbeitung der Runde ab
                    gestures[i].apply();
                    pending_delete = Some(i);
                    break;
                }
                Some(GestureKind::InsertBefore) if pending_insert.is_none() => {
                    gestures[i].apply();
                    pending_insert = Some((i, self.points[i].point.position));
                }
                _ => {}
            }
        }

        let will_edit = pending_delete.is_some() || pending_insert.is_some();
        if !moved && !will_edit {
            return Ok(ReconcileOutcome::default());
        }

        // Snapshot VOR Mutation
        let label = if pending_delete.is_some() {
            "Key löschen"
        } else if pending_insert.is_some() {
            "Key einfügen"
        } else {
            "Pfad bearbeiten"
        };
        history.record_snapshot(Snapshot::capture(clip, label));

        // Handle-Edits über die inverse Konvertierung in die Keys schreiben
        let beziers: Vec<BezierPoint> = self.points.iter().map(|p| p.point).collect();
        apply_bezier(&mut path, &beziers)?;

        // Höchstens ein Struktur-Edit pro Runde, Delete hat Vorrang
        let mut edit = None;
        if let Some(index) = pending_delete {
            let id = self.points[index].id;
            path.delete_key(index, options.shift_time);
            self.points.remove(index);
            edit = Some(StructuralEdit::Deleted { index, id });
        } else if let Some((index, position)) = pending_insert {
            let index = path.insert_key(index, position, options.shift_time);
            let id = self.alloc_id();
            self.points.insert(index, ControlPoint::new(id, position));
            self.last_inserted = Some(id);
            edit = Some(StructuralEdit::Inserted { index, id });
        }

        if edit.is_some() {
            // Nach einem Struktur-Edit hängen die Nachbar-Handles an neuen
            // Zeitabständen — Sicht aus dem Pfad neu ableiten, Ids behalten
            for (cp, fresh) in self.points.iter_mut().zip(to_bezier(&path)) {
                cp.point = fresh;
            }
        }

        write_motion_path(clip, &path);
        clip.mark_modified();

        Ok(ReconcileOutcome {
            changed: true,
            edit,
        })
    }

    /// Wendet eine Handle-Eingabe auf Punkt `index` an.
    /// Gibt `true` zurück wenn sich tatsächlich etwas bewegt hat.
    fn apply_update(
        &mut self,
        index: usize,
        count: usize,
        update: &HandleUpdate,
        options: &EditorOptions,
    ) -> bool {
        let snapped = if options.handles_snapping {
            snap_to_grid(update.position, options.handles_snap_distance)
        } else {
            update.position
        };
        let point = &mut self.points[index].point;

        match update.handle {
            HandleKind::Position => {
                let delta = snapped - point.position;
                if delta == Vec3::ZERO {
                    return false;
                }
                // Handles wandern mit der Position mit
                point.position = snapped;
                point.in_handle += delta;
                point.out_handle += delta;
                true
            }
            HandleKind::InHandle => {
                // Der erste Punkt hat kein In-Handle
                if index == 0 || snapped == point.in_handle {
                    return false;
                }
                point.in_handle = snapped;
                if index + 1 < count {
                    point.out_handle = mirror_through(point.position, snapped);
                }
                true
            }
            HandleKind::OutHandle => {
                // Der letzte Punkt hat kein Out-Handle
                if index + 1 >= count || snapped == point.out_handle {
                    return false;
                }
                point.out_handle = snapped;
                if index > 0 {
                    point.in_handle = mirror_through(point.position, snapped);
                }
                true
            }
        }
    }

    /// Übernimmt eine frisch abgeleitete Bezier-Folge mit frischen Ids.
    fn adopt_view(&mut self, beziers: Vec<BezierPoint>) {
        let mut points = Vec::with_capacity(beziers.len());
        for point in beziers {
            let id = self.alloc_id();
            points.push(ControlPoint { id, point });
        }
        self.points = points;
        self.stale = false;
    }

    fn alloc_id(&mut self) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: PointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }
}
