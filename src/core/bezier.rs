//! Bezier-Kontrollpunkt-Modell: die abgeleitete 3D-Sicht auf einen Pfad-Key.

use glam::Vec3;

/// Stabile Identität eines Kontrollpunkts innerhalb einer Edit-Session.
///
/// Ids werden von der Session fortlaufend vergeben und überleben
/// Struktur-Edits — ein eingefügter Punkt bekommt eine frische Id, alle
/// anderen behalten ihre. Damit kann ein Frontend den Fokus nach einem
/// Insert deterministisch auf den neuen Punkt setzen, statt auf das
/// Control, das zufällig an der alten Listenposition steht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

/// Ein 3D-Kontrollpunkt mit zwei Tangenten-Handles.
///
/// Die Handles sind absolute Positionen (keine Vektoren). Am ersten Punkt
/// eines Pfads ist `in_handle` bedeutungslos, am letzten `out_handle` —
/// dort fallen sie mit der Position zusammen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPoint {
    /// Position des Kontrollpunkts
    pub position: Vec3,
    /// Kontrollpunkt der eingehenden Kurve
    pub in_handle: Vec3,
    /// Kontrollpunkt der ausgehenden Kurve
    pub out_handle: Vec3,
}

impl BezierPoint {
    /// Erstellt einen Punkt mit kollabierten Handles (beide auf der Position).
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            in_handle: position,
            out_handle: position,
        }
    }
}

/// Ein Kontrollpunkt der Session-Sicht: Bezier-Punkt plus stabile Id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Stabile Identität innerhalb der Session
    pub id: PointId,
    /// Abgeleitete Bezier-Geometrie
    pub point: BezierPoint,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt mit kollabierten Handles.
    pub fn new(id: PointId, position: Vec3) -> Self {
        Self {
            id,
            point: BezierPoint::new(position),
        }
    }
}
