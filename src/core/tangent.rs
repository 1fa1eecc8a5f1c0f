//! Tangenten-Spiegelung und Grid-Snapping für Kontrollpunkt-Handles.

use crate::shared::options::SNAP_DISTANCE_FLOOR;
use glam::Vec3;

/// Spiegelt ein Handle durch die Punktposition.
///
/// Hält beide Tangenten-Handles kollinear zur Position (C¹-Stetigkeit):
/// das Gegenstück des bewegten Handles landet auf
/// `position + (position − handle)`. An Rand-Punkten (fehlendes
/// Gegen-Handle) wird nicht gespiegelt — das entscheidet der Aufrufer.
pub fn mirror_through(position: Vec3, moved_handle: Vec3) -> Vec3 {
    position + (position - moved_handle)
}

/// Rundet jede Koordinate auf das nächste Vielfache der Snap-Distanz.
///
/// Die Distanz wird auf [`SNAP_DISTANCE_FLOOR`] geklammert, damit die
/// Division nie degeneriert.
pub fn snap_to_grid(position: Vec3, snap_distance: f32) -> Vec3 {
    let d = snap_distance.max(SNAP_DISTANCE_FLOOR);
    (position / d).round() * d
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mirror_haelt_die_handles_kollinear() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let moved = Vec3::new(0.0, 0.0, 0.0);

        let gegenueber = mirror_through(pos, moved);
        // out − pos == −(in − pos)
        assert_eq!(gegenueber - pos, -(moved - pos));
        assert_eq!(gegenueber, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn mirror_ist_selbstinvers() {
        let pos = Vec3::new(-1.0, 0.5, 2.0);
        let handle = Vec3::new(3.0, 3.0, 3.0);
        assert_eq!(mirror_through(pos, mirror_through(pos, handle)), handle);
    }

    #[test]
    fn snap_rundet_pro_achse() {
        let snapped = snap_to_grid(Vec3::new(1.26, -0.74, 0.49), 0.5);
        assert_relative_eq!(snapped.x, 1.5);
        assert_relative_eq!(snapped.y, -0.5);
        assert_relative_eq!(snapped.z, 0.5);
    }

    #[test]
    fn snap_klammert_degenerierte_distanz() {
        // Distanz 0 würde dividieren durch 0 — Floor greift
        let snapped = snap_to_grid(Vec3::new(0.123, 0.0, 0.0), 0.0);
        assert_relative_eq!(snapped.x, 0.12, epsilon = 1e-6);
    }
}
