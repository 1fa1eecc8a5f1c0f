//! Hermite↔Bezier-Konvertierung zwischen Pfad-Keys und Kontrollpunkten.
//!
//! Standard-Beziehung kubisches Hermite ↔ kubisches Bezier: der
//! Bezier-Kontrollpunkt liegt ein Drittel des mit dem Zeitabstand zum
//! Nachbar-Key skalierten Tangentenvektors von der Position entfernt.
//! Umgekehrt ist die Tangente `(Handle-Differenz) · 3 / Zeitabstand` —
//! die Momentangeschwindigkeit einer Bezier-Kurve bei t=0 ist das
//! Dreifache des Vektors zum ersten Kontrollpunkt.

use super::bezier::BezierPoint;
use super::path::{MotionPath, PathError};

/// Leitet die Bezier-Kontrollpunkt-Folge aus einem Pfad ab.
///
/// Am ersten Key fällt `in_handle`, am letzten `out_handle` mit der
/// Position zusammen (Zeitabstand 0 ⇒ kein Tangentenbeitrag).
pub fn to_bezier(path: &MotionPath) -> Vec<BezierPoint> {
    let mut points = Vec::with_capacity(path.len());

    for (i, key) in path.keys().iter().enumerate() {
        let (to_prev, to_next) = path.time_deltas(i);
        points.push(BezierPoint {
            position: key.value,
            in_handle: key.value - key.in_slope * to_prev / 3.0,
            out_handle: key.value + key.out_slope * to_next / 3.0,
        });
    }

    points
}

/// Schreibt eine bearbeitete Bezier-Folge in die Pfad-Keys zurück.
///
/// Die Key-Zeiten bleiben unverändert — nur Werte und Tangenten werden neu
/// belegt. Bei Zeitabstand ≤ 0 (Rand-Keys) ist die jeweilige Tangente Null,
/// spiegelbildlich zur Auslassung in [`to_bezier`]. Eine Folge mit
/// abweichender Länge wird abgewiesen.
pub fn apply_bezier(path: &mut MotionPath, points: &[BezierPoint]) -> Result<(), PathError> {
    if points.len() != path.len() {
        return Err(PathError::LengthMismatch {
            points: points.len(),
            keys: path.len(),
        });
    }

    for (i, point) in points.iter().enumerate() {
        let (to_prev, to_next) = path.time_deltas(i);

        let in_slope = if to_prev > 0.0 {
            (point.position - point.in_handle) * 3.0 / to_prev
        } else {
            glam::Vec3::ZERO
        };
        let out_slope = if to_next > 0.0 {
            (point.out_handle - point.position) * 3.0 / to_next
        } else {
            glam::Vec3::ZERO
        };

        if let Some(key) = path.key_mut(i) {
            key.value = point.position;
            key.in_slope = in_slope;
            key.out_slope = out_slope;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::SamplePoint;
    use approx::assert_relative_eq;
    use glam::Vec3;

    /// Zwei Keys auf der X-Achse mit gegebenen Tangenten (Y = Z = 0).
    fn pfad_mit_x_tangenten(out0: f32, in1: f32) -> MotionPath {
        let mut x = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 10.0)];
        x[0].out_slope = out0;
        x[1].in_slope = in1;
        let y = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 0.0)];
        let z = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 0.0)];
        MotionPath::from_axis_curves(&x, &y, &z).expect("synchron")
    }

    #[test]
    fn null_tangenten_kollabieren_die_handles() {
        // Bei Null-Tangenten liegen die Handles auf den Punkten
        let path = pfad_mit_x_tangenten(0.0, 0.0);
        let points = to_bezier(&path);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].position, Vec3::ZERO);
        assert_eq!(points[0].out_handle, points[0].position);
        assert_eq!(points[1].position, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(points[1].in_handle, points[1].position);
        // Rand-Handles fallen immer mit der Position zusammen
        assert_eq!(points[0].in_handle, points[0].position);
        assert_eq!(points[1].out_handle, points[1].position);
    }

    #[test]
    fn handles_liegen_ein_drittel_der_tangente_entfernt() {
        let path = pfad_mit_x_tangenten(6.0, 12.0);
        let points = to_bezier(&path);

        // out_handle[0] = 0 + 6·1/3 = 2, in_handle[1] = 10 − 12·1/3 = 6
        assert_relative_eq!(points[0].out_handle.x, 2.0);
        assert_relative_eq!(points[1].in_handle.x, 6.0);
    }

    #[test]
    fn roundtrip_ist_idempotent() {
        let original = pfad_mit_x_tangenten(6.0, 12.0);
        let mut path = original.clone();

        let points = to_bezier(&path);
        apply_bezier(&mut path, &points).expect("Längen passen");

        for (a, b) in path.keys().iter().zip(original.keys()) {
            assert_relative_eq!(a.time, b.time);
            assert_relative_eq!(a.value.x, b.value.x, epsilon = 1e-5);
            assert_relative_eq!(a.in_slope.x, b.in_slope.x, epsilon = 1e-4);
            assert_relative_eq!(a.out_slope.x, b.out_slope.x, epsilon = 1e-4);
        }
    }

    #[test]
    fn apply_weist_falsche_laenge_ab() {
        let mut path = pfad_mit_x_tangenten(0.0, 0.0);
        let points = vec![BezierPoint::new(Vec3::ZERO)];

        let err = apply_bezier(&mut path, &points).unwrap_err();
        assert_eq!(err, PathError::LengthMismatch { points: 1, keys: 2 });
    }

    #[test]
    fn rand_tangenten_werden_null_geschrieben() {
        let mut path = pfad_mit_x_tangenten(0.0, 0.0);
        let mut points = to_bezier(&path);
        // Auch wenn ein Frontend Rand-Handles verschiebt: ohne Zeitabstand
        // entsteht keine Tangente
        points[0].in_handle = Vec3::new(-5.0, 0.0, 0.0);
        points[1].out_handle = Vec3::new(15.0, 0.0, 0.0);

        apply_bezier(&mut path, &points).expect("Längen passen");
        assert_eq!(path.keys()[0].in_slope, Vec3::ZERO);
        assert_eq!(path.keys()[1].out_slope, Vec3::ZERO);
    }

    #[test]
    fn verschobenes_handle_ergibt_die_erwartete_tangente() {
        let mut path = pfad_mit_x_tangenten(0.0, 0.0);
        let mut points = to_bezier(&path);
        // out_handle[0] auf x=2 → out_slope = (2−0)·3/1 = 6
        points[0].out_handle = Vec3::new(2.0, 0.0, 0.0);

        apply_bezier(&mut path, &points).expect("Längen passen");
        assert_relative_eq!(path.keys()[0].out_slope.x, 6.0);
    }

    #[test]
    fn einzelner_key_hat_keine_tangenten() {
        let x = vec![SamplePoint::new(0.0, 4.0)];
        let y = vec![SamplePoint::new(0.0, 5.0)];
        let z = vec![SamplePoint::new(0.0, 6.0)];
        let mut path = MotionPath::from_axis_curves(&x, &y, &z).expect("synchron");

        let points = to_bezier(&path);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].in_handle, points[0].position);
        assert_eq!(points[0].out_handle, points[0].position);

        apply_bezier(&mut path, &points).expect("Längen passen");
        assert_eq!(path.keys()[0].in_slope, Vec3::ZERO);
        assert_eq!(path.keys()[0].out_slope, Vec3::ZERO);
    }
}
