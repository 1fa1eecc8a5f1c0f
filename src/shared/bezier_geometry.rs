//! Reine Geometrie-Funktionen für kubische Bezier-Segmente.
//!
//! Layer-neutral: wird von der Session (Segment-Sicht für das Rendering)
//! und von Tests importiert, ohne Zirkel-Abhängigkeiten zu erzeugen.

use crate::core::BezierPoint;
use glam::Vec3;

/// Ein kubisches Bezier-Segment zwischen zwei benachbarten Kontrollpunkten.
///
/// `start_tangent` ist das Out-Handle des Startpunkts, `end_tangent` das
/// In-Handle des Endpunkts — genau die Form, die eine Zeichenfläche zum
/// Rendern der Kurve braucht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Startpunkt des Segments
    pub start: Vec3,
    /// Erster Kontrollpunkt (Out-Handle des Starts)
    pub start_tangent: Vec3,
    /// Zweiter Kontrollpunkt (In-Handle des Endes)
    pub end_tangent: Vec3,
    /// Endpunkt des Segments
    pub end: Vec3,
}

/// Baut die Segment-Folge einer Kontrollpunkt-Liste.
///
/// Ein leerer oder einpunktiger Pfad hat keine Segmente.
pub fn segments(points: &[BezierPoint]) -> Vec<CubicSegment> {
    points
        .windows(2)
        .map(|w| CubicSegment {
            start: w[0].position,
            start_tangent: w[0].out_handle,
            end_tangent: w[1].in_handle,
            end: w[1].position,
        })
        .collect()
}

/// Berechnet einen Punkt auf einem kubischen Bezier-Segment (t ∈ [0, 1]).
pub fn cubic_bezier_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    let u2 = u * u;
    let t2 = t * t;
    u2 * u * p0 + 3.0 * u2 * t * p1 + 3.0 * u * t2 * p2 + t2 * t * p3
}

/// Berechnet eine dichte Punktliste entlang aller Segmente.
///
/// `samples_per_segment`: Anzahl der Zwischenpunkte pro Segment (ohne
/// Endpunkt); der Endpunkt des letzten Segments wird eingeschlossen.
/// Pfade mit weniger als zwei Punkten liefern ihre Positionen unverändert.
pub fn bezier_chain(points: &[BezierPoint], samples_per_segment: usize) -> Vec<Vec3> {
    if points.len() < 2 || samples_per_segment == 0 {
        return points.iter().map(|p| p.position).collect();
    }

    let segs = segments(points);
    let mut result = Vec::with_capacity(segs.len() * samples_per_segment + 1);

    for (si, seg) in segs.iter().enumerate() {
        let steps = if si == segs.len() - 1 {
            samples_per_segment + 1 // letztes Segment: Endpunkt einschließen
        } else {
            samples_per_segment
        };
        for i in 0..steps {
            let t = i as f32 / samples_per_segment as f32;
            result.push(cubic_bezier_point(
                seg.start,
                seg.start_tangent,
                seg.end_tangent,
                seg.end,
                t,
            ));
        }
    }

    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
