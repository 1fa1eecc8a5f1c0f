//! Wire-Format der Host-Schnittstelle: Achsen und skalare Sample-Punkte.

use serde::{Deserialize, Serialize};

/// Räumliche Achse eines Bewegungspfads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Alle drei Achsen in fester Reihenfolge (X, Y, Z).
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Property-Name der Achsen-Kurve im Host-Animationsmodell.
    pub fn property_name(self) -> &'static str {
        match self {
            Axis::X => "localPosition.x",
            Axis::Y => "localPosition.y",
            Axis::Z => "localPosition.z",
        }
    }

    /// Komponenten-Index der Achse in einem `Vec3`.
    pub fn component(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Ein Keyframe einer skalaren Achsen-Kurve.
///
/// `in_slope`/`out_slope` sind die Hermite-Tangenten (Wert-Änderung pro
/// Zeiteinheit) links bzw. rechts des Keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Zeitpunkt des Keys
    pub time: f32,
    /// Wert der Achse zu diesem Zeitpunkt
    pub value: f32,
    /// Eingehende Tangente (Steigung)
    pub in_slope: f32,
    /// Ausgehende Tangente (Steigung)
    pub out_slope: f32,
}

impl SamplePoint {
    /// Erstellt einen Key mit Null-Tangenten.
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_slope: 0.0,
            out_slope: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_component_indices_sind_eindeutig() {
        assert_eq!(Axis::X.component(), 0);
        assert_eq!(Axis::Y.component(), 1);
        assert_eq!(Axis::Z.component(), 2);
    }

    #[test]
    fn sample_point_new_hat_null_tangenten() {
        let s = SamplePoint::new(2.0, 5.0);
        assert_eq!(s.time, 2.0);
        assert_eq!(s.value, 5.0);
        assert_eq!(s.in_slope, 0.0);
        assert_eq!(s.out_slope, 0.0);
    }
}
