//! Die zentrale MotionPath-Datenstruktur: drei Achsen-Kurven als eine Folge
//! verschmolzener Keys.
//!
//! Die drei skalaren Achsen-Kurven des Hosts müssen zu jedem Zeitpunkt gleich
//! lang sein und pro Index dieselbe Zeit tragen. Statt drei getrennte
//! Container synchron zu halten, hält `MotionPath` genau eine Key-Folge mit
//! `Vec3`-Komponenten — die Invariante gilt damit per Konstruktion.

use super::sample::{Axis, SamplePoint};
use glam::Vec3;
use thiserror::Error;

/// Toleranz für den Zeit-Vergleich der drei Achsen-Kurven.
pub const TIME_EPSILON: f32 = 1e-4;

/// Fehler beim Übernehmen externer Kurven- oder Bezier-Daten.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    /// Die drei Achsen-Kurven haben unterschiedliche Längen.
    #[error("Achsen-Kurven unterschiedlich lang: x={x}, y={y}, z={z}")]
    AxisMismatch { x: usize, y: usize, z: usize },
    /// Die Achsen-Kurven tragen an einem Index unterschiedliche Zeiten.
    #[error("Zeiten an Index {index} weichen ab: x={x}, y={y}, z={z}")]
    TimeMismatch { index: usize, x: f32, y: f32, z: f32 },
    /// Eine Bezier-Folge passt nicht zur Key-Anzahl des Pfads.
    #[error("Bezier-Folge passt nicht zum Pfad: {points} Punkte, {keys} Keys")]
    LengthMismatch { points: usize, keys: usize },
}

/// Ein verschmolzener Key: drei Achsen-Samples mit gemeinsamer Zeit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathKey {
    /// Gemeinsame Zeit aller drei Achsen
    pub time: f32,
    /// Position (Achsen-Werte x/y/z)
    pub value: Vec3,
    /// Eingehende Hermite-Tangente pro Achse
    pub in_slope: Vec3,
    /// Ausgehende Hermite-Tangente pro Achse
    pub out_slope: Vec3,
}

impl PathKey {
    /// Erstellt einen Key mit Null-Tangenten.
    pub fn new(time: f32, value: Vec3) -> Self {
        Self {
            time,
            value,
            in_slope: Vec3::ZERO,
            out_slope: Vec3::ZERO,
        }
    }
}

/// Der Bewegungspfad: eine geordnete Key-Folge über drei Achsen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionPath {
    keys: Vec<PathKey>,
}

impl MotionPath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Verschmilzt drei Achsen-Kurven zu einem Pfad.
    ///
    /// Desynchronisierte Eingaben (Länge oder Zeit pro Index) werden mit
    /// einem Fehler abgewiesen — der Pfad arbeitet nie auf versetzten Indizes.
    pub fn from_axis_curves(
        x: &[SamplePoint],
        y: &[SamplePoint],
        z: &[SamplePoint],
    ) -> Result<Self, PathError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(PathError::AxisMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }

        let mut keys = Vec::with_capacity(x.len());
        for i in 0..x.len() {
            let (sx, sy, sz) = (x[i], y[i], z[i]);
            if (sx.time - sy.time).abs() > TIME_EPSILON
                || (sx.time - sz.time).abs() > TIME_EPSILON
            {
                return Err(PathError::TimeMismatch {
                    index: i,
                    x: sx.time,
                    y: sy.time,
                    z: sz.time,
                });
            }
            keys.push(PathKey {
                time: sx.time,
                value: Vec3::new(sx.value, sy.value, sz.value),
                in_slope: Vec3::new(sx.in_slope, sy.in_slope, sz.in_slope),
                out_slope: Vec3::new(sx.out_slope, sy.out_slope, sz.out_slope),
            });
        }

        Ok(Self { keys })
    }

    /// Materialisiert die skalare Kurve einer Achse.
    pub fn axis_curve(&self, axis: Axis) -> Vec<SamplePoint> {
        let c = axis.component();
        self.keys
            .iter()
            .map(|k| SamplePoint {
                time: k.time,
                value: k.value[c],
                in_slope: k.in_slope[c],
                out_slope: k.out_slope[c],
            })
            .collect()
    }

    /// Anzahl der Keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Prüft ob der Pfad leer ist.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Read-only Zugriff auf die Key-Folge.
    pub fn keys(&self) -> &[PathKey] {
        &self.keys
    }

    /// Mutabler Zugriff auf einen Key.
    pub fn key_mut(&mut self, index: usize) -> Option<&mut PathKey> {
        self.keys.get_mut(index)
    }

    /// Zeitabstände eines Keys zu seinen Nachbarn: `(zum Vorgänger, zum Nachfolger)`.
    ///
    /// Am ersten Key ist der Vorgänger-Abstand 0, am letzten der
    /// Nachfolger-Abstand — Rand-Keys haben dort keine Tangente.
    pub fn time_deltas(&self, index: usize) -> (f32, f32) {
        let to_prev = if index > 0 {
            self.keys[index].time - self.keys[index - 1].time
        } else {
            0.0
        };
        let to_next = if index + 1 < self.keys.len() {
            self.keys[index + 1].time - self.keys[index].time
        } else {
            0.0
        };
        (to_prev, to_next)
    }

    /// Fügt einen neuen Key vor `index` ein und schiebt den Rest des Pfads
    /// um `shift_time` nach hinten.
    ///
    /// Der neue Key übernimmt die Vor-Verschiebungs-Zeit des Keys, der vorher
    /// an `index` stand; beim Anhängen (`index == len`) liegt er
    /// `shift_time` hinter dem letzten Key. Tangenten starten bei Null und
    /// werden bei der nächsten Konvertierung neu belegt.
    ///
    /// Gibt den tatsächlich verwendeten (geklammerten) Index zurück.
    pub fn insert_key(&mut self, index: usize, position: Vec3, shift_time: f32) -> usize {
        let index = index.min(self.keys.len());

        // Zeit des neuen Keys VOR der Verschiebung bestimmen
        let new_time = if self.keys.is_empty() {
            0.0
        } else if index == self.keys.len() {
            self.keys[index - 1].time + shift_time
        } else {
            self.keys[index].time
        };

        for key in &mut self.keys[index..] {
            key.time += shift_time;
        }
        self.keys.insert(index, PathKey::new(new_time, position));

        log::info!(
            "Key an Index {} eingefügt (t={:.3}, shift={:.3})",
            index,
            new_time,
            shift_time
        );
        index
    }

    /// Entfernt den Key an `index` (geklammert) und zieht den Rest des Pfads
    /// um `shift_time` nach vorne.
    ///
    /// Das Löschen des letzten verbleibenden Keys ergibt einen leeren Pfad.
    pub fn delete_key(&mut self, index: usize, shift_time: f32) -> Option<PathKey> {
        if self.keys.is_empty() {
            log::debug!("Löschen übersprungen: Pfad ist leer");
            return None;
        }
        let index = index.min(self.keys.len() - 1);

        let removed = self.keys.remove(index);
        for key in &mut self.keys[index..] {
            key.time -= shift_time;
        }

        log::info!("Key an Index {} gelöscht (t={:.3})", index, removed.time);
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Pfad mit X-Werten `[0, 10]` bei Zeiten `[0, 1]` (Y = Z = 0).
    fn zwei_key_pfad() -> MotionPath {
        let x = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 10.0)];
        let y = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 0.0)];
        let z = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 0.0)];
        MotionPath::from_axis_curves(&x, &y, &z).expect("Kurven sind synchron")
    }

    #[test]
    fn from_axis_curves_weist_laengen_mismatch_ab() {
        let x = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 1.0)];
        let y = vec![SamplePoint::new(0.0, 0.0)];
        let z = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 1.0)];

        let err = MotionPath::from_axis_curves(&x, &y, &z).unwrap_err();
        assert_eq!(err, PathError::AxisMismatch { x: 2, y: 1, z: 2 });
    }

    #[test]
    fn from_axis_curves_weist_zeit_mismatch_ab() {
        let x = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 1.0)];
        let y = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.5, 1.0)];
        let z = vec![SamplePoint::new(0.0, 0.0), SamplePoint::new(1.0, 1.0)];

        let err = MotionPath::from_axis_curves(&x, &y, &z).unwrap_err();
        assert!(matches!(err, PathError::TimeMismatch { index: 1, .. }));
    }

    #[test]
    fn axis_curves_roundtrip_erhaelt_alle_werte() {
        let path = zwei_key_pfad();
        let x = path.axis_curve(Axis::X);
        let y = path.axis_curve(Axis::Y);
        let z = path.axis_curve(Axis::Z);

        let wieder = MotionPath::from_axis_curves(&x, &y, &z).expect("synchron");
        assert_eq!(wieder, path);
    }

    #[test]
    fn insert_in_der_mitte_verschiebt_den_rest() {
        // Insert(1, (5,0,0)) bei shift=1 → Zeiten [0,1,2], X-Werte [0,5,10]
        let mut path = zwei_key_pfad();
        let used = path.insert_key(1, Vec3::new(5.0, 0.0, 0.0), 1.0);

        assert_eq!(used, 1);
        assert_eq!(path.len(), 3);
        let times: Vec<f32> = path.keys().iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
        let x_werte: Vec<f32> = path.keys().iter().map(|k| k.value.x).collect();
        assert_eq!(x_werte, vec![0.0, 5.0, 10.0]);
        assert_eq!(path.keys()[1].in_slope, Vec3::ZERO);
        assert_eq!(path.keys()[1].out_slope, Vec3::ZERO);
    }

    #[test]
    fn insert_am_ende_haengt_mit_shift_an() {
        let mut path = zwei_key_pfad();
        path.insert_key(2, Vec3::new(20.0, 0.0, 0.0), 1.0);

        assert_eq!(path.len(), 3);
        // Bestehende Keys unverändert, neuer Key bei t = 1 + shift
        assert_relative_eq!(path.keys()[0].time, 0.0);
        assert_relative_eq!(path.keys()[1].time, 1.0);
        assert_relative_eq!(path.keys()[2].time, 2.0);
    }

    #[test]
    fn insert_index_wird_geklammert() {
        let mut path = zwei_key_pfad();
        let used = path.insert_key(99, Vec3::ZERO, 1.0);
        assert_eq!(used, 2);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn insert_in_leeren_pfad_startet_bei_null() {
        let mut path = MotionPath::new();
        path.insert_key(0, Vec3::new(1.0, 2.0, 3.0), 1.0);

        assert_eq!(path.len(), 1);
        assert_eq!(path.keys()[0].time, 0.0);
        assert_eq!(path.keys()[0].value, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn delete_zieht_den_rest_nach_vorne() {
        // Delete(1) auf dem 3-Key-Ergebnis des Insert-Tests
        let mut path = zwei_key_pfad();
        path.insert_key(1, Vec3::new(5.0, 0.0, 0.0), 1.0);
        let removed = path.delete_key(1, 1.0).expect("Key vorhanden");

        assert_eq!(removed.value.x, 5.0);
        let times: Vec<f32> = path.keys().iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 1.0]);
        let x_werte: Vec<f32> = path.keys().iter().map(|k| k.value.x).collect();
        assert_eq!(x_werte, vec![0.0, 10.0]);
    }

    #[test]
    fn insert_dann_delete_ist_invers() {
        let original = zwei_key_pfad();
        let mut path = original.clone();

        path.insert_key(1, Vec3::new(7.0, 1.0, -2.0), 1.0);
        path.delete_key(1, 1.0);

        assert_eq!(path.len(), original.len());
        for (a, b) in path.keys().iter().zip(original.keys()) {
            assert_relative_eq!(a.time, b.time);
            assert_relative_eq!(a.value.x, b.value.x);
            assert_relative_eq!(a.value.y, b.value.y);
            assert_relative_eq!(a.value.z, b.value.z);
        }
    }

    #[test]
    fn delete_des_letzten_keys_ergibt_leeren_pfad() {
        let mut path = MotionPath::new();
        path.insert_key(0, Vec3::ONE, 1.0);

        assert!(path.delete_key(0, 1.0).is_some());
        assert!(path.is_empty());
        // Löschen auf leerem Pfad ist ein No-Op
        assert!(path.delete_key(0, 1.0).is_none());
    }

    #[test]
    fn delete_index_wird_geklammert() {
        let mut path = zwei_key_pfad();
        let removed = path.delete_key(99, 1.0).expect("geklammert auf letzten Key");
        assert_eq!(removed.value.x, 10.0);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn time_deltas_an_den_raendern_sind_null() {
        let path = zwei_key_pfad();
        assert_eq!(path.time_deltas(0), (0.0, 1.0));
        assert_eq!(path.time_deltas(1), (1.0, 0.0));
    }
}
