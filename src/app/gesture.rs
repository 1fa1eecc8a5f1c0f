//! Gesten-Zustandsmaschine für Struktur-Edits an Kontrollpunkten.
//!
//! Erkennung und Mutation sind getrennt: die Session sammelt pro Punkt und
//! Runde einen Gesten-Zustand (`Idle → Pending → Applied`) ein und entscheidet
//! erst danach, welcher Struktur-Edit tatsächlich ausgeführt wird. Damit ist
//! die Mutationslogik ohne simulierte Eingaben testbar.

/// Art einer erkannten Geste auf dem Primär-Handle eines Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Neuen Punkt vor diesem Punkt einfügen
    InsertBefore,
    /// Diesen Punkt löschen
    Delete,
}

/// Zustand der Gesten-Erkennung eines Punkts innerhalb einer Runde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// Keine Geste erkannt
    #[default]
    Idle,
    /// Geste erkannt, Mutation steht aus
    Pending(GestureKind),
    /// Mutation dieser Runde wurde aus dieser Geste ausgeführt
    Applied(GestureKind),
}

impl GestureState {
    /// Meldet eine erkannte Geste an.
    ///
    /// Delete gewinnt gegen ein bereits anstehendes InsertBefore am selben
    /// Punkt; eine bereits angewendete Geste bleibt unverändert.
    pub fn trigger(&mut self, kind: GestureKind) {
        *self = match *self {
            GestureState::Idle => GestureState::Pending(kind),
            GestureState::Pending(GestureKind::InsertBefore) if kind == GestureKind::Delete => {
                GestureState::Pending(GestureKind::Delete)
            }
            other => other,
        };
    }

    /// Liefert die anstehende Geste, falls vorhanden.
    pub fn pending(&self) -> Option<GestureKind> {
        match self {
            GestureState::Pending(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Markiert die anstehende Geste als ausgeführt.
    pub fn apply(&mut self) {
        if let GestureState::Pending(kind) = *self {
            *self = GestureState::Applied(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_aus_idle_wird_pending() {
        let mut s = GestureState::Idle;
        s.trigger(GestureKind::InsertBefore);
        assert_eq!(s.pending(), Some(GestureKind::InsertBefore));
    }

    #[test]
    fn delete_gewinnt_gegen_anstehendes_insert() {
        let mut s = GestureState::Idle;
        s.trigger(GestureKind::InsertBefore);
        s.trigger(GestureKind::Delete);
        assert_eq!(s.pending(), Some(GestureKind::Delete));
    }

    #[test]
    fn insert_ueberschreibt_anstehendes_delete_nicht() {
        let mut s = GestureState::Idle;
        s.trigger(GestureKind::Delete);
        s.trigger(GestureKind::InsertBefore);
        assert_eq!(s.pending(), Some(GestureKind::Delete));
    }

    #[test]
    fn apply_beendet_die_geste() {
        let mut s = GestureState::Idle;
        s.trigger(GestureKind::Delete);
        s.apply();
        assert_eq!(s, GestureState::Applied(GestureKind::Delete));
        assert_eq!(s.pending(), None);
        // Erneutes Triggern ändert einen angewendeten Zustand nicht
        s.trigger(GestureKind::InsertBefore);
        assert_eq!(s, GestureState::Applied(GestureKind::Delete));
    }
}
