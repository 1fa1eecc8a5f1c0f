//! Gesamtzustand des Editors: Clip, Session, History und Optionen.

use crate::app::history::{EditHistory, Snapshot};
use crate::app::session::{EditSession, FrameInput, ReconcileOutcome};
use crate::core::PathError;
use crate::host::AnimationClip;
use crate::shared::EditorOptions;

/// Maximale Undo-Tiefe.
const HISTORY_DEPTH: usize = 200;

/// Bündelt alles, was der Editor über Frames hinweg hält.
///
/// Die Engine bearbeitet höchstens einen Clip gleichzeitig; ohne Clip oder
/// mit ausgeschalteter Bearbeitung sind Abgleiche wirkungslos.
pub struct EditorState {
    clip: Option<AnimationClip>,
    session: EditSession,
    history: EditHistory,
    options: EditorOptions,
    editing_enabled: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt einen Editor-Zustand ohne Clip, mit Standard-Optionen.
    pub fn new() -> Self {
        Self {
            clip: None,
            session: EditSession::new(),
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
            options: EditorOptions::default(),
            editing_enabled: true,
        }
    }

    /// Erstellt einen Editor-Zustand mit gegebenen Optionen.
    pub fn with_options(mut options: EditorOptions) -> Self {
        options.sanitize();
        Self {
            options,
            ..Self::new()
        }
    }

    /// Übernimmt einen Clip als aktive Ressource.
    ///
    /// Ein leerer Clip bekommt den Standard-Pfad; History und Sicht der
    /// vorherigen Ressource werden verworfen.
    pub fn set_clip(&mut self, mut clip: AnimationClip) {
        if clip.is_empty() {
            clip.create_default_path();
        }
        log::info!("Clip '{}' übernommen", clip.name);
        self.clip = Some(clip);
        self.history.clear();
        self.session.clear();
    }

    /// Gibt die aktive Ressource frei.
    pub fn clear_clip(&mut self) {
        self.clip = None;
        self.history.clear();
        self.session.clear();
    }

    /// Schaltet die Bearbeitung ein oder aus.
    /// Beim Ausschalten wird die Kontrollpunkt-Sicht verworfen.
    pub fn set_editing(&mut self, enabled: bool) {
        if self.editing_enabled == enabled {
            return;
        }
        self.editing_enabled = enabled;
        if !enabled {
            self.session.clear();
        }
        log::debug!("Bearbeitung {}", if enabled { "ein" } else { "aus" });
    }

    /// Eine Reconciliation-Runde auf dem aktiven Clip.
    /// Ohne Clip oder mit ausgeschalteter Bearbeitung passiert nichts.
    pub fn reconcile(&mut self, input: &FrameInput) -> Result<ReconcileOutcome, PathError> {
        if !self.editing_enabled {
            return Ok(ReconcileOutcome::default());
        }
        let Some(clip) = self.clip.as_mut() else {
            return Ok(ReconcileOutcome::default());
        };
        self.session
            .reconcile(clip, input, &self.options, &mut self.history)
    }

    /// Erzwingt den Neuaufbau der Sicht beim nächsten Abgleich
    /// (z.B. nach einem Viewport-Wechsel des Hosts).
    pub fn request_redraw(&mut self) {
        self.session.mark_stale();
    }

    /// Stellt den Stand vor der letzten Mutation wieder her.
    pub fn undo(&mut self) -> bool {
        let Some(clip) = self.clip.as_mut() else {
            return false;
        };
        let current = Snapshot::capture(clip, "Aktueller Stand");
        match self.history.pop_undo_with_current(current) {
            Some(snap) => {
                log::info!("Undo: {}", snap.label);
                snap.apply_to(clip);
                self.session.mark_stale();
                true
            }
            None => false,
        }
    }

    /// Stellt den zuletzt rückgängig gemachten Stand wieder her.
    pub fn redo(&mut self) -> bool {
        let Some(clip) = self.clip.as_mut() else {
            return false;
        };
        let current = Snapshot::capture(clip, "Aktueller Stand");
        match self.history.pop_redo_with_current(current) {
            Some(snap) => {
                log::info!("Redo: {}", snap.label);
                snap.apply_to(clip);
                self.session.mark_stale();
                true
            }
            None => false,
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Ist die Bearbeitung aktiv?
    pub fn is_editing(&self) -> bool {
        self.editing_enabled
    }

    /// Aktive Ressource (read-only).
    pub fn clip(&self) -> Option<&AnimationClip> {
        self.clip.as_ref()
    }

    /// Kontrollpunkt-Sicht (read-only).
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Aktuelle Optionen.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Übernimmt geänderte Optionen (werden geklammert).
    pub fn set_options(&mut self, mut options: EditorOptions) {
        options.sanitize();
        self.options = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Axis;
    use crate::host::AnimationCurves;

    #[test]
    fn leerer_clip_bekommt_den_standard_pfad() {
        let mut state = EditorState::new();
        state.set_clip(AnimationClip::new("leer"));

        let clip = state.clip().expect("Clip gesetzt");
        assert!(!clip.is_empty());
        assert_eq!(clip.axis_curve(Axis::X).expect("Kurve vorhanden").len(), 2);
    }

    #[test]
    fn ohne_clip_ist_der_abgleich_wirkungslos() {
        let mut state = EditorState::new();
        let outcome = state.reconcile(&FrameInput::default()).expect("gültig");
        assert!(!outcome.changed);
    }

    #[test]
    fn ausgeschaltete_bearbeitung_verwirft_die_sicht() {
        let mut state = EditorState::new();
        state.set_clip(AnimationClip::new("test"));
        state.reconcile(&FrameInput::default()).expect("gültig");
        assert_eq!(state.session().points().len(), 2);

        state.set_editing(false);
        assert!(state.session().points().is_empty());

        let outcome = state.reconcile(&FrameInput::default()).expect("gültig");
        assert!(!outcome.changed);
        assert!(state.session().points().is_empty());
    }

    #[test]
    fn undo_ohne_history_tut_nichts() {
        let mut state = EditorState::new();
        state.set_clip(AnimationClip::new("test"));
        assert!(!state.undo());
        assert!(!state.redo());
    }

    #[test]
    fn set_options_klammert_werte() {
        let mut state = EditorState::new();
        let mut options = EditorOptions::default();
        options.shift_time = 0.0;
        state.set_options(options);
        assert!(state.options().shift_time > 0.0);
    }
}
