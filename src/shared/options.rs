//! Zentrale Konfiguration für den Motion-Path-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Struktur-Edits ──────────────────────────────────────────────────

/// Zeitverschiebung beim Einfügen/Löschen eines Keys (Zeiteinheiten).
pub const SHIFT_TIME: f32 = 1.0;
/// Untergrenze für Shift-Zeit und Snap-Distanz.
/// Auf Null dürfen beide nie fallen, sonst degeneriert die Tangenten-Mathematik.
pub const SNAP_DISTANCE_FLOOR: f32 = 0.01;

// ── Handles ─────────────────────────────────────────────────────────

/// Standard-Snap-Distanz für Handles (Welteinheiten).
pub const HANDLES_SNAP_DISTANCE: f32 = 0.25;
/// Standard-Handle-Größe.
pub const HANDLE_SIZE: f32 = 0.1;
/// Minimale Handle-Größe.
pub const HANDLE_SIZE_MIN: f32 = 0.05;
/// Maximale Handle-Größe.
pub const HANDLE_SIZE_MAX: f32 = 0.5;

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe der gezeichneten Pfad-Kurve (RGBA: Weiß).
pub const PATH_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Positions-Handles (RGBA: Weiß).
pub const HANDLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Bezier-Tangenten-Handles (RGBA: Weiß).
pub const BEZIER_HANDLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Nummerierungs-Labels (RGBA: Weiß).
pub const LABEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Nummerierung ────────────────────────────────────────────────────

/// Standard-Textgröße der Punkt-Nummerierung.
pub const NUMERATION_TEXT_SIZE: u32 = 14;
/// Minimale Textgröße der Nummerierung.
pub const NUMERATION_TEXT_SIZE_MIN: u32 = 8;
/// Maximale Textgröße der Nummerierung.
pub const NUMERATION_TEXT_SIZE_MAX: u32 = 80;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `motion_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Bearbeitung ─────────────────────────────────────────────
    /// Zeitverschiebung beim Einfügen/Löschen eines Keys
    pub shift_time: f32,
    /// Handles beim Verschieben auf ein Grid einrasten
    #[serde(default)]
    pub handles_snapping: bool,
    /// Snap-Distanz für Handles (Welteinheiten)
    pub handles_snap_distance: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Handle-Größe (Welteinheiten)
    pub handle_size: f32,
    /// Bezier-Tangenten-Handles anzeigen
    #[serde(default = "default_true")]
    pub show_bezier_handles: bool,
    /// Punkt-Nummerierung anzeigen
    #[serde(default = "default_true")]
    pub enable_numeration: bool,
    /// Textgröße der Nummerierung
    pub numeration_text_size: u32,

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe der Pfad-Kurve (RGBA)
    pub path_color: [f32; 4],
    /// Farbe der Positions-Handles (RGBA)
    pub handle_color: [f32; 4],
    /// Farbe der Bezier-Handles (RGBA)
    pub bezier_handle_color: [f32; 4],
    /// Farbe der Nummerierungs-Labels (RGBA)
    pub label_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            shift_time: SHIFT_TIME,
            handles_snapping: false,
            handles_snap_distance: HANDLES_SNAP_DISTANCE,

            handle_size: HANDLE_SIZE,
            show_bezier_handles: true,
            enable_numeration: true,
            numeration_text_size: NUMERATION_TEXT_SIZE,

            path_color: PATH_COLOR,
            handle_color: HANDLE_COLOR,
            bezier_handle_color: BEZIER_HANDLE_COLOR,
            label_color: LABEL_COLOR,
        }
    }
}

/// Serde-Default für Bool-Flags, die standardmäßig aktiv sind.
fn default_true() -> bool {
    true
}

impl EditorOptions {
    /// Klammert alle Werte in ihre gültigen Bereiche.
    ///
    /// Shift-Zeit und Snap-Distanz dürfen nie auf oder unter Null liegen,
    /// sonst entstehen Divisions-Fehler in der Tangenten-Mathematik.
    pub fn sanitize(&mut self) {
        if self.shift_time < SNAP_DISTANCE_FLOOR {
            self.shift_time = SNAP_DISTANCE_FLOOR;
        }
        if self.handles_snap_distance < SNAP_DISTANCE_FLOOR {
            self.handles_snap_distance = SNAP_DISTANCE_FLOOR;
        }
        self.handle_size = self.handle_size.clamp(HANDLE_SIZE_MIN, HANDLE_SIZE_MAX);
        self.numeration_text_size = self
            .numeration_text_size
            .clamp(NUMERATION_TEXT_SIZE_MIN, NUMERATION_TEXT_SIZE_MAX);
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        let mut opts = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        };
        opts.sanitize();
        opts
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("motion_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("motion_path_editor.toml")
    }
}
