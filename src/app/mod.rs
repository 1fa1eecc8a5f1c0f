//! Anwendungsschicht: Session, Gesten, History und Editor-Zustand.

pub mod gesture;
pub mod history;
pub mod session;
pub mod state;

pub use gesture::{GestureKind, GestureState};
pub use history::{EditHistory, Snapshot};
pub use session::{
    EditSession, FrameInput, GestureEvent, HandleKind, HandleUpdate, ReconcileOutcome,
    StructuralEdit,
};
pub use state::EditorState;
