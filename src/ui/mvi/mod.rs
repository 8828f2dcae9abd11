//! Model-View-Intent (MVI) primitives for the front-end views.
//!
//! Navigation and the screen stack are plain data transformed by pure
//! reducers; the [`Frontend`](crate::ui::frontend::Frontend) owns the
//! resulting states and performs all side effects (logging, rendering,
//! filesystem access) around them.
//!
//! ```text
//! Buttons ──→ Intent ──→ Reducer ──→ State ──→ Surface
//!    ↑                                            │
//!    └────────────────── next frame ──────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
