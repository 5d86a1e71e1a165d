//! # Picker State
//!
//! The state machine behind an interactive color-selection widget. It keeps
//! one committed color consistent across four representations while the user
//! edits through independent surfaces — a saturation/value pad, hue and
//! alpha strips, and per-format text fields — and decides when an
//! in-progress edit becomes a committed, externally-observable change.
//!
//! Three rules shape the design:
//!
//! - every surface edits one dimension, yet all surfaces re-render in sync,
//!   from immutable [`PickerSnapshot`]s published through a reactive binding;
//! - partially-typed text is echoed verbatim in its own draft group and never
//!   "corrected" mid-keystroke, while genuinely invalid values are rejected
//!   at commit time;
//! - external notification is trailing-debounced, so a drag or keystroke
//!   burst delivers a single call carrying the final color.

mod debounce;
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
mod draft;
pub use draft::{Drafts, HslDraft, RgbDraft};
mod picker;
pub use picker::{ChangeRejected, ColorPicker, InputEvent, PickerSnapshot};
pub mod surface;
