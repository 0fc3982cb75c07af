//! Cardvault Platform Input
//!
//! The host (window, canvas, or test harness) owns hit testing and the frame
//! clock. It translates its native events into [`InputEvent`]s, hands them to
//! the viewer, and applies the returned [`InputResponse`]: the cursor hint and
//! whether the native scroll behavior must be suppressed.

mod cursor;
mod input;

pub use cursor::Cursor;
pub use input::{HitTarget, InputEvent, InputResponse, PointerEvent, PointerKind, ScrollDisposition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cursor::Cursor;
    pub use crate::input::{
        HitTarget, InputEvent, InputResponse, PointerEvent, PointerKind, ScrollDisposition,
    };
}
