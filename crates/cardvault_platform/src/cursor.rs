//! Cursor hints

/// Cursor the host should display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Default arrow cursor
    #[default]
    Default,
    /// Pointer/hand cursor (for clickable cards)
    Pointer,
    /// Grab cursor (open hand, draggable)
    Grab,
    /// Grabbing cursor (closed hand, mid-drag)
    Grabbing,
}
