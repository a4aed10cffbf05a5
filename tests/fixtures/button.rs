//! Showcase widgets for the demo gallery.
//!
//! Everything here is rendered into the showcase pages.

/// A customizable button.
///
/// ```
/// Button::new("Tap").on_press(action)
/// ```
///
/// > Warning: Destructive action
///
/// - First consideration
/// - Second consideration
pub struct Button;

impl Button {
    /// Create a button with a label.
    ///
    /// - Parameter label: The visible text
    /// - Returns: a new button
    pub fn new(label: &str) -> Button {
        let _ = label;
        Button
    }

    /// Internal bookkeeping, not part of the showcase.
    fn invalidate(&self) {}
}
