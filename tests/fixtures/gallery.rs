//! Gallery layout helpers.

/// Arrange widgets in a grid.
///
/// First compute the column count:
///
/// ```
/// let columns = gallery.columns(width);
/// ```
///
/// then place each widget:
///
/// ```
/// gallery.place(widget, row, column);
/// ```
///
/// > Tip: square cells look best
pub fn arrange() {}

/// Spacing between cells, in points.
pub const CELL_SPACING: f32 = 8.0;
