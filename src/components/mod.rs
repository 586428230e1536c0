//! UI building blocks shared across rendering and event-handling code.

/// Dropdown list rendering.
pub mod list;
/// Query prompt rendering.
pub mod prompt;
/// List row construction and truncation.
pub mod rows;

pub use list::{ListSpec, render_list};
pub use prompt::{InputContext, render_input};
pub use rows::build_rows;

use ratatui::layout::Rect;

/// Whether the given terminal cell lies within `rect`.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, rect: Rect) -> bool {
	column >= rect.x
		&& column < rect.x.saturating_add(rect.width)
		&& row >= rect.y
		&& row < rect.y.saturating_add(rect.height)
}
