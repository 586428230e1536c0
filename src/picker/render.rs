//! Frame rendering for the picker surface.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

use super::Picker;
use crate::components::list::HIGHLIGHT_SYMBOL;
use crate::components::{InputContext, ListSpec, build_rows, render_input, render_list};
use crate::item::Displayable;

impl<T: Displayable> Picker<'_, T> {
	/// Draw the query row and the dropdown list into `area`.
	///
	/// Row count is re-read from the model on every draw, so the surface
	/// can be shown again after any amount of stale state.
	pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
		self.ensure_cursor();

		let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(area);
		let theme = self.style.theme;

		render_input(
			frame,
			InputContext {
				input: &self.input,
				area: layout[0],
				theme: &theme,
			},
		);

		// Borders eat two columns, the highlight gutter the rest.
		let text_width = layout[1]
			.width
			.saturating_sub(2 + HIGHLIGHT_SYMBOL.width() as u16);
		let lines = build_rows(&self.model, text_width, &theme);
		let spec = ListSpec {
			lines,
			title: self.labels.title.as_deref(),
			empty_text: &self.labels.empty,
		};
		render_list(
			frame,
			layout[1],
			&mut self.list_state,
			&mut self.rows_area,
			spec,
			&theme,
		);
	}
}
