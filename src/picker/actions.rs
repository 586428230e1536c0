//! Key and mouse event handling for the picker surface.

use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{PickOutcome, Picker};
use crate::components::point_in_rect;
use crate::item::Searchable;

impl<T: Searchable + Clone> Picker<'_, T> {
	/// Process a keyboard event and return an outcome if the interaction
	/// finished.
	///
	/// Enter accepts the highlighted row; with nothing to accept it yields
	/// a dismissal. Esc clears an active filter first and dismisses once
	/// the query is already empty. Everything unhandled feeds the query
	/// input, and a text change refilters from scratch.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickOutcome<T>> {
		match key.code {
			KeyCode::Esc => {
				if self.query().is_empty() {
					return Some(self.outcome(false, None));
				}
				self.input.clear();
				self.model.query_cancelled();
				self.ensure_cursor();
				None
			}
			KeyCode::Enter => {
				let selection = self
					.list_state
					.selected()
					.and_then(|row| self.model.select(row));
				let accepted = selection.is_some();
				Some(self.outcome(accepted, selection))
			}
			KeyCode::Up => {
				self.move_cursor_up();
				None
			}
			KeyCode::Down => {
				self.move_cursor_down();
				None
			}
			_ => {
				if self.input.input(key) {
					self.model.query_changed(self.input.text());
					self.ensure_cursor();
				}
				None
			}
		}
	}

	/// Process a mouse event and return an outcome if a row was clicked.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<PickOutcome<T>> {
		match mouse.kind {
			MouseEventKind::ScrollUp => {
				self.move_cursor_up();
				None
			}
			MouseEventKind::ScrollDown => {
				self.move_cursor_down();
				None
			}
			MouseEventKind::Down(MouseButton::Left) => {
				let row = self.row_at(mouse.column, mouse.row)?;
				self.list_state.select(Some(row));
				let selection = self.model.select(row);
				let accepted = selection.is_some();
				Some(self.outcome(accepted, selection))
			}
			_ => None,
		}
	}

	/// Map a terminal cell onto a visible row, if one was drawn there.
	fn row_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.rows_area?;
		if !point_in_rect(column, row, area) {
			return None;
		}
		let index = self.list_state.offset() + (row - area.y) as usize;
		(index < self.model.row_count()).then_some(index)
	}
}
