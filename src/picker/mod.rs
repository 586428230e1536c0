//! The picker surface: query input above a filterable dropdown list.

mod actions;
mod render;

use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::config::PickerLabels;
use crate::input::QueryInput;
use crate::model::ListModel;
use crate::style::StyleConfig;

/// Result of a finished picker interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome<T> {
	/// Whether a row was chosen, as opposed to the picker being dismissed.
	pub accepted: bool,
	/// The chosen item, if any.
	pub selection: Option<T>,
	/// The query text at the moment the interaction ended.
	pub query: String,
}

/// Interactive list picker bound to a [`ListModel`].
///
/// The picker translates key and mouse events into model calls and keeps
/// the cursor valid against whichever list is active. It yields a
/// [`PickOutcome`] once the user accepts a row or dismisses the surface.
pub struct Picker<'a, T> {
	pub(crate) model: ListModel<T>,
	pub(crate) input: QueryInput<'a>,
	pub(crate) list_state: ListState,
	pub(crate) labels: PickerLabels,
	pub(crate) style: StyleConfig,
	pub(crate) rows_area: Option<Rect>,
}

impl<'a, T> Picker<'a, T> {
	/// Construct a picker over the given items with default labels and
	/// styling. Filter state starts inactive.
	#[must_use]
	pub fn new(items: Vec<T>) -> Self {
		let mut picker = Self {
			model: ListModel::new(items),
			input: QueryInput::new(""),
			list_state: ListState::default(),
			labels: PickerLabels::default(),
			style: StyleConfig::default(),
			rows_area: None,
		};
		picker.apply_labels();
		picker.apply_style();
		picker.ensure_cursor();
		picker
	}

	/// Replace the labels shown around the list.
	#[must_use]
	pub fn with_labels(mut self, labels: PickerLabels) -> Self {
		self.labels = labels;
		self.apply_labels();
		self
	}

	/// Replace the styling.
	#[must_use]
	pub fn with_style(mut self, style: StyleConfig) -> Self {
		self.style = style;
		self.apply_style();
		self
	}

	/// The model backing this surface.
	#[must_use]
	pub fn model(&self) -> &ListModel<T> {
		&self.model
	}

	/// The current query text.
	#[must_use]
	pub fn query(&self) -> &str {
		self.input.text()
	}

	fn apply_labels(&mut self) {
		self.input.set_placeholder(self.labels.placeholder.clone());
	}

	fn apply_style(&mut self) {
		let theme = self.style.theme;
		self.input.set_style(theme.prompt);
		self.input.set_placeholder_style(theme.placeholder);
	}

	/// Keep the cursor on a row that exists in the active list.
	pub(crate) fn ensure_cursor(&mut self) {
		let len = self.model.row_count();
		if len == 0 {
			self.list_state.select(None);
		} else {
			match self.list_state.selected() {
				None => self.list_state.select(Some(0)),
				Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
				Some(_) => {}
			}
		}
	}

	pub(crate) fn move_cursor_up(&mut self) {
		let len = self.model.row_count();
		if len == 0 {
			self.list_state.select(None);
			return;
		}
		let next = self
			.list_state
			.selected()
			.map_or(0, |row| row.saturating_sub(1));
		self.list_state.select(Some(next));
	}

	pub(crate) fn move_cursor_down(&mut self) {
		let len = self.model.row_count();
		if len == 0 {
			self.list_state.select(None);
			return;
		}
		let next = self
			.list_state
			.selected()
			.map_or(0, |row| (row + 1).min(len - 1));
		self.list_state.select(Some(next));
	}

	pub(crate) fn outcome(&self, accepted: bool, selection: Option<T>) -> PickOutcome<T> {
		PickOutcome {
			accepted,
			selection,
			query: self.input.text().to_string(),
		}
	}
}
