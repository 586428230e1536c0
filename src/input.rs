//! One-line query input backed by a textarea widget.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Text input for the filter query.
///
/// Wraps a single-line [`TextArea`]; the surrounding surface intercepts
/// Enter, Esc, and the cursor keys before they reach it, so the buffer
/// stays one line.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	/// Construct an input holding `initial` with the cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// The current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map(String::as_str).unwrap_or("")
	}

	/// Feed a key event through. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	/// Discard the query text.
	pub fn clear(&mut self) {
		self.textarea.select_all();
		self.textarea.cut();
	}

	/// Hint text shown while the query is empty.
	pub fn set_placeholder(&mut self, text: impl Into<String>) {
		self.textarea.set_placeholder_text(text);
	}

	pub fn set_placeholder_style(&mut self, style: Style) {
		self.textarea.set_placeholder_style(style);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub(crate) fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
