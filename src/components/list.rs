//! Dropdown list rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListState, Paragraph};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Fully materialized list configuration.
pub struct ListSpec<'a> {
	/// Rendered row lines.
	pub lines: Vec<Line<'a>>,
	/// Optional title for the bordered list.
	pub title: Option<&'a str>,
	/// Message shown instead of rows when `lines` is empty.
	pub empty_text: &'a str,
}

/// Render the bordered dropdown list, or its empty-state message.
///
/// `rows_area` receives the inner row grid so callers can hit-test mouse
/// positions against what was actually drawn.
pub fn render_list(
	frame: &mut Frame,
	area: Rect,
	list_state: &mut ListState,
	rows_area: &mut Option<Rect>,
	spec: ListSpec<'_>,
	theme: &Theme,
) {
	*rows_area = None;

	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border);
	if let Some(title) = spec.title {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	if spec.lines.is_empty() {
		frame.render_widget(
			Paragraph::new(spec.empty_text)
				.style(theme.empty)
				.alignment(Alignment::Center),
			inner,
		);
		return;
	}

	let list = List::new(spec.lines)
		.highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, inner, list_state);
	*rows_area = Some(inner);
}
