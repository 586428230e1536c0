//! List row construction for the picker surface.

use std::borrow::Cow;

use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::item::Displayable;
use crate::model::ListModel;
use crate::style::Theme;

const ELLIPSIS: &str = "…";

/// Build one rendered line per visible row.
///
/// Row text comes from the model (display text or its fallback) and is
/// truncated to `width` columns with a trailing ellipsis.
#[must_use]
pub fn build_rows<'a, T: Displayable>(
	model: &'a ListModel<T>,
	width: u16,
	theme: &Theme,
) -> Vec<Line<'a>> {
	(0..model.row_count())
		.filter_map(|row| {
			let text = model.row_text(row)?;
			Some(Line::from(Span::styled(
				truncate_to(text, width as usize),
				theme.row,
			)))
		})
		.collect()
}

fn truncate_to(text: Cow<'_, str>, max_width: usize) -> Cow<'_, str> {
	if text.width() <= max_width {
		return text;
	}
	let keep = max_width.saturating_sub(ELLIPSIS.width());
	let (head, _) = text.unicode_truncate(keep);
	Cow::Owned(format!("{head}{ELLIPSIS}"))
}
