//! Query prompt rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

pub(crate) const PROMPT_SYMBOL: &str = "❯ ";

/// Everything needed to draw the query row.
pub struct InputContext<'a, 'b> {
	/// The query input to render.
	pub input: &'b QueryInput<'a>,
	/// The one-row area reserved for the prompt.
	pub area: Rect,
	/// Active theme.
	pub theme: &'b Theme,
}

/// Render the prompt symbol and the query input beside it.
pub fn render_input(frame: &mut Frame, ctx: InputContext<'_, '_>) {
	let layout = Layout::horizontal([
		Constraint::Length(PROMPT_SYMBOL.width() as u16),
		Constraint::Min(1),
	])
	.split(ctx.area);

	frame.render_widget(Paragraph::new(PROMPT_SYMBOL).style(ctx.theme.prompt), layout[0]);
	ctx.input.render(frame, layout[1]);
}
