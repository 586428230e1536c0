use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::item::{Displayable, LabelItem};
use crate::picker::Picker;
use crate::popover::Popover;
use crate::style::theme::names;
use crate::{PickerLabels, PopoverConfig};

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn draw_picker<T: Displayable>(picker: &mut Picker<'_, T>, width: u16, height: u16) -> String {
	let backend = TestBackend::new(width, height);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| picker.draw(frame, frame.area()))
		.expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn options() -> Vec<LabelItem> {
	(1..=4).map(|n| LabelItem::new(format!("Option {n}"))).collect()
}

#[test]
fn picker_renders_all_rows_with_a_cursor() {
	let mut picker = Picker::new(options());
	let screen = draw_picker(&mut picker, 40, 12);

	for n in 1..=4 {
		assert!(screen.contains(&format!("Option {n}")), "missing row {n}:\n{screen}");
	}
	assert!(screen.contains("▶ Option 1"), "cursor not on first row:\n{screen}");
	assert!(!screen.contains("▶ Option 2"), "cursor duplicated:\n{screen}");
}

#[test]
fn typing_narrows_the_rendered_rows() {
	let mut picker = Picker::new(options());
	for ch in "option 3".chars() {
		picker.handle_key(KeyEvent::from(KeyCode::Char(ch)));
	}
	let screen = draw_picker(&mut picker, 40, 12);

	assert!(screen.contains("option 3"), "query not echoed:\n{screen}");
	assert!(screen.contains("▶ Option 3"), "match not highlighted:\n{screen}");
	assert!(!screen.contains("Option 1"), "filtered row still drawn:\n{screen}");
}

#[test]
fn empty_query_shows_the_placeholder() {
	let mut picker = Picker::new(options()).with_labels(PickerLabels::new(
		None,
		"Pick something",
		"No matches",
	));
	let screen = draw_picker(&mut picker, 40, 12);

	assert!(screen.contains("Pick something"), "placeholder missing:\n{screen}");
}

#[test]
fn unmatched_query_shows_the_empty_state() {
	let mut picker = Picker::new(options());
	for ch in "xyz".chars() {
		picker.handle_key(KeyEvent::from(KeyCode::Char(ch)));
	}
	let screen = draw_picker(&mut picker, 40, 12);

	assert!(screen.contains("No matches"), "empty state missing:\n{screen}");
	assert!(!screen.contains("Option"), "rows drawn despite no match:\n{screen}");
}

#[test]
fn items_without_display_text_render_their_debug_form() {
	#[derive(Debug, Clone)]
	struct Opaque(u32);
	impl Displayable for Opaque {}
	impl crate::item::Searchable for Opaque {
		fn search_text(&self) -> Option<std::borrow::Cow<'_, str>> {
			None
		}
	}

	let mut picker = Picker::new(vec![Opaque(7), Opaque(9)]);
	let screen = draw_picker(&mut picker, 40, 12);

	assert!(screen.contains("Opaque(7)"), "fallback text missing:\n{screen}");
	assert!(screen.contains("Opaque(9)"), "fallback text missing:\n{screen}");
}

#[test]
fn clicking_a_drawn_row_selects_it() {
	let mut picker = Picker::new(options());
	draw_picker(&mut picker, 40, 12);

	// Rows start under the prompt row and the list border.
	let rows_area = picker.rows_area.expect("rows drawn");
	let outcome = picker
		.handle_mouse(MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column: rows_area.x + 2,
			row: rows_area.y + 2,
			modifiers: KeyModifiers::NONE,
		})
		.expect("click selects");

	assert!(outcome.accepted);
	assert_eq!(outcome.selection, Some(LabelItem::new("Option 3")));
}

#[test]
fn popover_draws_a_centered_framed_overlay() {
	let mut popover = Popover::new(PopoverConfig::default().with_size(40, 12));
	popover.open(options(), |_| {});

	let backend = TestBackend::new(80, 24);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| popover.draw(frame))
		.expect("draw frame");
	let screen = buffer_to_string(terminal.backend().buffer());

	assert!(screen.contains("Option 1"), "picker content missing:\n{screen}");
	let lines: Vec<&str> = screen.lines().collect();
	let char_at = |line: &str, col: usize| line.chars().nth(col);
	// 40x12 centered in 80x24: overlay at x 20..60, y 6..18; the list's
	// rounded frame sits one row below the prompt.
	assert_eq!(char_at(lines[7], 20), Some('╭'), "frame corner missing:\n{screen}");
	assert_eq!(char_at(lines[17], 59), Some('╯'), "frame corner missing:\n{screen}");
}

#[test]
fn hidden_popover_draws_nothing() {
	let mut popover: Popover<'_, LabelItem> = Popover::new(PopoverConfig::default());

	let backend = TestBackend::new(80, 24);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| popover.draw(frame))
		.expect("draw frame");
	let screen = buffer_to_string(terminal.backend().buffer());

	assert_eq!(screen.trim(), "", "hidden popover drew content:\n{screen}");
}

#[test]
fn builtin_theme_names() {
	insta::assert_debug_snapshot!(names());
}
