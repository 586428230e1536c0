//! Floating popover host owning the picker's show/select/dismiss lifecycle.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;

use crate::components::point_in_rect;
use crate::config::PopoverConfig;
use crate::item::{Displayable, Searchable};
use crate::picker::Picker;

type CloseFn<T> = Box<dyn FnOnce(Option<T>)>;

/// Modal host presenting a [`Picker`] as a centered overlay.
///
/// Each open/close cycle builds a fresh picker (filter state starts
/// inactive) and invokes the close callback exactly once: with the chosen
/// item when a row was accepted, with `None` when the popover was
/// dismissed by Esc, by a click outside the overlay, or by [`dismiss`].
///
/// [`dismiss`]: Popover::dismiss
pub struct Popover<'a, T> {
	config: PopoverConfig,
	picker: Option<Picker<'a, T>>,
	on_close: Option<CloseFn<T>>,
	overlay_area: Option<Rect>,
}

impl<'a, T> Popover<'a, T> {
	/// Construct a hidden popover with the given configuration.
	#[must_use]
	pub fn new(config: PopoverConfig) -> Self {
		Self {
			config,
			picker: None,
			on_close: None,
			overlay_area: None,
		}
	}

	/// Whether a picker is currently shown.
	#[must_use]
	pub fn is_open(&self) -> bool {
		self.picker.is_some()
	}

	/// Show a fresh picker over `items`.
	///
	/// `on_close` receives the final selection once. Opening while already
	/// open first closes the running cycle with `None`.
	pub fn open(&mut self, items: Vec<T>, on_close: impl FnOnce(Option<T>) + 'static) {
		if self.is_open() {
			self.finish(None);
		}
		self.picker = Some(
			Picker::new(items)
				.with_labels(self.config.labels.clone())
				.with_style(self.config.style.clone()),
		);
		self.on_close = Some(Box::new(on_close));
	}

	/// Close without a selection.
	pub fn dismiss(&mut self) {
		if self.is_open() {
			self.finish(None);
		}
	}

	fn finish(&mut self, selection: Option<T>) {
		self.picker = None;
		self.overlay_area = None;
		if let Some(on_close) = self.on_close.take() {
			on_close(selection);
		}
	}
}

impl<T: Searchable + Clone> Popover<'_, T> {
	/// Route a keyboard event to the picker; a finished interaction closes
	/// the popover and fires the callback.
	pub fn handle_key(&mut self, key: KeyEvent) {
		let Some(picker) = self.picker.as_mut() else {
			return;
		};
		if let Some(outcome) = picker.handle_key(key) {
			self.finish(outcome.selection);
		}
	}

	/// Route a mouse event. A left click outside the overlay dismisses the
	/// popover without a selection.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		if !self.is_open() {
			return;
		}
		if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
			&& self
				.overlay_area
				.is_some_and(|area| !point_in_rect(mouse.column, mouse.row, area))
		{
			self.finish(None);
			return;
		}
		let Some(picker) = self.picker.as_mut() else {
			return;
		};
		if let Some(outcome) = picker.handle_mouse(mouse) {
			self.finish(outcome.selection);
		}
	}
}

impl<T: Displayable> Popover<'_, T> {
	/// Draw the centered overlay and the picker inside it. A hidden
	/// popover draws nothing.
	pub fn draw(&mut self, frame: &mut Frame) {
		let Some(picker) = self.picker.as_mut() else {
			self.overlay_area = None;
			return;
		};
		let area = centered(frame.area(), self.config.width, self.config.height);
		self.overlay_area = Some(area);
		frame.render_widget(Clear, area);
		picker.draw(frame, area);
	}
}

/// Center a `width` x `height` rectangle within `frame_area`, clamping to
/// its bounds.
fn centered(frame_area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(frame_area.width);
	let height = height.min(frame_area.height);
	Rect {
		x: frame_area.x + (frame_area.width - width) / 2,
		y: frame_area.y + (frame_area.height - height) / 2,
		width,
		height,
	}
}
