//! Owned-terminal picker runtime.
//!
//! The runtime takes over the terminal, presents the popover, and pumps
//! crossterm events until the user accepts a row or dismisses the picker.
//! Embedders with their own event loop should drive a [`Popover`] (or a
//! bare [`Picker`](crate::Picker)) directly instead.

use std::cell::RefCell;
use std::io::stdout;
use std::rc::Rc;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::config::PopoverConfig;
use crate::item::{Displayable, Searchable};
use crate::popover::Popover;

/// Present a default-configured picker over `items` and run it to
/// completion. Returns the chosen item, or `None` on dismissal.
pub fn run<T>(items: Vec<T>) -> Result<Option<T>>
where
	T: Searchable + Displayable + Clone + 'static,
{
	run_with_config(items, PopoverConfig::default())
}

/// As [`run`], with explicit popover configuration.
pub fn run_with_config<T>(items: Vec<T>, config: PopoverConfig) -> Result<Option<T>>
where
	T: Searchable + Displayable + Clone + 'static,
{
	let mut terminal = ratatui::init();
	terminal.clear()?;
	execute!(stdout(), EnableMouseCapture)?;
	let result = event_loop(&mut terminal, items, config);
	let _ = execute!(stdout(), DisableMouseCapture);
	ratatui::restore();
	result
}

fn event_loop<T>(
	terminal: &mut DefaultTerminal,
	items: Vec<T>,
	config: PopoverConfig,
) -> Result<Option<T>>
where
	T: Searchable + Displayable + Clone + 'static,
{
	let result: Rc<RefCell<Option<Option<T>>>> = Rc::new(RefCell::new(None));
	let sink = Rc::clone(&result);

	let mut popover = Popover::new(config);
	popover.open(items, move |selection| {
		*sink.borrow_mut() = Some(selection);
	});

	loop {
		terminal.draw(|frame| popover.draw(frame))?;

		match event::read()? {
			Event::Key(key) if key.kind == KeyEventKind::Press => popover.handle_key(key),
			Event::Mouse(mouse) => popover.handle_mouse(mouse),
			// Redrawn on the next pass at the new size.
			Event::Resize(..) => {}
			_ => {}
		}

		if let Some(selection) = result.borrow_mut().take() {
			return Ok(selection);
		}
	}
}
