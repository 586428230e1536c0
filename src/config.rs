//! Textual and geometric configuration for the picker and its popover.

use crate::style::StyleConfig;

/// Human-readable labels rendered within the picker surface.
#[derive(Debug, Clone)]
pub struct PickerLabels {
	/// Optional title on the list border.
	pub title: Option<String>,
	/// Hint shown in the query input while it is empty.
	pub placeholder: String,
	/// Message shown when no row matches the query.
	pub empty: String,
}

impl PickerLabels {
	/// Construct labels from the individual bits of text shown around the
	/// list.
	#[must_use]
	pub fn new(
		title: Option<String>,
		placeholder: impl Into<String>,
		empty: impl Into<String>,
	) -> Self {
		Self {
			title,
			placeholder: placeholder.into(),
			empty: empty.into(),
		}
	}
}

impl Default for PickerLabels {
	fn default() -> Self {
		Self {
			title: None,
			placeholder: String::from("Select an option"),
			empty: String::from("No matches"),
		}
	}
}

/// Appearance and sizing of the floating popover host.
///
/// None of these knobs affect filtering or selection behavior.
#[derive(Debug, Clone)]
pub struct PopoverConfig {
	/// Overlay width in terminal columns, clamped to the frame.
	pub width: u16,
	/// Overlay height in terminal rows, clamped to the frame.
	pub height: u16,
	/// Labels handed to the picker on each open.
	pub labels: PickerLabels,
	/// Styling handed to the picker on each open.
	pub style: StyleConfig,
}

impl Default for PopoverConfig {
	fn default() -> Self {
		Self {
			width: 48,
			height: 16,
			labels: PickerLabels::default(),
			style: StyleConfig::default(),
		}
	}
}

impl PopoverConfig {
	/// Override the overlay size.
	#[must_use]
	pub fn with_size(mut self, width: u16, height: u16) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	/// Override the picker labels.
	#[must_use]
	pub fn with_labels(mut self, labels: PickerLabels) -> Self {
		self.labels = labels;
		self
	}

	/// Override the picker styling.
	#[must_use]
	pub fn with_style(mut self, style: StyleConfig) -> Self {
		self.style = style;
		self
	}
}
