//! Visual styling utilities.
//!
//! Themes represent the color schemes applied to the picker; additional
//! styling options can be layered alongside themes over time.

pub mod theme;

pub use theme::{Theme, ThemeError, ThemeSpec, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the picker.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
