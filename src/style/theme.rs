//! Theme definitions, built-in color schemes, and TOML loading.

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use thiserror::Error;

/// Styles for the picker's visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for the query prompt symbol and entered text.
	pub prompt: Style,
	/// Style for the placeholder hint while the query is empty.
	pub placeholder: Style,
	/// Style for the list border and title.
	pub border: Style,
	/// Style for unhighlighted rows.
	pub row: Style,
	/// Style for the highlighted row.
	pub row_highlight: Style,
	/// Style for the empty-state message.
	pub empty: Style,
}

pub const SLATE: Theme = Theme {
	prompt: Style::new().fg(Color::Rgb(125, 196, 228)),
	placeholder: Style::new().fg(Color::Rgb(100, 116, 139)),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	row: Style::new().fg(Color::Rgb(203, 213, 225)),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
};

pub const LIGHT: Theme = Theme {
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	placeholder: Style::new().fg(Color::Rgb(148, 163, 184)),
	border: Style::new().fg(Color::Rgb(100, 116, 139)),
	row: Style::new().fg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
};

const BUILT_INS: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Return the built-in themes bundled with the crate.
#[must_use]
pub fn builtin_themes() -> Vec<(&'static str, Theme)> {
	BUILT_INS.to_vec()
}

/// Names of the built-in themes, in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_INS.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_INS
		.iter()
		.find(|(candidate, _)| *candidate == name)
		.map(|(_, theme)| *theme)
}

/// Failures while resolving a theme from configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
	#[error("unknown theme `{0}`")]
	UnknownTheme(String),
	#[error("invalid color `{0}`")]
	InvalidColor(String),
	#[error("malformed theme definition: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Raw, serializable form of a theme as written in a TOML file.
///
/// Every element is optional; unset elements keep the value from the base
/// theme the spec is resolved over. Colors are ANSI names (`"red"`,
/// `"lightblue"`) or hex (`"#rrggbb"`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeSpec {
	base: Option<String>,
	prompt: ElementSpec,
	placeholder: ElementSpec,
	border: ElementSpec,
	row: ElementSpec,
	row_highlight: ElementSpec,
	empty: ElementSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ElementSpec {
	fg: Option<String>,
	bg: Option<String>,
	bold: Option<bool>,
}

impl ThemeSpec {
	/// Parse a spec from TOML text.
	pub fn from_toml(text: &str) -> Result<Self, ThemeError> {
		Ok(toml::from_str(text)?)
	}

	/// Resolve the spec into a [`Theme`], starting from the named base
	/// theme (or the default theme when no base is named).
	pub fn resolve(&self) -> Result<Theme, ThemeError> {
		let mut theme = match &self.base {
			Some(name) => {
				by_name(name).ok_or_else(|| ThemeError::UnknownTheme(name.clone()))?
			}
			None => default_theme(),
		};
		theme.prompt = self.prompt.apply(theme.prompt)?;
		theme.placeholder = self.placeholder.apply(theme.placeholder)?;
		theme.border = self.border.apply(theme.border)?;
		theme.row = self.row.apply(theme.row)?;
		theme.row_highlight = self.row_highlight.apply(theme.row_highlight)?;
		theme.empty = self.empty.apply(theme.empty)?;
		Ok(theme)
	}
}

impl ElementSpec {
	fn apply(&self, mut style: Style) -> Result<Style, ThemeError> {
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg)?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg)?);
		}
		match self.bold {
			Some(true) => style = style.add_modifier(Modifier::BOLD),
			Some(false) => style = style.remove_modifier(Modifier::BOLD),
			None => {}
		}
		Ok(style)
	}
}

fn parse_color(text: &str) -> Result<Color, ThemeError> {
	text.parse::<Color>()
		.map_err(|_| ThemeError::InvalidColor(text.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn registry_resolves_every_builtin() {
		for name in names() {
			assert!(by_name(name).is_some(), "missing builtin {name}");
		}
		assert!(by_name("nonexistent").is_none());
	}

	#[test]
	fn spec_overrides_selected_elements_only() {
		let spec = ThemeSpec::from_toml(
			r##"
			base = "light"

			[row_highlight]
			fg = "#facc15"
			bold = true
			"##,
		)
		.expect("parse");
		let theme = spec.resolve().expect("resolve");
		assert_eq!(theme.row_highlight.fg, Some(Color::Rgb(0xfa, 0xcc, 0x15)));
		assert_eq!(theme.prompt, LIGHT.prompt);
	}

	#[test]
	fn unknown_base_is_reported() {
		let spec = ThemeSpec::from_toml("base = \"neon\"").expect("parse");
		assert!(matches!(spec.resolve(), Err(ThemeError::UnknownTheme(name)) if name == "neon"));
	}

	#[test]
	fn invalid_color_is_reported() {
		let spec = ThemeSpec::from_toml("[prompt]\nfg = \"not-a-color\"").expect("parse");
		assert!(matches!(spec.resolve(), Err(ThemeError::InvalidColor(_))));
	}

	#[test]
	fn malformed_toml_is_reported() {
		assert!(matches!(
			ThemeSpec::from_toml("prompt = ["),
			Err(ThemeError::Parse(_))
		));
	}
}
