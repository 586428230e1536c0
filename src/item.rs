//! Item capability contracts.
//!
//! The picker is generic over the caller's item type; two independent traits
//! describe what the component can do with an item. [`Searchable`] supplies
//! the text the filter matches against, [`Displayable`] supplies the text
//! rendered for a row. Both accessors are optional at the value level:
//! returning `None` degrades to "never matches" and "render the `Debug`
//! form" respectively.

use std::borrow::Cow;
use std::fmt;

/// Row text for rendering.
///
/// The `Debug` supertrait carries the generic fallback representation used
/// when [`display_text`](Displayable::display_text) yields `None`.
pub trait Displayable: fmt::Debug {
	/// Custom text shown for this item's row, if any.
	fn display_text(&self) -> Option<Cow<'_, str>> {
		None
	}
}

/// Filter text for incremental search.
pub trait Searchable {
	/// Text the query term is matched against. `None` means the item never
	/// matches a non-empty query.
	fn search_text(&self) -> Option<Cow<'_, str>>;
}

impl Displayable for String {
	fn display_text(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(self))
	}
}

impl Searchable for String {
	fn search_text(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(self))
	}
}

impl Displayable for &str {
	fn display_text(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(self))
	}
}

impl Searchable for &str {
	fn search_text(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(self))
	}
}

/// Ready-made item carrying a single label used for both display and search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelItem {
	/// Text shown in the row and matched by the filter.
	pub label: String,
}

impl LabelItem {
	/// Construct an item from its label text.
	#[must_use]
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
		}
	}
}

impl Displayable for LabelItem {
	fn display_text(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(&self.label))
	}
}

impl Searchable for LabelItem {
	fn search_text(&self) -> Option<Cow<'_, str>> {
		Some(Cow::Borrowed(&self.label))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn label_item_exposes_both_capabilities() {
		let item = LabelItem::new("Option 1");
		assert_eq!(item.display_text().as_deref(), Some("Option 1"));
		assert_eq!(item.search_text().as_deref(), Some("Option 1"));
	}

	#[test]
	fn plain_strings_are_their_own_text() {
		let owned = String::from("alpha");
		assert_eq!(owned.display_text().as_deref(), Some("alpha"));
		assert_eq!("beta".search_text().as_deref(), Some("beta"));
	}

	#[test]
	fn default_display_text_is_absent() {
		#[derive(Debug)]
		struct Opaque;
		impl Displayable for Opaque {}

		assert!(Opaque.display_text().is_none());
	}
}
