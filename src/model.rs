//! Filterable list state backing the picker surface.
//!
//! [`ListModel`] owns the full item collection and a derived filtered view,
//! and answers the row queries the rendering surface needs: how many rows
//! are visible, what text a row shows, and which item a row resolves to.
//! Every operation is total; an out-of-range row degrades to `None` rather
//! than panicking, so a stale cursor between a refilter and a redraw cannot
//! bring the UI down.

use std::borrow::Cow;

use crate::item::{Displayable, Searchable};

/// List state shared between the query input and the row view.
///
/// While a non-empty query is active the model is "searching" and all row
/// queries read the filtered view; otherwise they read the full collection.
/// The filtered view stores indices into the collection, so filtering never
/// copies items and never reorders them.
pub struct ListModel<T> {
	items: Vec<T>,
	filtered: Vec<usize>,
	searching: bool,
}

impl<T> ListModel<T> {
	/// Construct a model over the given items. Insertion order defines the
	/// unfiltered row order.
	#[must_use]
	pub fn new(items: Vec<T>) -> Self {
		Self {
			items,
			filtered: Vec::new(),
			searching: false,
		}
	}

	/// Number of rows currently visible.
	#[must_use]
	pub fn row_count(&self) -> usize {
		if self.searching {
			self.filtered.len()
		} else {
			self.items.len()
		}
	}

	/// Whether row queries currently read the filtered view.
	#[must_use]
	pub fn is_searching(&self) -> bool {
		self.searching
	}

	/// Whether the underlying collection has no items at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// The full item collection, in insertion order.
	#[must_use]
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Resolve a visible row against whichever list is active.
	fn item_at(&self, row: usize) -> Option<&T> {
		if self.searching {
			let index = self.filtered.get(row).copied()?;
			self.items.get(index)
		} else {
			self.items.get(row)
		}
	}

	/// Resolve and clone the item shown at `row`.
	///
	/// Out-of-range rows yield `None`.
	#[must_use]
	pub fn select(&self, row: usize) -> Option<T>
	where
		T: Clone,
	{
		self.item_at(row).cloned()
	}

	/// Leave search mode without touching the collection. The displayed
	/// query text is the surface's concern.
	pub fn query_cancelled(&mut self) {
		self.searching = false;
	}
}

impl<T: Searchable> ListModel<T> {
	/// Apply a new query.
	///
	/// An empty query leaves search mode. A non-empty query recomputes the
	/// filtered view from the full collection as the items whose search
	/// text contains the lowercased term, preserving collection order.
	/// Recomputing from scratch keeps a widened query (backspacing) correct
	/// without restoring a superset.
	pub fn query_changed(&mut self, text: &str) {
		if text.is_empty() {
			self.searching = false;
			self.filtered.clear();
			return;
		}
		let term = text.to_lowercase();
		self.filtered = self
			.items
			.iter()
			.enumerate()
			.filter(|(_, item)| {
				item.search_text()
					.is_some_and(|candidate| candidate.to_lowercase().contains(&term))
			})
			.map(|(index, _)| index)
			.collect();
		self.searching = true;
	}
}

impl<T: Displayable> ListModel<T> {
	/// Text shown for `row`: the item's display text when present, its
	/// `Debug` form otherwise. `None` only for an out-of-range row.
	#[must_use]
	pub fn row_text(&self, row: usize) -> Option<Cow<'_, str>> {
		let item = self.item_at(row)?;
		Some(match item.display_text() {
			Some(text) => text,
			None => Cow::Owned(format!("{item:?}")),
		})
	}
}
