//! Searchable dropdown picker widgets for ratatui terminal UIs.
//!
//! The crate is built from three layers. [`ListModel`] holds an item
//! collection and a filtered view derived from the current query.
//! [`Picker`] renders the model as a query prompt above a dropdown list
//! and turns key/mouse events into model calls. [`Popover`] presents a
//! picker as a centered modal overlay and reports the final selection to
//! a callback, once per open/close cycle.
//!
//! Items are any type implementing the [`Searchable`] capability (and
//! optionally [`Displayable`] for custom row text); [`LabelItem`] and
//! plain strings work out of the box. For a picker that owns the whole
//! terminal, see [`runtime::run`].

pub mod components;
mod config;
pub mod input;
mod item;
mod model;
mod picker;
mod popover;
pub mod runtime;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use config::{PickerLabels, PopoverConfig};
pub use input::QueryInput;
pub use item::{Displayable, LabelItem, Searchable};
pub use model::ListModel;
pub use picker::{PickOutcome, Picker};
pub use popover::Popover;
pub use runtime::{run, run_with_config};
pub use style::{StyleConfig, Theme, builtin_themes, default_theme};
