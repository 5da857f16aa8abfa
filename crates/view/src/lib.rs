//! Per-view fetch state for board UIs: each view owns a
//! [`loadable::ViewState`] that turns fetch-then-mutate into an
//! explicit request → result mapping, overlapping refreshes included.

pub mod loadable;
pub mod view;
