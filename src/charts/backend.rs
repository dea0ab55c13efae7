//! Chart Backend Capability
//!
//! Construct/destroy contract between dashboard logic and the widget layer.
//! Dashboard code owns handles but never looks inside them, so the actual
//! rendering library can be swapped without touching lifecycle code.

use crate::charts::spec::SlotSpec;
use crate::state::snapshot::ChartSeries;

pub trait ChartBackend {
    /// Opaque reference to one live widget.
    type Handle;

    /// Whether the DOM anchor for `slot` is currently mounted.
    fn anchor_mounted(&self, slot: &SlotSpec) -> bool;

    /// Build a widget for `slot` from `series`. `None` means the anchor went
    /// away between the mount probe and construction; callers treat that as
    /// a silent no-op.
    fn construct(&mut self, slot: &SlotSpec, series: &ChartSeries) -> Option<Self::Handle>;

    /// Release a widget previously returned by `construct`.
    fn destroy(&mut self, handle: Self::Handle);
}
