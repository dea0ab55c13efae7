//! Charts
//!
//! Static chart-slot configuration and the swappable rendering backend.

pub mod backend;
pub mod canvas;
pub mod spec;

pub use backend::ChartBackend;
pub use spec::{ChartKind, SlotSpec, ValueFormat};
