//! Dashboard Lifecycle
//!
//! Fetch settlement and chart widget ownership shared by every dashboard
//! variant.

use std::collections::HashMap;

use crate::charts::backend::ChartBackend;
use crate::charts::spec::SlotSpec;
use crate::state::snapshot::KpiSnapshot;

/// Shown when the transport fails; payload-level errors surface verbatim.
pub const FETCH_FAILED_MSG: &str = "Failed to load dashboard data. Please try again later.";

/// Delay before re-rendering after a tab switch, so newly shown canvases
/// are mounted when the backend looks them up.
pub const TAB_RERENDER_DELAY_MS: u32 = 60;

/// Terminal result of one fetch cycle: exactly one of ready or error.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchSettled {
    Ready(KpiSnapshot),
    Failed(String),
}

/// Collapse the two error channels (transport failure, embedded payload
/// error) into a single settled outcome.
pub fn settle_fetch(result: Result<serde_json::Value, String>) -> FetchSettled {
    match result {
        Ok(body) => {
            let snapshot = KpiSnapshot::from_value(body);
            match snapshot.error() {
                Some(message) => FetchSettled::Failed(message.to_string()),
                None => FetchSettled::Ready(snapshot),
            }
        }
        Err(_) => FetchSettled::Failed(FETCH_FAILED_MSG.to_string()),
    }
}

/// Owns the chart widget handles of one dashboard instance.
///
/// At most one live handle per slot: a render destroys the previous handle
/// before constructing its replacement, and a disposed host refuses all
/// further work.
pub struct ChartHost<B: ChartBackend> {
    backend: B,
    slots: Vec<SlotSpec>,
    handles: HashMap<&'static str, B::Handle>,
    disposed: bool,
}

impl<B: ChartBackend> ChartHost<B> {
    pub fn new(backend: B, slots: Vec<SlotSpec>) -> Self {
        Self {
            backend,
            slots,
            handles: HashMap::new(),
            disposed: false,
        }
    }

    pub fn slots(&self) -> &[SlotSpec] {
        &self.slots
    }

    /// Render every slot from `snapshot`. A slot without a valid series or
    /// a mounted anchor is skipped; one bad slot never blocks the rest.
    pub fn render_all(&mut self, snapshot: &KpiSnapshot) {
        if self.disposed {
            return;
        }
        for idx in 0..self.slots.len() {
            let slot = self.slots[idx];
            self.render_slot_spec(&slot, snapshot);
        }
    }

    /// Render the slot bound to `anchor`, if the host knows it.
    pub fn render_slot(&mut self, anchor: &str, snapshot: &KpiSnapshot) {
        if self.disposed {
            return;
        }
        if let Some(slot) = self.slots.iter().find(|s| s.anchor == anchor).copied() {
            self.render_slot_spec(&slot, snapshot);
        }
    }

    fn render_slot_spec(&mut self, slot: &SlotSpec, snapshot: &KpiSnapshot) {
        // Preconditions: a drawable series and a mounted anchor. Either
        // missing makes the render a silent no-op that leaves the slot
        // exactly as it was.
        let Some(series) = snapshot.series(slot.series_field) else {
            return;
        };
        if !self.backend.anchor_mounted(slot) {
            return;
        }

        if let Some(previous) = self.handles.remove(slot.anchor) {
            self.backend.destroy(previous);
        }
        if let Some(handle) = self.backend.construct(slot, &series) {
            self.handles.insert(slot.anchor, handle);
        }
    }

    /// Number of currently live widget handles.
    pub fn live_widgets(&self) -> usize {
        self.handles.len()
    }

    /// Destroy every live handle and refuse all further rendering. Safe to
    /// call more than once.
    pub fn dispose(&mut self) {
        self.disposed = true;
        for (_, handle) in self.handles.drain() {
            self.backend.destroy(handle);
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use serde_json::json;

    use crate::charts::spec::{ChartKind, ValueFormat};
    use crate::state::snapshot::ChartSeries;

    const MONO: [&str; 1] = ["#36A2EB"];

    fn slot(anchor: &'static str, field: &'static str) -> SlotSpec {
        SlotSpec {
            anchor,
            series_field: field,
            title: "test slot",
            kind: ChartKind::Pie,
            palette: &MONO,
            format: ValueFormat::Count,
        }
    }

    #[derive(Default)]
    struct MockBackend {
        mounted: HashSet<&'static str>,
        constructed: usize,
        destroyed: usize,
        next_id: usize,
    }

    impl ChartBackend for MockBackend {
        type Handle = usize;

        fn anchor_mounted(&self, slot: &SlotSpec) -> bool {
            self.mounted.contains(slot.anchor)
        }

        fn construct(&mut self, _slot: &SlotSpec, series: &ChartSeries) -> Option<usize> {
            assert!(series.is_valid(), "host must never pass invalid series");
            self.constructed += 1;
            self.next_id += 1;
            Some(self.next_id)
        }

        fn destroy(&mut self, _handle: usize) {
            self.destroyed += 1;
        }
    }

    fn host(mounted: &[&'static str], slots: Vec<SlotSpec>) -> ChartHost<MockBackend> {
        let backend = MockBackend {
            mounted: mounted.iter().copied().collect(),
            ..MockBackend::default()
        };
        ChartHost::new(backend, slots)
    }

    fn snapshot(value: serde_json::Value) -> KpiSnapshot {
        KpiSnapshot::from_value(value)
    }

    #[test]
    fn settle_maps_ok_body_to_ready() {
        let settled = settle_fetch(Ok(json!({"active_listings": 5, "sold_listings": 2})));
        match settled {
            FetchSettled::Ready(snap) => {
                assert_eq!(snap.scalar("active_listings"), Some(5.0));
                assert_eq!(snap.scalar("sold_listings"), Some(2.0));
            }
            FetchSettled::Failed(_) => panic!("expected ready"),
        }
    }

    #[test]
    fn settle_surfaces_embedded_error_verbatim() {
        let settled = settle_fetch(Ok(json!({"error": "permission denied"})));
        assert_eq!(settled, FetchSettled::Failed("permission denied".into()));
    }

    #[test]
    fn settle_maps_transport_failure_to_generic_message() {
        let settled = settle_fetch(Err("Network error: connection refused".into()));
        assert_eq!(settled, FetchSettled::Failed(FETCH_FAILED_MSG.into()));
    }

    #[test]
    fn render_is_idempotent_per_slot() {
        let mut host = host(&["c1"], vec![slot("c1", "stage_chart")]);
        let snap = snapshot(json!({
            "stage_chart": {"labels": ["new", "won"], "values": [3, 1]},
        }));

        host.render_all(&snap);
        host.render_all(&snap);

        assert_eq!(host.live_widgets(), 1);
        assert_eq!(host.backend().constructed, 2);
        assert_eq!(host.backend().destroyed, 1);
    }

    #[test]
    fn refresh_replaces_the_previous_widget() {
        let mut host = host(&["c1"], vec![slot("c1", "stage_chart")]);
        host.render_all(&snapshot(json!({
            "stage_chart": {"labels": ["new"], "values": [3]},
        })));
        host.render_all(&snapshot(json!({
            "stage_chart": {"labels": ["new", "won"], "values": [4, 2]},
        })));

        assert_eq!(host.live_widgets(), 1);
        assert_eq!(host.backend().constructed, 2);
        assert_eq!(host.backend().destroyed, 1);
    }

    #[test]
    fn missing_series_is_a_no_op_that_keeps_prior_widget() {
        let mut host = host(&["c1"], vec![slot("c1", "stage_chart")]);
        host.render_all(&snapshot(json!({
            "stage_chart": {"labels": ["new"], "values": [3]},
        })));

        // scalar-only snapshot: no series, nothing rendered, nothing torn down
        host.render_all(&snapshot(json!({"active_listings": 5})));

        assert_eq!(host.live_widgets(), 1);
        assert_eq!(host.backend().constructed, 1);
        assert_eq!(host.backend().destroyed, 0);
    }

    #[test]
    fn scalar_only_snapshot_creates_no_widgets() {
        let mut host = host(&["c1"], vec![slot("c1", "stage_chart")]);
        host.render_all(&snapshot(json!({"active_listings": 5, "sold_listings": 2})));

        assert_eq!(host.live_widgets(), 0);
        assert_eq!(host.backend().constructed, 0);
    }

    #[test]
    fn unmounted_anchor_is_a_no_op() {
        let mut host = host(&[], vec![slot("c1", "stage_chart")]);
        host.render_all(&snapshot(json!({
            "stage_chart": {"labels": ["new"], "values": [3]},
        })));

        assert_eq!(host.live_widgets(), 0);
        assert_eq!(host.backend().constructed, 0);
    }

    #[test]
    fn one_bad_slot_never_blocks_the_rest() {
        let mut host = host(
            &["c1", "c2"],
            vec![slot("c1", "broken_chart"), slot("c2", "stage_chart")],
        );
        host.render_all(&snapshot(json!({
            "broken_chart": {"labels": ["a", "b"], "values": [1]},
            "stage_chart": {"labels": ["new"], "values": [3]},
        })));

        assert_eq!(host.live_widgets(), 1);
        assert_eq!(host.backend().constructed, 1);
    }

    #[test]
    fn dispose_destroys_everything_and_refuses_further_work() {
        let mut host = host(
            &["c1", "c2"],
            vec![slot("c1", "stage_chart"), slot("c2", "source_chart")],
        );
        let snap = snapshot(json!({
            "stage_chart": {"labels": ["new"], "values": [3]},
            "source_chart": {"labels": ["web"], "values": [8]},
        }));
        host.render_all(&snap);
        assert_eq!(host.live_widgets(), 2);

        host.dispose();
        assert!(host.is_disposed());
        assert_eq!(host.live_widgets(), 0);
        assert_eq!(host.backend().destroyed, 2);

        // a fetch settling after disposal must not render
        host.render_all(&snap);
        host.render_slot("c1", &snap);
        assert_eq!(host.live_widgets(), 0);
        assert_eq!(host.backend().constructed, 2);

        // double dispose is harmless
        host.dispose();
        assert_eq!(host.backend().destroyed, 2);
    }

    #[test]
    fn render_slot_targets_a_single_anchor() {
        let mut host = host(
            &["c1", "c2"],
            vec![slot("c1", "stage_chart"), slot("c2", "source_chart")],
        );
        let snap = snapshot(json!({
            "stage_chart": {"labels": ["new"], "values": [3]},
            "source_chart": {"labels": ["web"], "values": [8]},
        }));

        host.render_slot("c2", &snap);
        assert_eq!(host.live_widgets(), 1);

        host.render_slot("unknown", &snap);
        assert_eq!(host.live_widgets(), 1);
    }
}
