//! Dashboard State
//!
//! Reactive record owned by one dashboard component instance.

use leptos::*;

use crate::lifecycle::FetchSettled;
use crate::state::snapshot::KpiSnapshot;

/// Per-dashboard reactive state provided to the component subtree.
///
/// Lifecycle: created with placeholder values, snapshot overwritten
/// wholesale on each successful fetch, error set (snapshot left stale)
/// on failure.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Last fetched KPI snapshot (zeroed placeholders before first fetch)
    pub snapshot: RwSignal<KpiSnapshot>,
    /// Whether a fetch is currently in flight
    pub loading: RwSignal<bool>,
    /// Error message to display; stale snapshot stays visible underneath
    pub error: RwSignal<Option<String>>,
    /// Localized time of the last successful refresh
    pub last_update: RwSignal<Option<String>>,
    /// Selected tab index, used by tabbed dashboard variants
    pub selected_tab: RwSignal<usize>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            snapshot: create_rw_signal(KpiSnapshot::default()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            last_update: create_rw_signal(None),
            selected_tab: create_rw_signal(0),
        }
    }

    /// Enter `loading`, unless a fetch is already outstanding.
    ///
    /// Returns `false` when the request should be ignored because the
    /// in-flight fetch wins.
    pub fn begin_fetch(&self) -> bool {
        if self.loading.get_untracked() {
            return false;
        }
        self.loading.set(true);
        self.error.set(None);
        true
    }

    /// Leave `loading` with exactly one of ready/error holding.
    pub fn apply_settled(&self, settled: FetchSettled) {
        match settled {
            FetchSettled::Ready(snapshot) => {
                self.snapshot.set(snapshot);
                self.last_update.set(Some(refresh_label()));
            }
            FetchSettled::Failed(message) => {
                self.error.set(Some(message));
            }
        }
        self.loading.set(false);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Localized wall-clock label for the "last updated" readout.
fn refresh_label() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().to_locale_time_string("en-US").into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // js-sys is browser-only; native test builds get an empty label.
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn successful_fetch_settles_to_ready() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        assert!(state.begin_fetch());
        assert!(state.loading.get_untracked());

        let snapshot = KpiSnapshot::from_value(json!({"total_leads": 4}));
        state.apply_settled(FetchSettled::Ready(snapshot));

        assert!(!state.loading.get_untracked());
        assert!(state.error.get_untracked().is_none());
        assert!(state.last_update.get_untracked().is_some());
        assert_eq!(
            state.snapshot.get_untracked().scalar("total_leads"),
            Some(4.0)
        );

        runtime.dispose();
    }

    #[test]
    fn failed_fetch_settles_to_error_and_keeps_snapshot() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        state.apply_settled(FetchSettled::Ready(KpiSnapshot::from_value(
            json!({"active_listings": 9}),
        )));

        assert!(state.begin_fetch());
        state.apply_settled(FetchSettled::Failed("permission denied".into()));

        assert!(!state.loading.get_untracked());
        assert_eq!(
            state.error.get_untracked().as_deref(),
            Some("permission denied")
        );
        // last-good snapshot stays visible underneath the error
        assert_eq!(
            state.snapshot.get_untracked().scalar("active_listings"),
            Some(9.0)
        );

        runtime.dispose();
    }

    #[test]
    fn refresh_while_loading_is_ignored() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        assert!(state.begin_fetch());
        assert!(!state.begin_fetch());

        state.apply_settled(FetchSettled::Failed("boom".into()));
        assert!(state.begin_fetch());

        runtime.dispose();
    }

    #[test]
    fn refetch_clears_previous_error() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        state.begin_fetch();
        state.apply_settled(FetchSettled::Failed("boom".into()));
        assert!(state.error.get_untracked().is_some());

        state.begin_fetch();
        assert!(state.error.get_untracked().is_none());

        runtime.dispose();
    }
}
