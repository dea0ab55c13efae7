//! Dashboard Pages
//!
//! One page component per registered dashboard variant, sharing the same
//! fetch/render/teardown plumbing.

pub mod leads;
pub mod property;

pub use leads::LeadsDashboard;
pub use property::PropertyDashboard;

use leptos::spawn_local;

use crate::api::{self, RpcTarget};
use crate::lifecycle::settle_fetch;
use crate::state::dashboard::DashboardState;

/// Kick off one fetch cycle for `target`, unless one is already in flight
/// (the outstanding fetch wins).
pub(crate) fn spawn_fetch(state: DashboardState, target: &'static RpcTarget) {
    if !state.begin_fetch() {
        web_sys::console::log_1(&"refresh ignored: a fetch is already in flight".into());
        return;
    }

    spawn_local(async move {
        let result = api::call_kw(target).await;
        match &result {
            Ok(_) => web_sys::console::log_1(&"dashboard data received".into()),
            Err(err) => {
                web_sys::console::error_1(&format!("RPC call failed: {}", err).into());
            }
        }
        state.apply_settled(settle_fetch(result));
    });
}
