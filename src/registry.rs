//! Dashboard Action Registry
//!
//! Process-wide mapping from stable action identifiers to dashboard
//! definitions. Populated by explicit `register` calls during startup and
//! never mutated once the app has mounted.

use std::cell::RefCell;
use std::collections::BTreeMap;

use leptos::View;

/// Factory producing a fresh dashboard component instance.
pub type DashboardFactory = fn() -> View;

/// One registered dashboard.
#[derive(Clone, Copy)]
pub struct DashboardAction {
    /// Stable action identifier, e.g. `property_dashboard.dashboard`.
    pub action: &'static str,
    /// Route segment under `/d/`.
    pub slug: &'static str,
    /// Navigation label.
    pub label: &'static str,
    /// Component factory invoked by the router.
    pub factory: DashboardFactory,
}

thread_local! {
    static ACTIONS: RefCell<BTreeMap<&'static str, DashboardAction>> =
        RefCell::new(BTreeMap::new());
}

/// Add an action to the registry. Later registrations under the same
/// identifier replace earlier ones.
pub fn register(action: DashboardAction) {
    ACTIONS.with(|cell| {
        cell.borrow_mut().insert(action.action, action);
    });
}

/// All registered actions, ordered by identifier.
pub fn actions() -> Vec<DashboardAction> {
    ACTIONS.with(|cell| cell.borrow().values().copied().collect())
}

/// Look up an action by its identifier.
pub fn resolve(action: &str) -> Option<DashboardAction> {
    ACTIONS.with(|cell| cell.borrow().get(action).copied())
}

/// Look up an action by its route segment.
pub fn by_slug(slug: &str) -> Option<DashboardAction> {
    ACTIONS.with(|cell| {
        cell.borrow().values().find(|a| a.slug == slug).copied()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unused_factory() -> View {
        unreachable!("factory is never invoked by registry tests")
    }

    fn action(id: &'static str, slug: &'static str) -> DashboardAction {
        DashboardAction {
            action: id,
            slug,
            label: "Test",
            factory: unused_factory,
        }
    }

    #[test]
    fn registers_and_resolves_by_name_and_slug() {
        register(action("test.alpha", "alpha"));
        register(action("test.beta", "beta"));

        assert!(resolve("test.alpha").is_some());
        assert_eq!(by_slug("beta").unwrap().action, "test.beta");
        assert!(resolve("test.missing").is_none());
        assert!(by_slug("missing").is_none());
    }

    #[test]
    fn actions_are_ordered_by_identifier() {
        register(action("test.z_last", "z"));
        register(action("test.a_first", "a"));

        let ids: Vec<_> = actions()
            .into_iter()
            .map(|a| a.action)
            .filter(|a| a.starts_with("test."))
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn re_registration_replaces_entry() {
        register(action("test.dup", "one"));
        register(action("test.dup", "two"));

        assert_eq!(resolve("test.dup").unwrap().slug, "two");
        assert!(by_slug("one").is_none());
    }
}
