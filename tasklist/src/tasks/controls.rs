//! View-state controls used by the UI layer.
//!
//! These only forward to [`Store::dispatch`]; `logout` additionally clears
//! the session and navigates back to the login screen.

use tasklist_proto::view::{Filter, SortField, SortOrder};

use super::clock::Clock;
use super::store::{Action, Store};
use crate::auth::SessionStorage;
use crate::router::{Route, Router};

/// Replace the status filter.
pub fn set_filter<C: Clock>(store: &mut Store<C>, filter: Filter) {
    tracing::debug!(%filter, "set filter");
    store.dispatch(Action::SetFilter(filter));
}

/// Replace the search query.
pub fn set_search<C: Clock>(store: &mut Store<C>, query: impl Into<String>) {
    store.dispatch(Action::SetSearchQuery(query.into()));
}

/// Replace the sort field.
pub fn set_sort_field<C: Clock>(store: &mut Store<C>, field: SortField) {
    tracing::debug!(%field, "set sort field");
    store.dispatch(Action::SetSortField(field));
}

/// Replace the sort order.
pub fn set_sort_order<C: Clock>(store: &mut Store<C>, order: SortOrder) {
    tracing::debug!(%order, "set sort order");
    store.dispatch(Action::SetSortOrder(order));
}

/// Sign out: drop the session, reset the store and go to the login page
/// with no history to return to.
pub fn logout<C, S>(store: &mut Store<C>, session: &S, router: &mut Router)
where
    C: Clock,
    S: SessionStorage + ?Sized,
{
    tracing::info!("logout");
    session.clear();
    store.dispatch(Action::ResetStore);
    router.reset(Route::Login);
}
