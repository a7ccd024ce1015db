//! CreatePoint Store
//!
//! Wraps [`CreatePointState`] in a `reactive_stores::Store` so views can
//! subscribe to single fields while every write goes through `apply`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::state::{Command, CreatePointState, FollowUp};

/// Type alias for the page store
pub type CreatePointStore = Store<CreatePointState>;

pub fn create_point_store() -> CreatePointStore {
    Store::new(CreatePointState::new())
}

/// Apply a command to the store, returning the follow-up it requests.
/// Responses arriving after the page was disposed are dropped.
pub fn store_apply(store: &CreatePointStore, command: Command) -> Option<FollowUp> {
    match store.try_update(|state| state.apply(command)) {
        Some(follow_up) => follow_up,
        None => {
            log::debug!("Store disposed, command dropped");
            None
        }
    }
}
