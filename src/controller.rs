//! CreatePoint Controller
//!
//! Single owner of the page store. Sends commands through
//! [`CreatePointState::apply`](crate::state::CreatePointState::apply) and
//! executes the follow-ups it returns. Browser handles that cannot live in
//! the store (the selected file, the city request abort handle) are kept here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{AbortController, File};

use crate::api::{self, ApiError};
use crate::config::config;
use crate::context::{AppContext, Route};
use crate::geolocation;
use crate::models::AttachedImage;
use crate::state::{Command, CreatePointStateStoreFields, DataSource, FollowUp};
use crate::store::{create_point_store, store_apply, CreatePointStore};

/// Confirmation shown after the point is created
const CREATED_MESSAGE: &str = "Ponto de coleta criado.";

#[derive(Clone, Copy)]
pub struct Controller {
    pub store: CreatePointStore,
    image_file: StoredValue<Option<File>, LocalStorage>,
    city_abort: StoredValue<Option<AbortController>, LocalStorage>,
    ctx: AppContext,
}

impl Controller {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            store: create_point_store(),
            image_file: StoredValue::new_local(None),
            city_abort: StoredValue::new_local(None),
            ctx,
        }
    }

    /// Kick off the independent loads of the page
    pub fn start(&self) {
        for source in [DataSource::Position, DataSource::Items, DataSource::States] {
            self.send(Command::Reload(source));
        }
    }

    /// Cancel outstanding work when the page goes away
    pub fn shutdown(&self) {
        self.abort_cities();
    }

    pub fn send(&self, command: Command) {
        if let Some(follow_up) = store_apply(&self.store, command) {
            self.run(follow_up);
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.store
            .phase()
            .try_with_untracked(|phase| phase.is_submitting())
            .unwrap_or(false)
    }

    /// Replace the selected image; ignored while a submission is running
    pub fn attach_file(&self, file: Option<File>) {
        if self.is_submitting() {
            return;
        }
        let image = file.as_ref().map(|f| AttachedImage {
            name: f.name(),
            size: f.size() as u64,
            mime_type: f.type_(),
        });
        self.image_file.set_value(file);
        self.send(Command::AttachImage(image));
    }

    fn run(&self, follow_up: FollowUp) {
        let this = *self;
        match follow_up {
            FollowUp::LocatePosition => spawn_local(async move {
                let result = geolocation::current_position(config().geolocation_timeout_ms)
                    .await
                    .map_err(|e| {
                        log::warn!("Geolocation failed: {}", e);
                        e.user_message().to_string()
                    });
                this.send(Command::PositionResolved(result));
            }),
            FollowUp::FetchItems => spawn_local(async move {
                let result = api::list_items().await.map_err(|e| report("items", e));
                this.send(Command::ItemsLoaded(result));
            }),
            FollowUp::FetchStates => spawn_local(async move {
                let result = api::list_states().await.map_err(|e| report("states", e));
                this.send(Command::StatesLoaded(result));
            }),
            FollowUp::FetchCities(request) => {
                self.abort_cities();
                let abort = AbortController::new().ok();
                self.city_abort.set_value(abort.clone());

                spawn_local(async move {
                    match api::list_cities(&request.uf, abort.as_ref()).await {
                        Err(ApiError::Aborted) => {
                            log::debug!("City request {} for {} aborted", request.id.0, request.uf);
                        }
                        result => {
                            let result = result.map_err(|e| report("cities", e));
                            this.send(Command::CitiesLoaded { request, result });
                        }
                    }
                });
            }
            FollowUp::CancelCities => self.abort_cities(),
            FollowUp::Submit(submission) => {
                let file = self.image_file.get_value();
                spawn_local(async move {
                    let result = api::create_point(&submission, file.as_ref())
                        .await
                        .map_err(|e| report("point submission", e));
                    this.send(Command::SubmitFinished(result));
                });
            }
            FollowUp::Confirm => {
                log::info!("Collection point created");
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message(CREATED_MESSAGE);
                }
                self.ctx.navigate(Route::Home);
            }
        }
    }

    fn abort_cities(&self) {
        if let Some(abort) = self.city_abort.try_update_value(|slot| slot.take()).flatten() {
            abort.abort();
        }
    }
}

fn report(what: &str, err: ApiError) -> String {
    log::warn!("Request for {} failed: {}", what, err);
    err.user_message()
}

/// Get the controller of the current page from context
pub fn use_controller() -> Controller {
    expect_context::<Controller>()
}
