//! CreatePoint View State
//!
//! All page state lives in one struct and changes only through
//! [`CreatePointState::apply`]. A transition may ask for a side effect
//! ([`FollowUp`]) which the controller executes and later answers with
//! another command.

use reactive_stores::Store;

use crate::models::{AttachedImage, CatalogItem, ContactForm, Coordinates, FormField, UNSELECTED};
use crate::submission::PointSubmission;

/// Outcome of a remote data source
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

impl<T: Clone> LoadState<Vec<T>> {
    /// Loaded entries, or none while idle, loading or failed
    pub fn entries(&self) -> Vec<T> {
        self.loaded().cloned().unwrap_or_default()
    }
}

impl<T> From<Result<T, String>> for LoadState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(message) => LoadState::Failed(message),
        }
    }
}

/// Remote sources the page depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Position,
    Items,
    States,
    Cities,
}

/// Monotonic id of a city request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// A city fetch issued for one UF selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRequest {
    pub id: RequestId,
    pub uf: String,
}

/// Form lifecycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
    Submitted,
    /// Submission failed or was blocked; data is kept for a retry
    Rejected(String),
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormPhase::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

/// Selected catalog item ids, kept in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedItems(Vec<u32>);

impl SelectedItems {
    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: u32) {
        if let Some(index) = self.0.iter().position(|selected| *selected == id) {
            self.0.remove(index);
        } else {
            self.0.push(id);
        }
    }

    pub fn ids(&self) -> &[u32] {
        &self.0
    }
}

/// Named transitions of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// (Re)load one data source
    Reload(DataSource),
    PositionResolved(Result<Coordinates, String>),
    ItemsLoaded(Result<Vec<CatalogItem>, String>),
    StatesLoaded(Result<Vec<String>, String>),
    CitiesLoaded {
        request: CityRequest,
        result: Result<Vec<String>, String>,
    },
    SelectState(String),
    SelectCity(String),
    PickPosition(Coordinates),
    EditField(FormField, String),
    ToggleItem(u32),
    AttachImage(Option<AttachedImage>),
    Submit,
    SubmitFinished(Result<(), String>),
}

impl Command {
    fn is_user_edit(&self) -> bool {
        matches!(
            self,
            Command::SelectState(_)
                | Command::SelectCity(_)
                | Command::PickPosition(_)
                | Command::EditField(..)
                | Command::ToggleItem(_)
                | Command::AttachImage(_)
        )
    }
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum FollowUp {
    LocatePosition,
    FetchItems,
    FetchStates,
    /// Fetch cities, superseding any request still in flight
    FetchCities(CityRequest),
    /// Abort the city request in flight
    CancelCities,
    Submit(PointSubmission),
    /// Point created: confirm to the user and leave the page
    Confirm,
}

/// Coordinate submitted when the map was never clicked
pub const UNPICKED_POSITION: Coordinates = Coordinates { latitude: 0.0, longitude: 0.0 };

/// Page state of the collection point form
#[derive(Debug, Clone, Store)]
pub struct CreatePointState {
    pub items: LoadState<Vec<CatalogItem>>,
    pub states: LoadState<Vec<String>>,
    pub cities: LoadState<Vec<String>>,
    pub initial_position: LoadState<Coordinates>,
    pub contact: ContactForm,
    pub selected_state: String,
    pub selected_city: String,
    pub selected_items: SelectedItems,
    pub selected_position: Option<Coordinates>,
    pub image: Option<AttachedImage>,
    pub phase: FormPhase,
    pub last_request: u64,
    pub pending_cities: Option<CityRequest>,
}

impl Default for CreatePointState {
    fn default() -> Self {
        Self {
            items: LoadState::Idle,
            states: LoadState::Idle,
            cities: LoadState::Idle,
            initial_position: LoadState::Idle,
            contact: ContactForm::default(),
            selected_state: UNSELECTED.to_string(),
            selected_city: UNSELECTED.to_string(),
            selected_items: SelectedItems::default(),
            selected_position: None,
            image: None,
            phase: FormPhase::Idle,
            last_request: 0,
            pending_cities: None,
        }
    }
}

impl CreatePointState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command and return the side effect it requires, if any
    pub fn apply(&mut self, command: Command) -> Option<FollowUp> {
        if command.is_user_edit() {
            if self.phase.is_submitting() {
                log::debug!("Ignoring {:?} while submitting", command);
                return None;
            }
            self.phase = FormPhase::Editing;
        }

        match command {
            Command::Reload(source) => self.reload(source),
            Command::PositionResolved(result) => {
                self.initial_position = result.into();
                None
            }
            Command::ItemsLoaded(result) => {
                self.items = result.into();
                None
            }
            Command::StatesLoaded(result) => {
                self.states = result.into();
                None
            }
            Command::CitiesLoaded { request, result } => self.apply_cities(request, result),
            Command::SelectState(uf) => self.select_state(uf),
            Command::SelectCity(city) => {
                self.selected_city = city;
                None
            }
            Command::PickPosition(position) => {
                self.selected_position = Some(position);
                None
            }
            Command::EditField(field, value) => {
                self.contact.set(field, value);
                None
            }
            Command::ToggleItem(id) => {
                self.selected_items.toggle(id);
                None
            }
            Command::AttachImage(image) => {
                self.image = image;
                None
            }
            Command::Submit => self.begin_submit(),
            Command::SubmitFinished(result) => self.finish_submit(result),
        }
    }

    /// Where the map should be centered before the user picks a point
    pub fn map_center(&self, fallback: Coordinates) -> Coordinates {
        self.initial_position.loaded().copied().unwrap_or(fallback)
    }

    fn reload(&mut self, source: DataSource) -> Option<FollowUp> {
        match source {
            DataSource::Position => {
                if self.initial_position.is_loading() {
                    return None;
                }
                self.initial_position = LoadState::Loading;
                Some(FollowUp::LocatePosition)
            }
            DataSource::Items => {
                if self.items.is_loading() {
                    return None;
                }
                self.items = LoadState::Loading;
                Some(FollowUp::FetchItems)
            }
            DataSource::States => {
                if self.states.is_loading() {
                    return None;
                }
                self.states = LoadState::Loading;
                Some(FollowUp::FetchStates)
            }
            DataSource::Cities => {
                if self.selected_state == UNSELECTED {
                    return None;
                }
                Some(FollowUp::FetchCities(self.issue_city_request()))
            }
        }
    }

    fn select_state(&mut self, uf: String) -> Option<FollowUp> {
        if uf == self.selected_state {
            return None;
        }
        self.selected_state = uf;
        self.selected_city = UNSELECTED.to_string();

        if self.selected_state == UNSELECTED {
            self.cities = LoadState::Idle;
            return self.pending_cities.take().map(|_| FollowUp::CancelCities);
        }
        Some(FollowUp::FetchCities(self.issue_city_request()))
    }

    fn issue_city_request(&mut self) -> CityRequest {
        self.last_request += 1;
        let request = CityRequest {
            id: RequestId(self.last_request),
            uf: self.selected_state.clone(),
        };
        self.pending_cities = Some(request.clone());
        self.cities = LoadState::Loading;
        request
    }

    fn apply_cities(&mut self, request: CityRequest, result: Result<Vec<String>, String>) -> Option<FollowUp> {
        if self.pending_cities.as_ref() != Some(&request) {
            log::debug!("Dropping stale cities of {} (request {})", request.uf, request.id.0);
            return None;
        }
        self.pending_cities = None;
        self.cities = result.into();
        None
    }

    fn begin_submit(&mut self) -> Option<FollowUp> {
        if self.phase.is_submitting() {
            return None;
        }
        let position = self.selected_position.unwrap_or(UNPICKED_POSITION);
        self.phase = FormPhase::Submitting;
        Some(FollowUp::Submit(PointSubmission {
            contact: self.contact.clone(),
            uf: self.selected_state.clone(),
            city: self.selected_city.clone(),
            position,
            items: self.selected_items.ids().to_vec(),
            image: self.image.clone(),
        }))
    }

    fn finish_submit(&mut self, result: Result<(), String>) -> Option<FollowUp> {
        if !self.phase.is_submitting() {
            return None;
        }
        match result {
            Ok(()) => {
                self.phase = FormPhase::Submitted;
                Some(FollowUp::Confirm)
            }
            Err(message) => {
                self.phase = FormPhase::Rejected(message);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str) -> CatalogItem {
        CatalogItem {
            id,
            image_url: format!("http://localhost:3333/uploads/{}.svg", id),
            name: name.to_string(),
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn expect_city_request(follow_up: Option<FollowUp>) -> CityRequest {
        match follow_up {
            Some(FollowUp::FetchCities(request)) => request,
            other => panic!("expected FetchCities, got {:?}", other),
        }
    }

    fn submitted(follow_up: Option<FollowUp>) -> PointSubmission {
        match follow_up {
            Some(FollowUp::Submit(submission)) => submission,
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = CreatePointState::new();
        assert_eq!(state.selected_state, UNSELECTED);
        assert_eq!(state.selected_city, UNSELECTED);
        assert_eq!(state.phase, FormPhase::Idle);
        assert!(state.cities.entries().is_empty());
    }

    #[test]
    fn test_reload_sources_on_mount() {
        let mut state = CreatePointState::new();
        assert_eq!(state.apply(Command::Reload(DataSource::Position)), Some(FollowUp::LocatePosition));
        assert_eq!(state.apply(Command::Reload(DataSource::Items)), Some(FollowUp::FetchItems));
        assert_eq!(state.apply(Command::Reload(DataSource::States)), Some(FollowUp::FetchStates));
        assert!(state.items.is_loading());

        // Already in flight
        assert_eq!(state.apply(Command::Reload(DataSource::Items)), None);
        // No UF selected, nothing to fetch
        assert_eq!(state.apply(Command::Reload(DataSource::Cities)), None);
        // Loading data does not count as user editing
        assert_eq!(state.phase, FormPhase::Idle);
    }

    #[test]
    fn test_load_results_are_stored_per_source() {
        let mut state = CreatePointState::new();
        state.apply(Command::Reload(DataSource::Items));
        state.apply(Command::ItemsLoaded(Ok(vec![make_item(1, "Lâmpadas"), make_item(2, "Papel")])));
        assert_eq!(state.items.loaded().map(|items| items.len()), Some(2));

        state.apply(Command::StatesLoaded(Err("network error".to_string())));
        assert_eq!(state.states.error(), Some("network error"));

        // Failed source can be retried
        assert_eq!(state.apply(Command::Reload(DataSource::States)), Some(FollowUp::FetchStates));
        state.apply(Command::StatesLoaded(Ok(names(&["SP", "RJ"]))));
        assert_eq!(state.states.loaded(), Some(&names(&["SP", "RJ"])));
    }

    #[test]
    fn test_position_falls_back_when_geolocation_fails() {
        let fallback = Coordinates::new(-15.78, -47.93);
        let mut state = CreatePointState::new();
        assert_eq!(state.map_center(fallback), fallback);

        state.apply(Command::PositionResolved(Err("permission denied".to_string())));
        assert_eq!(state.map_center(fallback), fallback);
        assert_eq!(state.initial_position.error(), Some("permission denied"));

        let here = Coordinates::new(-23.55, -46.63);
        state.apply(Command::PositionResolved(Ok(here)));
        assert_eq!(state.map_center(fallback), here);
    }

    #[test]
    fn test_selecting_state_issues_city_request() {
        let mut state = CreatePointState::new();
        let request = expect_city_request(state.apply(Command::SelectState("SP".to_string())));
        assert_eq!(request.uf, "SP");
        assert!(state.cities.is_loading());
        assert_eq!(state.phase, FormPhase::Editing);

        state.apply(Command::CitiesLoaded { request, result: Ok(names(&["Campinas", "Santos"])) });
        assert_eq!(state.cities.entries(), names(&["Campinas", "Santos"]));
        assert_eq!(state.pending_cities, None);
    }

    #[test]
    fn test_stale_city_response_is_ignored() {
        let pairs = [("SP", "RJ"), ("RJ", "SP"), ("MG", "BA"), ("AC", "AM")];
        for (first, second) in pairs {
            let mut state = CreatePointState::new();
            let stale = expect_city_request(state.apply(Command::SelectState(first.to_string())));
            let fresh = expect_city_request(state.apply(Command::SelectState(second.to_string())));
            assert!(fresh.id > stale.id);

            // Newer response arrives first, then the old one
            state.apply(Command::CitiesLoaded { request: fresh, result: Ok(vec![format!("{} city", second)]) });
            state.apply(Command::CitiesLoaded { request: stale, result: Ok(vec![format!("{} city", first)]) });

            assert_eq!(state.cities.entries(), vec![format!("{} city", second)]);
            assert_eq!(state.selected_state, second);
        }
    }

    #[test]
    fn test_stale_response_while_newer_request_in_flight() {
        let mut state = CreatePointState::new();
        let stale = expect_city_request(state.apply(Command::SelectState("SP".to_string())));
        let _fresh = expect_city_request(state.apply(Command::SelectState("RJ".to_string())));

        state.apply(Command::CitiesLoaded { request: stale, result: Ok(names(&["Campinas"])) });
        assert!(state.cities.is_loading());
        assert!(state.cities.entries().is_empty());
    }

    #[test]
    fn test_unselected_state_resets_city_and_suppresses_fetch() {
        let mut state = CreatePointState::new();
        let request = expect_city_request(state.apply(Command::SelectState("SP".to_string())));
        state.apply(Command::CitiesLoaded { request, result: Ok(names(&["Campinas", "Santos"])) });
        state.apply(Command::SelectCity("Santos".to_string()));

        assert_eq!(state.apply(Command::SelectState(UNSELECTED.to_string())), None);
        assert_eq!(state.selected_city, UNSELECTED);
        assert_eq!(state.cities, LoadState::Idle);
        assert!(state.cities.entries().is_empty());
    }

    #[test]
    fn test_unselected_state_cancels_request_in_flight() {
        let mut state = CreatePointState::new();
        let request = expect_city_request(state.apply(Command::SelectState("SP".to_string())));
        assert_eq!(state.apply(Command::SelectState(UNSELECTED.to_string())), Some(FollowUp::CancelCities));

        // Late response for the cancelled request changes nothing
        state.apply(Command::CitiesLoaded { request, result: Ok(names(&["Campinas"])) });
        assert_eq!(state.cities, LoadState::Idle);
    }

    #[test]
    fn test_new_state_resets_city_selection() {
        let mut state = CreatePointState::new();
        let request = expect_city_request(state.apply(Command::SelectState("SP".to_string())));
        state.apply(Command::CitiesLoaded { request, result: Ok(names(&["Campinas"])) });
        state.apply(Command::SelectCity("Campinas".to_string()));

        expect_city_request(state.apply(Command::SelectState("RJ".to_string())));
        assert_eq!(state.selected_city, UNSELECTED);
        assert!(state.cities.entries().is_empty());
    }

    #[test]
    fn test_reselecting_same_state_is_noop() {
        let mut state = CreatePointState::new();
        let request = expect_city_request(state.apply(Command::SelectState("SP".to_string())));
        state.apply(Command::CitiesLoaded { request, result: Ok(names(&["Campinas"])) });
        state.apply(Command::SelectCity("Campinas".to_string()));

        assert_eq!(state.apply(Command::SelectState("SP".to_string())), None);
        assert_eq!(state.selected_city, "Campinas");
    }

    #[test]
    fn test_failed_cities_can_be_retried() {
        let mut state = CreatePointState::new();
        let first = expect_city_request(state.apply(Command::SelectState("PE".to_string())));
        state.apply(Command::CitiesLoaded { request: first.clone(), result: Err("timeout".to_string()) });
        assert_eq!(state.cities.error(), Some("timeout"));

        let retry = expect_city_request(state.apply(Command::Reload(DataSource::Cities)));
        assert_eq!(retry.uf, "PE");
        assert!(retry.id > first.id);
        state.apply(Command::CitiesLoaded { request: retry, result: Ok(names(&["Recife"])) });
        assert_eq!(state.cities.entries(), names(&["Recife"]));
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        for id in [0, 1, 2, 42, u32::MAX] {
            let mut state = CreatePointState::new();
            state.apply(Command::ToggleItem(7));
            let before = state.selected_items.clone();

            state.apply(Command::ToggleItem(id));
            state.apply(Command::ToggleItem(id));
            assert_eq!(state.selected_items, before, "toggling {} twice", id);
        }
    }

    #[test]
    fn test_edit_field_leaves_other_fields() {
        for field in FormField::ALL {
            let mut state = CreatePointState::new();
            for other in FormField::ALL {
                state.apply(Command::EditField(other, format!("{}-initial", other.as_str())));
            }
            state.apply(Command::EditField(field, "changed".to_string()));

            for other in FormField::ALL {
                let expected = if other == field {
                    "changed".to_string()
                } else {
                    format!("{}-initial", other.as_str())
                };
                assert_eq!(state.contact.get(other), expected);
            }
        }
    }

    #[test]
    fn test_attach_image_replaces_previous() {
        let mut state = CreatePointState::new();
        let first = AttachedImage { name: "a.png".to_string(), size: 10, mime_type: "image/png".to_string() };
        let second = AttachedImage { name: "b.jpg".to_string(), size: 20, mime_type: "image/jpeg".to_string() };
        state.apply(Command::AttachImage(Some(first)));
        state.apply(Command::AttachImage(Some(second.clone())));
        assert_eq!(state.image, Some(second));
    }

    #[test]
    fn test_submit_items_in_selection_order() {
        let mut state = CreatePointState::new();
        state.apply(Command::PickPosition(Coordinates::new(1.0, 2.0)));
        for id in [3, 1, 5] {
            state.apply(Command::ToggleItem(id));
        }
        let submission = submitted(state.apply(Command::Submit));
        assert_eq!(submission.items_field(), "3,1,5");
        assert_eq!(submission.position, Coordinates::new(1.0, 2.0));
    }

    #[test]
    fn test_end_to_end_toggle_then_submit() {
        let mut state = CreatePointState::new();
        state.apply(Command::Reload(DataSource::Items));
        state.apply(Command::ItemsLoaded(Ok(vec![make_item(1, "Lâmpadas"), make_item(2, "Pilhas")])));

        state.apply(Command::ToggleItem(1));
        state.apply(Command::ToggleItem(2));
        state.apply(Command::ToggleItem(1));
        state.apply(Command::PickPosition(Coordinates::new(-23.5, -46.6)));

        let submission = submitted(state.apply(Command::Submit));
        assert_eq!(submission.items_field(), "2");
    }

    #[test]
    fn test_end_to_end_state_and_city_flow() {
        let mut state = CreatePointState::new();
        state.apply(Command::StatesLoaded(Ok(names(&["SP", "RJ"]))));

        let request = expect_city_request(state.apply(Command::SelectState("SP".to_string())));
        state.apply(Command::CitiesLoaded { request, result: Ok(names(&["Campinas", "Santos"])) });
        assert_eq!(state.cities.entries(), names(&["Campinas", "Santos"]));
        state.apply(Command::SelectCity("Santos".to_string()));

        state.apply(Command::SelectState(UNSELECTED.to_string()));
        assert_eq!(state.selected_city, UNSELECTED);
        assert!(state.cities.entries().is_empty());
    }

    #[test]
    fn test_submit_full_payload() {
        let mut state = CreatePointState::new();
        state.apply(Command::EditField(FormField::Name, "Mercado".to_string()));
        state.apply(Command::EditField(FormField::Email, "m@m.com".to_string()));
        state.apply(Command::EditField(FormField::Whatsapp, "1199".to_string()));
        let request = expect_city_request(state.apply(Command::SelectState("SP".to_string())));
        state.apply(Command::CitiesLoaded { request, result: Ok(names(&["Campinas"])) });
        state.apply(Command::SelectCity("Campinas".to_string()));
        state.apply(Command::PickPosition(Coordinates::new(-22.9, -47.06)));

        let submission = submitted(state.apply(Command::Submit));
        assert_eq!(submission.contact.name, "Mercado");
        assert_eq!(submission.uf, "SP");
        assert_eq!(submission.city, "Campinas");
        assert_eq!(submission.image, None);
        assert!(state.phase.is_submitting());
    }

    #[test]
    fn test_submit_without_map_click_sends_origin() {
        let mut state = CreatePointState::new();
        state.apply(Command::EditField(FormField::Name, "Mercado".to_string()));

        let submission = submitted(state.apply(Command::Submit));
        assert_eq!(submission.position, Coordinates::new(0.0, 0.0));
        assert_eq!(submission.contact.name, "Mercado");
        assert!(state.phase.is_submitting());
    }

    #[test]
    fn test_degraded_submission_allowed_when_lists_failed() {
        let mut state = CreatePointState::new();
        state.apply(Command::ItemsLoaded(Err("offline".to_string())));
        state.apply(Command::StatesLoaded(Err("offline".to_string())));
        state.apply(Command::PickPosition(Coordinates::new(0.0, 0.0)));

        let submission = submitted(state.apply(Command::Submit));
        assert_eq!(submission.uf, UNSELECTED);
        assert_eq!(submission.items_field(), "");
    }

    #[test]
    fn test_double_submit_is_noop() {
        let mut state = CreatePointState::new();
        state.apply(Command::PickPosition(Coordinates::new(1.0, 1.0)));
        assert!(matches!(state.apply(Command::Submit), Some(FollowUp::Submit(_))));
        assert_eq!(state.apply(Command::Submit), None);
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut state = CreatePointState::new();
        state.apply(Command::PickPosition(Coordinates::new(1.0, 1.0)));
        state.apply(Command::Submit);

        state.apply(Command::EditField(FormField::Name, "late".to_string()));
        state.apply(Command::ToggleItem(9));
        assert_eq!(state.contact.name, "");
        assert!(!state.selected_items.contains(9));
        assert!(state.phase.is_submitting());
    }

    #[test]
    fn test_submit_success_confirms() {
        let mut state = CreatePointState::new();
        state.apply(Command::PickPosition(Coordinates::new(1.0, 1.0)));
        state.apply(Command::Submit);
        assert_eq!(state.apply(Command::SubmitFinished(Ok(()))), Some(FollowUp::Confirm));
        assert_eq!(state.phase, FormPhase::Submitted);
    }

    #[test]
    fn test_submit_failure_keeps_data_for_retry() {
        let mut state = CreatePointState::new();
        state.apply(Command::EditField(FormField::Email, "m@m.com".to_string()));
        state.apply(Command::ToggleItem(4));
        state.apply(Command::PickPosition(Coordinates::new(1.0, 1.0)));
        state.apply(Command::Submit);

        assert_eq!(state.apply(Command::SubmitFinished(Err("HTTP 500".to_string()))), None);
        assert_eq!(state.phase.error(), Some("HTTP 500"));
        assert_eq!(state.contact.email, "m@m.com");
        assert!(state.selected_items.contains(4));

        // Editing clears the error, submitting again is possible
        state.apply(Command::EditField(FormField::Name, "Mercado".to_string()));
        assert_eq!(state.phase, FormPhase::Editing);
        let retry = submitted(state.apply(Command::Submit));
        assert_eq!(retry.items_field(), "4");
    }

    #[test]
    fn test_submit_finished_without_submit_is_ignored() {
        let mut state = CreatePointState::new();
        assert_eq!(state.apply(Command::SubmitFinished(Ok(()))), None);
        assert_eq!(state.phase, FormPhase::Idle);
    }
}
