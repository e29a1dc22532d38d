//! HTTP handlers for the REST and MVC endpoints.
//!
//! Each handler corresponds to an endpoint and delegates to the store or the
//! fake-data source held in the application state. JSON endpoints return
//! `Json<T>`; page endpoints return a [`PageResponse`] carrying either a view
//! model or a post-mutation redirect.

use axum::{
    extract::{Form, State},
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::dto::{EditPersonForm, PersonForm};
use super::error::AppError;
use super::state::AppState;
use super::views::{self, PageResponse, ViewModel};
use crate::models::{Currency, Nation, Person};

/// Result type for JSON handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for page handlers.
pub type PageResult = Result<PageResponse, AppError>;

const WELCOME_MESSAGE: &str = "Welcome to the person registry.";
const PERSON_LIST_PATH: &str = "/person/personList";

const NATION_COUNT: usize = 10;
const CURRENCY_COUNT: usize = 20;

// =============================================================================
// Health and Version
// =============================================================================

/// GET /
///
/// Health check endpoint. Always succeeds with a fixed literal body.
pub async fn health_check() -> &'static str {
    info!("Health check endpoint called");
    "HEALTH CHECK OK!"
}

/// GET /version
pub async fn version() -> &'static str {
    info!("Version endpoint called");
    "The actual version is 1.0.0"
}

// =============================================================================
// Fake Data
// =============================================================================

/// GET /nations
///
/// A JSON array of ten freshly generated nation records.
pub async fn nations(State(state): State<AppState>) -> HandlerResult<Vec<Nation>> {
    info!("Nations endpoint called");
    let nations = (0..NATION_COUNT)
        .map(|_| state.faker.next_nation())
        .collect();
    Ok(Json(nations))
}

/// GET /currencies
///
/// A JSON array of twenty freshly generated currency records.
pub async fn currencies(State(state): State<AppState>) -> HandlerResult<Vec<Currency>> {
    info!("Currencies endpoint called");
    let currencies = (0..CURRENCY_COUNT)
        .map(|_| state.faker.next_currency())
        .collect();
    Ok(Json(currencies))
}

// =============================================================================
// Person Pages
// =============================================================================

/// GET /person/, /person/home, /person/index
///
/// Landing page with a static greeting.
pub async fn index() -> PageResponse {
    info!("Index page requested");
    PageResponse::View(ViewModel::new(views::INDEX).attribute("message", WELCOME_MESSAGE))
}

/// GET /person/testRetrieve
///
/// The full person list as a JSON array.
pub async fn retrieve_persons(State(state): State<AppState>) -> HandlerResult<Vec<Person>> {
    info!("Retrieve persons endpoint called");
    let persons = state.store.list().await?;
    Ok(Json(persons))
}

/// GET /person/personList
///
/// List page bound to the store's current records.
pub async fn person_list(State(state): State<AppState>) -> PageResult {
    info!("Person list page requested");
    let persons = state.store.list().await?;
    Ok(PageResponse::View(
        ViewModel::new(views::PERSON_LIST).attribute("persons", persons),
    ))
}

/// GET /person/addPerson
///
/// Add-person form page with an empty form-backing object.
pub async fn show_add_person() -> PageResponse {
    info!("Add person page requested");
    PageResponse::View(
        ViewModel::new(views::ADD_PERSON).attribute("personForm", PersonForm::default()),
    )
}

/// POST /person/addPerson
///
/// Validates the submitted names; on failure re-renders the form with an
/// error message and leaves the store untouched. On success stores a new
/// person (generating an id when the form supplies none) and redirects to
/// the list page.
pub async fn save_person(
    State(state): State<AppState>,
    Form(form): Form<PersonForm>,
) -> PageResult {
    info!("Add person form submitted");

    let first_name = form.first_name.clone().unwrap_or_default();
    let last_name = form.last_name.clone().unwrap_or_default();

    if first_name.is_empty() || last_name.is_empty() {
        warn!("Rejected person submission with missing name fields");
        return Ok(PageResponse::View(
            ViewModel::new(views::ADD_PERSON)
                .attribute("personForm", &form)
                .attribute("errorMessage", "First name and last name are required."),
        ));
    }

    let id = form
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let person = state
        .store
        .add(Person::new(id, first_name, last_name))
        .await?;
    info!(id = %person.id, "Person added");

    Ok(PageResponse::Redirect(PERSON_LIST_PATH))
}

/// POST /person/personToEdit
///
/// Edit page populated from the submitted fields. This is a pass-through
/// echo of the posted record, not a store lookup.
pub async fn person_to_edit(Form(form): Form<EditPersonForm>) -> PageResult {
    info!("Edit person page requested");
    let person = form.into_person()?;
    Ok(PageResponse::View(
        ViewModel::new(views::EDIT_PERSON).attribute("per", person),
    ))
}

/// POST /person/personEdit
///
/// Updates the record matching the submitted id, then redirects to the list
/// page. An unknown id is a 404.
pub async fn person_edit(
    State(state): State<AppState>,
    Form(form): Form<EditPersonForm>,
) -> PageResult {
    info!("Edit person form submitted");
    let person = form.into_person()?;
    let updated = state.store.update(person).await?;
    info!(id = %updated.id, "Person updated");
    Ok(PageResponse::Redirect(PERSON_LIST_PATH))
}

/// POST /person/personDelete
///
/// Removes the record matching the submitted id, then redirects to the list
/// page. An unknown id is a 404.
pub async fn person_delete(
    State(state): State<AppState>,
    Form(form): Form<EditPersonForm>,
) -> PageResult {
    info!("Delete person form submitted");
    let person = form.into_person()?;
    let removed = state.store.remove(&person.id).await?;
    info!(id = %removed.id, "Person removed");
    Ok(PageResponse::Redirect(PERSON_LIST_PATH))
}
