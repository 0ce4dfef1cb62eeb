//! Pet Handlers
//!
//! Listing page and the add-pet intake form.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::application::dto::AddPetForm;
use crate::application::services::{intake, CsrfPolicy, DirectoryService, DirectoryServiceImpl, IntakeOutcome};
use crate::infrastructure::metrics;
use crate::presentation::http::{cookies, views};
use crate::shared::error::AppError;
use crate::shared::validation::FormErrors;
use crate::startup::AppState;

/// Issue (or reuse) a CSRF token when protection is on.
fn csrf_for_form(state: &AppState, jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    if state.settings.security.csrf_enabled {
        let (jar, token) = cookies::ensure_csrf_token(jar);
        (jar, Some(token))
    } else {
        (jar, None)
    }
}

/// List every pet
pub async fn list_pets(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let directory = DirectoryServiceImpl::new(state.pets.clone());
    let pets = directory.list_all().await?;

    let (jar, flash) = cookies::take_flash(jar);
    Ok((jar, views::pets_list(&pets, flash.as_deref())))
}

/// Show the empty intake form
pub async fn new_pet_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (jar, token) = csrf_for_form(&state, jar);
    let page = views::pets_form(&AddPetForm::default(), &FormErrors::default(), token.as_deref());
    (jar, page)
}

/// Handle an intake submission
///
/// Accepted pets redirect to the listing with a confirmation; rejected
/// submissions re-render the form with the submitted values and errors.
pub async fn create_pet(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<AddPetForm>,
) -> Result<Response, AppError> {
    let expected = cookies::csrf_token(&jar);
    let policy = if state.settings.security.csrf_enabled {
        CsrfPolicy::Expect(expected.as_deref())
    } else {
        CsrfPolicy::Disabled
    };

    let directory = DirectoryServiceImpl::new(state.pets.clone());
    let outcome = intake::submit(&directory, &form, policy).await?;
    metrics::record_intake(outcome.is_accepted());

    match outcome {
        IntakeOutcome::Accepted(pet) => {
            let jar = cookies::set_flash(jar, format!("Added {} to pets list.", pet.name));
            Ok((jar, Redirect::to("/")).into_response())
        }
        IntakeOutcome::Rejected(errors) => {
            let (jar, token) = csrf_for_form(&state, jar);
            let page = views::pets_form(&form, &errors, token.as_deref());
            Ok((jar, page).into_response())
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".into())
}
