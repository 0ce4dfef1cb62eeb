//! Pet Intake Service
//!
//! Validates "add pet" submissions and hands accepted pets to the directory.
//!
//! Validation runs a fixed pipeline of typed field validators. Each one
//! returns the parsed value or a [`ValidationError`]; every failure is
//! collected before deciding, so a rejected form reports all of its problems
//! at once and nothing is stored.

use std::borrow::Cow;
use std::net::IpAddr;
use std::num::IntErrorKind;

use validator::{ValidateUrl, ValidationError, ValidationErrors};

use crate::application::dto::AddPetForm;
use crate::application::services::DirectoryService;
use crate::domain::{NewPet, Pet, Species, MAX_AGE, MIN_AGE};
use crate::shared::error::AppError;
use crate::shared::validation::FormErrors;

const REQUIRED: &str = "This field is required.";
const INVALID_CHOICE: &str = "Not a valid choice.";
const INVALID_URL: &str = "Invalid URL.";
const INVALID_INTEGER: &str = "Not a valid integer value.";
const CSRF_MISSING: &str = "The CSRF token is missing.";
const CSRF_SESSION_MISSING: &str = "The CSRF session token is missing.";
const CSRF_MISMATCH: &str = "The CSRF tokens do not match.";

/// How the submitted `csrf_token` field is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfPolicy<'a> {
    /// No token is required.
    Disabled,
    /// The submission must carry this token; `None` when the client has none.
    Expect(Option<&'a str>),
}

/// Result of a submission that did not fail at the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// The pet passed validation and was stored.
    Accepted(Pet),
    /// Validation failed; nothing was stored.
    Rejected(FormErrors),
}

impl IntakeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, IntakeOutcome::Accepted(_))
    }
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Record a failed validator under `field`, passing successes through.
fn check<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    result: Result<T, ValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.add(field, error);
            None
        }
    }
}

pub fn validate_csrf(submitted: &str, policy: CsrfPolicy<'_>) -> Result<(), ValidationError> {
    let expected = match policy {
        CsrfPolicy::Disabled => return Ok(()),
        CsrfPolicy::Expect(expected) => expected,
    };

    if submitted.is_empty() {
        return Err(failure("csrf_missing", CSRF_MISSING));
    }
    let expected = expected.ok_or_else(|| failure("csrf_session_missing", CSRF_SESSION_MISSING))?;
    if !tokens_match(submitted, expected) {
        return Err(failure("csrf_mismatch", CSRF_MISMATCH));
    }
    Ok(())
}

/// Comparison whose running time does not depend on where the tokens differ.
fn tokens_match(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}

/// Required; surrounding whitespace is dropped.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(failure("required", REQUIRED));
    }
    Ok(name.to_string())
}

pub fn validate_species(raw: &str) -> Result<Species, ValidationError> {
    raw.parse::<Species>()
        .map_err(|_| failure("choice", INVALID_CHOICE))
}

/// Optional; blank input means "not provided".
///
/// Anything else must be `scheme://host...` where the host is an IP address
/// or a dotted hostname ending in an alphabetic top-level domain.
pub fn validate_image_url(raw: &str) -> Result<Option<String>, ValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Ok(None);
    }

    let valid = url.validate_url() && url_host(url).is_some_and(valid_host);
    if !valid {
        return Err(failure("url", INVALID_URL));
    }
    Ok(Some(url.to_string()))
}

/// Host part of `scheme://host[:port][/path][?query]`.
fn url_host(url: &str) -> Option<&str> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme.is_empty() || !scheme.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let end = rest.find(['/', '?', ':', '#']).unwrap_or(rest.len());
    let host = &rest[..end];
    (!host.is_empty()).then_some(host)
}

fn valid_host(host: &str) -> bool {
    if host.parse::<IpAddr>().is_ok() {
        return true;
    }

    let labels: Vec<&str> = host.split('.').collect();
    let Some((tld, _)) = labels.split_last() else {
        return false;
    };
    if labels.len() < 2 || !valid_tld(tld) {
        return false;
    }
    labels.iter().all(|label| valid_label(label))
}

/// Two to twenty letters, or a punycode `xn--` label.
fn valid_tld(tld: &str) -> bool {
    let tld = tld.to_ascii_lowercase();
    match tld.strip_prefix("xn--") {
        Some(rest) => {
            !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        }
        None => (2..=20).contains(&tld.len()) && tld.bytes().all(|b| b.is_ascii_alphabetic()),
    }
}

fn valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub fn validate_age(raw: &str) -> Result<i32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(failure("required", REQUIRED));
    }

    let age = match raw.parse::<i64>() {
        Ok(age) => age,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(age_range_error());
        }
        Err(_) => return Err(failure("integer", INVALID_INTEGER)),
    };

    if !(i64::from(MIN_AGE)..=i64::from(MAX_AGE)).contains(&age) {
        return Err(age_range_error());
    }
    i32::try_from(age).map_err(|_| age_range_error())
}

fn age_range_error() -> ValidationError {
    let mut error = ValidationError::new("range").with_message(Cow::Owned(format!(
        "Number must be between {} and {}.",
        MIN_AGE, MAX_AGE
    )));
    error.add_param(Cow::Borrowed("min"), &MIN_AGE);
    error.add_param(Cow::Borrowed("max"), &MAX_AGE);
    error
}

/// Blank notes are stored as absent.
pub fn normalize_notes(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Run every field validator and build the pet only if all of them pass.
pub fn validate_submission(
    form: &AddPetForm,
    csrf: CsrfPolicy<'_>,
) -> Result<NewPet, FormErrors> {
    let mut errors = ValidationErrors::new();

    let csrf_ok = check(&mut errors, "csrf_token", validate_csrf(&form.csrf_token, csrf));
    let name = check(&mut errors, "name", validate_name(&form.name));
    let species = check(&mut errors, "species", validate_species(&form.species));
    let photo_url = check(&mut errors, "image_url", validate_image_url(&form.image_url));
    let age = check(&mut errors, "age", validate_age(&form.age));

    match (csrf_ok, name, species, photo_url, age) {
        (Some(()), Some(name), Some(species), Some(photo_url), Some(age)) => Ok(NewPet {
            name,
            species,
            photo_url,
            age,
            notes: normalize_notes(&form.notes),
            available: true,
        }),
        _ => Err(FormErrors::from_validation(&errors, &AddPetForm::FIELDS)),
    }
}

/// Validate a submission and, when it passes, store it through `directory`.
///
/// Validation failures come back as [`IntakeOutcome::Rejected`]; storage
/// failures are returned as errors.
pub async fn submit<D>(
    directory: &D,
    form: &AddPetForm,
    csrf: CsrfPolicy<'_>,
) -> Result<IntakeOutcome, AppError>
where
    D: DirectoryService + ?Sized,
{
    match validate_submission(form, csrf) {
        Ok(new_pet) => {
            let pet = directory.add(new_pet).await?;
            Ok(IntakeOutcome::Accepted(pet))
        }
        Err(errors) => {
            tracing::info!(errors = %errors.summary(), "Pet intake rejected");
            Ok(IntakeOutcome::Rejected(errors))
        }
    }
}
