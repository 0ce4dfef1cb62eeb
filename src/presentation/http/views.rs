//! HTML Views
//!
//! Server-rendered pages. Every piece of user-supplied text goes through
//! [`escape`] before it reaches the markup.

use std::fmt::Write;

use axum::http::StatusCode;
use axum::response::Html;

use crate::application::dto::AddPetForm;
use crate::domain::{Pet, Species};
use crate::shared::validation::FormErrors;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&str>, body: &str) -> Html<String> {
    let flash = flash
        .map(|message| format!("<p class=\"flash\">{}</p>\n", escape(message)))
        .unwrap_or_default();

    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         {flash}{body}\
         </body>\n\
         </html>\n",
        title = escape(title),
        flash = flash,
        body = body,
    ))
}

/// Listing of every pet, with an optional one-time confirmation message.
pub fn pets_list(pets: &[Pet], flash: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Pets</h1>\n<a href=\"/add\">Add a pet</a>\n");

    if pets.is_empty() {
        body.push_str("<p class=\"empty\">No pets yet.</p>\n");
    } else {
        body.push_str("<ul class=\"pets\">\n");
        for pet in pets {
            let _ = write!(
                body,
                "<li class=\"pet\" id=\"pet-{id}\">",
                id = pet.id
            );
            if let Some(url) = &pet.photo_url {
                let _ = write!(
                    body,
                    "<img src=\"{src}\" alt=\"{alt}\" width=\"120\">",
                    src = escape(url),
                    alt = escape(&pet.name)
                );
            }
            let _ = write!(
                body,
                "<strong>{name}</strong> {species}, age {age}",
                name = escape(&pet.name),
                species = pet.species.label(),
                age = pet.age
            );
            if pet.available {
                body.push_str(" <em class=\"available\">Available</em>");
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }

    layout("Pets", flash, &body)
}

fn field_errors(errors: &FormErrors, field: &str) -> String {
    errors
        .messages_for(field)
        .map(|message| format!("<span class=\"error\">{}</span>", escape(message)))
        .collect()
}

fn text_input(label: &str, field: &str, value: &str, errors: &FormErrors) -> String {
    format!(
        "<p><label for=\"{field}\">{label}</label> \
         <input type=\"text\" id=\"{field}\" name=\"{field}\" value=\"{value}\"> {errors}</p>\n",
        field = field,
        label = label,
        value = escape(value),
        errors = field_errors(errors, field),
    )
}

fn species_select(selected: &str, errors: &FormErrors) -> String {
    let mut options = String::new();
    for species in Species::ALL {
        let marker = if species.as_str() == selected {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            "<option value=\"{value}\"{marker}>{label}</option>",
            value = species.as_str(),
            marker = marker,
            label = species.label()
        );
    }

    format!(
        "<p><label for=\"species\">Species</label> \
         <select id=\"species\" name=\"species\">{options}</select> {errors}</p>\n",
        options = options,
        errors = field_errors(errors, "species"),
    )
}

/// The intake form, filled with `form` and annotated with `errors`.
pub fn pets_form(form: &AddPetForm, errors: &FormErrors, csrf_token: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Add a pet</h1>\n<form method=\"POST\" action=\"/add\">\n");

    if let Some(token) = csrf_token {
        let _ = writeln!(
            body,
            "<input type=\"hidden\" name=\"csrf_token\" value=\"{}\">",
            escape(token)
        );
    }
    body.push_str(&field_errors(errors, "csrf_token"));
    body.push_str(&text_input("Pet Name", "name", &form.name, errors));
    body.push_str(&species_select(&form.species, errors));
    body.push_str(&text_input("Image URL", "image_url", &form.image_url, errors));
    body.push_str(&text_input("Age", "age", &form.age, errors));
    body.push_str(&text_input("Notes", "notes", &form.notes, errors));
    body.push_str("<button type=\"submit\">Add</button>\n</form>\n<a href=\"/\">Back to pets</a>\n");

    layout("Add a pet", None, &body)
}

/// Generic page for failed requests.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let body = format!(
        "<h1>{code} {reason}</h1>\n<p>{message}</p>\n<a href=\"/\">Back to pets</a>\n",
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
        message = escape(message),
    );
    layout("Error", None, &body)
}
