//! Server-side view rendering.
//!
//! Handlers describe a page as a [`ViewModel`]: a view identifier plus a
//! named attribute map. The built-in renderer turns the known views into
//! minimal HTML; the contract between handlers and renderer is the attribute
//! map, so tests assert on attributes rather than markup.

use std::collections::BTreeMap;

use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Serialize;
use serde_json::Value;

/// View identifier for the landing page.
pub const INDEX: &str = "index";
/// View identifier for the person list page.
pub const PERSON_LIST: &str = "personList";
/// View identifier for the add-person form page.
pub const ADD_PERSON: &str = "addPerson";
/// View identifier for the edit-person form page.
pub const EDIT_PERSON: &str = "editPerson";

/// A view identifier plus the named attributes handed to the renderer.
#[derive(Debug, Clone)]
pub struct ViewModel {
    view: &'static str,
    attributes: BTreeMap<&'static str, Value>,
}

impl ViewModel {
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            attributes: BTreeMap::new(),
        }
    }

    /// Attach a named attribute. Values that fail to serialize are stored as
    /// null rather than aborting the response.
    pub fn attribute(mut self, name: &'static str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.attributes.insert(name, value);
        self
    }

    pub fn view(&self) -> &'static str {
        self.view
    }

    pub fn attribute_value(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

/// Outcome of a page-oriented handler: either a rendered view or a redirect
/// issued after a successful mutation.
#[derive(Debug)]
pub enum PageResponse {
    View(ViewModel),
    Redirect(&'static str),
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        match self {
            PageResponse::View(model) => Html(render(&model)).into_response(),
            PageResponse::Redirect(path) => Redirect::to(path).into_response(),
        }
    }
}

/// Render a view model to HTML, dispatching on the view identifier.
pub fn render(model: &ViewModel) -> String {
    match model.view {
        INDEX => render_index(model),
        PERSON_LIST => render_person_list(model),
        ADD_PERSON => render_add_person(model),
        EDIT_PERSON => render_edit_person(model),
        other => render_fallback(other, model),
    }
}

fn render_index(model: &ViewModel) -> String {
    let message = attr_str(model, "message");
    page(
        "Home",
        &format!("<h1>Person Registry</h1>\n<p>{}</p>", escape(message)),
    )
}

fn render_person_list(model: &ViewModel) -> String {
    let mut body = String::from("<h1>Persons</h1>\n<table>\n<tr><th>First name</th><th>Last name</th><th></th><th></th></tr>\n");

    let persons = model
        .attribute_value("persons")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    for person in &persons {
        let id = json_str(person, "id");
        let first = json_str(person, "firstName");
        let last = json_str(person, "lastName");
        body.push_str(&format!(
            "<tr><td>{first}</td><td>{last}</td>\
             <td>{edit}</td><td>{delete}</td></tr>\n",
            first = escape(first),
            last = escape(last),
            edit = person_action_form("/person/personToEdit", "Edit", id, first, last),
            delete = person_action_form("/person/personDelete", "Delete", id, first, last),
        ));
    }

    body.push_str("</table>\n<p><a href=\"/person/addPerson\">Add person</a></p>");
    page("Person List", &body)
}

fn render_add_person(model: &ViewModel) -> String {
    let mut body = String::from("<h1>Add Person</h1>\n");
    if let Some(error) = model.attribute_value("errorMessage").and_then(Value::as_str) {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(error)));
    }

    let form = model.attribute_value("personForm").cloned().unwrap_or(Value::Null);
    body.push_str(&format!(
        "<form method=\"post\" action=\"/person/addPerson\">\n\
         <label>First name <input name=\"firstName\" value=\"{first}\"></label>\n\
         <label>Last name <input name=\"lastName\" value=\"{last}\"></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        first = escape(json_str(&form, "firstName")),
        last = escape(json_str(&form, "lastName")),
    ));
    page("Add Person", &body)
}

fn render_edit_person(model: &ViewModel) -> String {
    let person = model.attribute_value("per").cloned().unwrap_or(Value::Null);
    let body = format!(
        "<h1>Edit Person</h1>\n\
         <form method=\"post\" action=\"/person/personEdit\">\n\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\n\
         <label>First name <input name=\"firstName\" value=\"{first}\"></label>\n\
         <label>Last name <input name=\"lastName\" value=\"{last}\"></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>",
        id = escape(json_str(&person, "id")),
        first = escape(json_str(&person, "firstName")),
        last = escape(json_str(&person, "lastName")),
    );
    page("Edit Person", &body)
}

fn render_fallback(view: &str, model: &ViewModel) -> String {
    let mut body = format!("<h1>{}</h1>\n<dl>\n", escape(view));
    for (name, value) in &model.attributes {
        body.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>\n",
            escape(name),
            escape(&value.to_string()),
        ));
    }
    body.push_str("</dl>");
    page(view, &body)
}

/// Inline form posting a full person record to a mutation route.
fn person_action_form(action: &str, label: &str, id: &str, first: &str, last: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\
         <input type=\"hidden\" name=\"firstName\" value=\"{first}\">\
         <input type=\"hidden\" name=\"lastName\" value=\"{last}\">\
         <button type=\"submit\">{label}</button></form>",
        action = escape(action),
        id = escape(id),
        first = escape(first),
        last = escape(last),
        label = escape(label),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body,
    )
}

fn attr_str<'a>(model: &'a ViewModel, name: &str) -> &'a str {
    model
        .attribute_value(name)
        .and_then(Value::as_str)
        .unwrap_or("")
}

fn json_str<'a>(value: &'a Value, field: &str) -> &'a str {
    value.get(field).and_then(Value::as_str).unwrap_or("")
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
