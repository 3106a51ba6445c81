// File: src/renderer.rs
// Purpose: Maud markup for the page layout, navigation bar and food form

use crate::config::Config;
use crate::field::Field;
use crate::form::FoodForm;
use crate::form_field::{FieldAttrs, FormField};
use maud::{html, Markup, DOCTYPE};

/// DOM id of the form, also the htmx swap target
pub const FORM_ID: &str = "food-form";

/// Full HTML document with the navigation bar above `body`
pub fn layout(config: &Config, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (config.page.title) " | " (config.project.name) }
                @if let Some(src) = config.htmx_src() {
                    script src=(src) defer {}
                }
            }
            body {
                (navbar(&config.project.name))
                main { (body) }
            }
        }
    }
}

pub fn navbar(name: &str) -> Markup {
    html! {
        nav class="navbar" {
            a href="/" class="navbar-brand" { (name) }
        }
    }
}

/// The page served at `/`
pub fn page(config: &Config, form: &FoodForm) -> Markup {
    layout(config, food_form(form))
}

/// The form with current values and any error messages
///
/// Rendered on its own as the htmx fragment.
pub fn food_form(form: &FoodForm) -> Markup {
    html! {
        form id=(FORM_ID) method="post" action="/" novalidate
            hx-post="/" hx-target="this" hx-swap="outerHTML"
            class="p-4 max-w-md mx-auto space-y-4" {
            @for field in Field::ALL {
                (field_control(form, field))
            }
            button type="submit" class="w-full bg-blue-500 text-white p-2 rounded hover:bg-blue-600" {
                "Submit"
            }
        }
    }
}

/// Label, control and inline error for one field
fn field_control(form: &FoodForm, field: Field) -> Markup {
    let attrs = form.record().field_attrs(field);
    let value = form.record().get(field);

    html! {
        div {
            label for=(attrs.name) class="block font-semibold" { (attrs.label) }
            @if attrs.is_select() {
                (select_control(&attrs, value))
            } @else {
                input type=[attrs.input_type] id=(attrs.name) name=(attrs.name) value=(value)
                    required[attrs.required] data-validate=(attrs.data_validate)
                    class="w-full border p-2 rounded";
            }
            @if let Some(message) = form.error(field) {
                p class="text-red-500 text-sm" { (message) }
            }
        }
    }
}

fn select_control(attrs: &FieldAttrs, value: &str) -> Markup {
    html! {
        select id=(attrs.name) name=(attrs.name) required[attrs.required]
            data-validate=(attrs.data_validate) class="w-full border p-2 rounded" {
            @for opt in &attrs.options {
                option value=(opt.value) selected[opt.value == value] { (opt.label) }
            }
        }
    }
}
