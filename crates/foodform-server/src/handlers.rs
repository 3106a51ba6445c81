// File: src/handlers.rs
// Purpose: Route handlers for the form page

use crate::response_mode::ResponseMode;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    Form,
};
use foodform::renderer::{food_form, page};
use foodform::{FoodForm, FormRecord, ValidationResult};

/// GET / - the page with an empty form
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(page(&state.config, &FoodForm::new()).into_string())
}

/// POST / - validate and either accept (and reset) or re-render with errors
pub async fn submit_form(
    State(state): State<AppState>,
    mode: ResponseMode,
    Form(record): Form<FormRecord>,
) -> Response {
    let (form, outcome) = FoodForm::from_record(record).submit();

    match mode {
        ResponseMode::Json => {
            let (status, result) = if outcome.is_accepted() {
                (StatusCode::OK, ValidationResult::success())
            } else {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ValidationResult::failure(form.errors().clone()),
                )
            };
            (status, Json(result)).into_response()
        }
        ResponseMode::Fragment => Html(food_form(&form).into_string()).into_response(),
        ResponseMode::Page => Html(page(&state.config, &form).into_string()).into_response(),
    }
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Page Not Found", "The requested page does not exist.")
}

fn error_response(status: StatusCode, title: &str, message: &str) -> Response {
    let markup = maud::html! {
        (maud::DOCTYPE)
        html {
            head { title { (title) } }
            body {
                h1 { (status.as_u16()) " " (title) }
                p { (message) }
                a href="/" { "Go Home" }
            }
        }
    };
    (status, Html(markup.into_string())).into_response()
}
