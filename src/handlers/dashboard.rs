//! Dashboard handlers

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Html,
    Form,
};

use super::page::{self, ResultArea};
use crate::inference::{self, PredictionContext};
use crate::models::SessionInput;
use crate::AppState;

/// Form with defaults, no result yet
pub async fn index() -> Html<String> {
    Html(page::render(&SessionInput::default(), ResultArea::Empty))
}

/// "Predict Attack" trigger
pub async fn predict(
    State(state): State<AppState>,
    form: Result<Form<SessionInput>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::debug!("Rejected dashboard form: {}", rejection);
            let body = page::render(
                &SessionInput::default(),
                ResultArea::Invalid(&rejection.body_text()),
            );
            return (StatusCode::BAD_REQUEST, Html(body));
        }
    };

    if let Err(errors) = input.check() {
        let body = page::render(&input, ResultArea::Invalid(&errors.to_string()));
        return (StatusCode::BAD_REQUEST, Html(body));
    }

    let ctx = PredictionContext::new(input);

    match inference::run(&state.client, &ctx).await {
        Ok(view) => (
            StatusCode::OK,
            Html(page::render(&ctx.input, ResultArea::Prediction(&view))),
        ),
        Err(_) => (
            StatusCode::BAD_GATEWAY,
            Html(page::render(&ctx.input, ResultArea::Failure)),
        ),
    }
}
