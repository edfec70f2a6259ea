//! JSON response envelopes.
//!
//! Every endpoint answers with `{"status": "successful", ...}` or
//! `{"status": "failed", "message": "..."}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Successful(T),
    Failed(MessageBody),
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct PredictBody {
    pub filename: Option<String>,
    pub predict: String,
}

/// Rating field of the stats payload: a number, or a message before the first review
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RatingView {
    Score(f64),
    Message(&'static str),
}

pub const NO_REVIEWS_MESSAGE: &str = "There are no reviews yet!";

impl From<Option<f64>> for RatingView {
    fn from(average: Option<f64>) -> Self {
        match average {
            Some(score) => RatingView::Score(score),
            None => RatingView::Message(NO_REVIEWS_MESSAGE),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsView {
    pub started_at: String,
    pub images_loaded: u64,
    pub rating: RatingView,
}

pub fn successful<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(Envelope::Successful(body))).into_response()
}

pub fn message(text: impl Into<String>) -> Response {
    successful(MessageBody {
        message: text.into(),
    })
}

pub fn data<T: Serialize>(data: T) -> Response {
    successful(DataBody { data })
}

pub fn failed(status: StatusCode, text: impl Into<String>) -> Response {
    let body: Envelope<()> = Envelope::Failed(MessageBody {
        message: text.into(),
    });
    (status, Json(body)).into_response()
}
