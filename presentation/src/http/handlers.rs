//! HTTP handlers
//!
//! Handlers translate between HTTP and the use cases. Malformed path or
//! query parameters are answered with a `422` failed envelope instead of the
//! framework's plain-text rejection.

use super::response::{self, PredictBody, StatsView};
use super::state::ApiState;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use derma_application::{PredictError, PredictInput};
use derma_domain::{CatalogError, DiseaseId, Rating};
use serde::Deserialize;
use tracing::{debug, warn};

pub const WELCOME_MESSAGE: &str = "Hello! This is a web-site for classifying images with skin \
                                   diseases using machine learning models.";

/// Name of the multipart field carrying the image
pub const UPLOAD_FIELD: &str = "file";

fn unprocessable(text: impl Into<String>) -> Response {
    response::failed(StatusCode::UNPROCESSABLE_ENTITY, text)
}

fn catalog_failure(error: CatalogError) -> Response {
    response::failed(StatusCode::OK, error.to_string())
}

pub async fn root() -> Response {
    response::message(WELCOME_MESSAGE)
}

pub async fn list_diseases(State(api): State<ApiState>) -> Response {
    match api.catalog.list().await {
        Ok(diseases) => response::data(diseases),
        Err(e) => catalog_failure(e),
    }
}

pub async fn get_disease(
    State(api): State<ApiState>,
    disease_id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(disease_id) = match disease_id {
        Ok(path) => path,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };
    match api.catalog.get(DiseaseId::new(disease_id)).await {
        Ok(name) => response::data(name),
        Err(e) => catalog_failure(e),
    }
}

/// `GET /diseases/new` is a lookup by an id that is not an integer
pub async fn get_disease_new() -> Response {
    unprocessable("Invalid URL: Cannot parse `new` to a `i64`")
}

#[derive(Debug, Deserialize)]
pub struct NewDiseaseParams {
    pub disease_id: i64,
    pub disease_name: String,
}

pub async fn add_disease(
    State(api): State<ApiState>,
    params: Result<Query<NewDiseaseParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };
    let id = DiseaseId::new(params.disease_id);
    match api.catalog.add(id, params.disease_name.clone()).await {
        Ok(()) => response::message(format!(
            "Disease {} with disease_id {} has been added!",
            params.disease_name, id
        )),
        Err(e) => catalog_failure(e),
    }
}

pub async fn predict(
    State(api): State<ApiState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };

    let input = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return unprocessable("No file uploaded"),
            Err(e) => return response::failed(e.status(), e.body_text()),
        };
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        match field.bytes().await {
            Ok(bytes) => {
                let input = PredictInput::new(bytes.to_vec());
                break match filename {
                    Some(name) => input.with_filename(name),
                    None => input,
                };
            }
            Err(e) => return response::failed(e.status(), e.body_text()),
        }
    };

    match api.predict.execute(input).await {
        Ok(prediction) => response::successful(PredictBody {
            predict: prediction.sentence(),
            filename: prediction.filename,
        }),
        Err(e) if e.is_client_error() => response::failed(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e @ PredictError::MissingLabel(_)) => response::failed(StatusCode::OK, e.to_string()),
        Err(e) => {
            warn!("Prediction failed on the server side: {}", e);
            response::failed(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub async fn stats(State(api): State<ApiState>) -> Response {
    let stats = api.stats.execute().await;
    response::data(StatsView {
        started_at: stats.started_at,
        images_loaded: stats.images_loaded,
        rating: stats.rating.into(),
    })
}

pub async fn review(
    State(api): State<ApiState>,
    rating: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(raw) = match rating {
        Ok(path) => path,
        Err(rejection) => return unprocessable(rejection.body_text()),
    };
    let rating = match Rating::new(raw) {
        Ok(rating) => rating,
        Err(e) => {
            debug!(rating = raw, "Rejected review");
            return unprocessable(e.to_string());
        }
    };
    api.reviews.submit(rating).await;
    response::message(format!("Your mark {} has been added. Thank you!", rating))
}
