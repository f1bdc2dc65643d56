use crate::api::reply::{ErrorReply, StubReply};
use crate::catalog::ModelCatalog;
use crate::workflow::runner::Runner;
use driftcore::CoreError;
use log::warn;
use serde_json::Value;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{http::StatusCode, reply, Filter, Rejection, Reply};

const MAX_BODY_BYTES: u64 = 64 * 1024;

/// All HTTP routes, with rejections rendered as JSON errors.
pub fn routes(
    runner: Arc<Runner>,
    catalog: Arc<ModelCatalog>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let runner_filter = warp::any().map(move || runner.clone());
    let catalog_filter = warp::any().map(move || catalog.clone());

    let nearest_route = warp::path!("api" / "nearest_points")
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and(runner_filter.clone())
        .and_then(nearest_points);

    let predict_route = warp::path!("api" / "predict_trajectory")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<Value>())
        .and(runner_filter.clone())
        .and_then(predict_trajectory);

    let status_route = warp::path!("api" / "status")
        .and(warp::get())
        .and(runner_filter)
        .map(|runner: Arc<Runner>| reply::json(&runner.status()));

    let models_route = warp::path!("api" / "models")
        .and(warp::get())
        .and(catalog_filter.clone())
        .map(|catalog: Arc<ModelCatalog>| reply::json(&catalog.list()));

    let model_details_route = warp::path!("api" / "models" / String)
        .and(warp::get())
        .and(catalog_filter)
        .map(model_details);

    let vessels_route = warp::path!("api" / "v1" / "vessels")
        .and(warp::get())
        .map(|| not_implemented("vessel tracking"));

    let rescue_route = warp::path!("api" / "v1" / "rescue" / "request")
        .and(warp::post())
        .map(|| not_implemented("rescue dispatch"));

    nearest_route
        .or(predict_route)
        .or(status_route)
        .or(models_route)
        .or(model_details_route)
        .or(vessels_route)
        .or(rescue_route)
        .recover(handle_rejection)
}

async fn nearest_points(
    params: HashMap<String, String>,
    runner: Arc<Runner>,
) -> Result<reply::WithStatus<reply::Json>, Infallible> {
    Ok(match runner.nearest_points(&params).await {
        Ok(result) => reply::with_status(reply::json(&result), StatusCode::OK),
        Err(err) => error_reply(&err),
    })
}

async fn predict_trajectory(
    body: Value,
    runner: Arc<Runner>,
) -> Result<reply::WithStatus<reply::Json>, Infallible> {
    Ok(match runner.predict_trajectory(&body).await {
        Ok(result) => reply::with_status(reply::json(&result), StatusCode::OK),
        Err(err) => error_reply(&err),
    })
}

fn model_details(id: String, catalog: Arc<ModelCatalog>) -> reply::WithStatus<reply::Json> {
    match catalog.details(&id) {
        Ok(Some(metadata)) => reply::with_status(reply::json(&metadata), StatusCode::OK),
        Ok(None) => json_error("Model not found", StatusCode::NOT_FOUND),
        Err(err) => {
            warn!("reading details for model {}: {}", id, err);
            json_error(&err.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn not_implemented(service: &str) -> reply::WithStatus<reply::Json> {
    reply::with_status(
        reply::json(&StubReply {
            error: "not yet implemented".to_string(),
            service: service.to_string(),
        }),
        StatusCode::NOT_IMPLEMENTED,
    )
}

fn error_reply(err: &CoreError) -> reply::WithStatus<reply::Json> {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    json_error(&err.to_string(), status)
}

fn json_error(message: &str, status: StatusCode) -> reply::WithStatus<reply::Json> {
    reply::with_status(
        reply::json(&ErrorReply {
            error: message.to_string(),
        }),
        status,
    )
}

async fn handle_rejection(
    rejection: Rejection,
) -> Result<reply::WithStatus<reply::Json>, Infallible> {
    let (message, status) = if rejection.is_not_found() {
        ("not found".to_string(), StatusCode::NOT_FOUND)
    } else if let Some(err) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        (format!("invalid JSON body: {}", err), StatusCode::BAD_REQUEST)
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        ("request body too large".to_string(), StatusCode::PAYLOAD_TOO_LARGE)
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        ("expected a JSON body".to_string(), StatusCode::UNSUPPORTED_MEDIA_TYPE)
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        ("method not allowed".to_string(), StatusCode::METHOD_NOT_ALLOWED)
    } else {
        warn!("unhandled rejection: {:?}", rejection);
        ("internal error".to_string(), StatusCode::INTERNAL_SERVER_ERROR)
    };
    Ok(json_error(&message, status))
}
