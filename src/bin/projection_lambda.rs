//! AWS Lambda HTTP handler: station inputs in, projection result out
//!
//! The request body is a JSON `StationInputs` document (an empty body uses
//! the defaults). Malformed or out-of-range inputs get a 400 response.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::json;

use charging_station_model::{inputs::parse_inputs, LoadError, ProjectionEngine};

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(response)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let text = match event.body() {
        Body::Empty => "",
        Body::Text(text) => text.as_str(),
        Body::Binary(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => {
                let body = json!({ "error": "request body is not valid UTF-8" }).to_string();
                return json_response(400, body);
            }
        },
    };

    let inputs = match parse_inputs(text) {
        Ok(inputs) => inputs,
        Err(err @ (LoadError::Json(_) | LoadError::Invalid(_))) => {
            log::info!("Rejected request: {err}");
            return json_response(400, json!({ "error": err.to_string() }).to_string());
        }
        Err(err) => return Err(err.into()),
    };

    let result = ProjectionEngine::default().compute(&inputs);
    json_response(200, serde_json::to_string(&result)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
