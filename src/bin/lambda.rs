//! HTTP front end for the calculator (AWS Lambda)
//!
//! POST a JSON form (`depositAmount`, `interestRate`, `investmentTerm`,
//! `interestPaid`). Responds 200 with the result, or 400 with field errors.
//! Add `?schedule=true` to include the yearly balance schedule.
//!
//! Settings are read from the file named by `TERM_DEPOSIT_CONFIG`, if set.

use lambda_http::http::{Method, StatusCode};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use log::{info, warn};
use serde_json::{json, Value};
use term_deposit::{calculate, BalanceSchedule, CalculatorSettings, DepositForm};

fn json_response(status: StatusCode, body: &Value) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?;
    Ok(response)
}

async fn function_handler(
    event: Request,
    settings: &CalculatorSettings,
) -> Result<Response<Body>, Error> {
    if event.method() != Method::POST {
        return json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            &json!({ "errors": [{ "field": null, "message": "Use POST with a JSON body." }] }),
        );
    }

    let with_schedule = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("schedule"))
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let form: DepositForm = match serde_json::from_slice(event.body().as_ref()) {
        Ok(form) => form,
        Err(e) => {
            warn!("Rejected request body: {}", e);
            let message = format!("Invalid JSON body: {}", e);
            return json_response(
                StatusCode::BAD_REQUEST,
                &json!({ "errors": [{ "field": null, "message": message }] }),
            );
        }
    };

    let input = match form.validate(&settings.rules) {
        Ok(input) => input,
        Err(errors) => {
            info!("Validation failed: {}", errors);
            return json_response(StatusCode::BAD_REQUEST, &json!({ "errors": errors }));
        }
    };

    let result = calculate(&input);
    let mut body = serde_json::to_value(result)?;
    if with_schedule {
        body["schedule"] = serde_json::to_value(&BalanceSchedule::for_input(&input).rows)?;
    }

    json_response(StatusCode::OK, &body)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config_path = std::env::var_os("TERM_DEPOSIT_CONFIG");
    let settings = CalculatorSettings::load_or_default(config_path.as_ref())?;
    let settings_ref = &settings;

    run(service_fn(move |event: Request| async move {
        function_handler(event, settings_ref).await
    }))
    .await
}
