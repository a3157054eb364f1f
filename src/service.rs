//! JSON request/response boundary around [`analyze`].
//!
//! Transport agnostic: callers feed a request body and get back a status and a body.
//! Validation errors are reported verbatim, anything else is logged and answered
//! with a generic message.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::{analyzer::{analyze, AnalysisResult}, error::{AnalyzeError, Result}};

pub const SUCCESS_MESSAGE: &str = "Analysis successful";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    BadRequest,
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn is_success(self) -> bool {
        self == StatusCode::Ok
    }
}

/// `{"titles": [...], "abstracts": [...]}`; a missing list reads as empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub abstracts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Success {
        message: String,
        #[serde(flatten)]
        result: AnalysisResult,
    },
    Failure {
        error: String,
    },
}

impl AnalyzeResponse {
    fn failure(error: impl Into<String>) -> Self {
        AnalyzeResponse::Failure { error: error.into() }
    }
}

/// Run one request; panics inside the computation become internal errors
pub fn handle(request: &AnalyzeRequest) -> (StatusCode, AnalyzeResponse) {
    handle_with(request, |req| analyze(&req.titles, &req.abstracts))
}

/// `handle` over any analysis function
pub fn handle_with<F>(request: &AnalyzeRequest, run: F) -> (StatusCode, AnalyzeResponse)
where
    F: FnOnce(&AnalyzeRequest) -> Result<AnalysisResult>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run(request)))
        .unwrap_or_else(|payload| Err(AnalyzeError::Unexpected(panic_message(payload.as_ref()))));
    respond(outcome)
}

/// Map an analysis outcome to a status and body
pub fn respond(outcome: Result<AnalysisResult>) -> (StatusCode, AnalyzeResponse) {
    match outcome {
        Ok(result) => (
            StatusCode::Ok,
            AnalyzeResponse::Success {
                message: SUCCESS_MESSAGE.to_string(),
                result,
            },
        ),
        Err(AnalyzeError::Validation(err)) => {
            warn!(error = %err, "rejected analysis request");
            (StatusCode::BadRequest, AnalyzeResponse::failure(err.to_string()))
        }
        Err(AnalyzeError::Unexpected(message)) => {
            error!(error = %message, "error in analysis");
            (StatusCode::InternalServerError, AnalyzeResponse::failure(UNEXPECTED_MESSAGE))
        }
    }
}

/// Parse a JSON body, run it, serialize the response
///
/// # Arguments
/// * `body` - request JSON
/// * `pretty` - indent the response
pub fn handle_json(body: &str, pretty: bool) -> (StatusCode, String) {
    let (status, response) = match serde_json::from_str::<AnalyzeRequest>(body) {
        Ok(request) => handle(&request),
        Err(err) => {
            warn!(error = %err, "malformed analysis request");
            (StatusCode::BadRequest, AnalyzeResponse::failure(format!("Invalid request body: {err}")))
        }
    };
    let encoded = if pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    };
    match encoded {
        Ok(json) => (status, json),
        Err(err) => {
            error!(error = %err, "failed to encode analysis response");
            (
                StatusCode::InternalServerError,
                format!("{{\"error\":\"{UNEXPECTED_MESSAGE}\"}}"),
            )
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic during analysis".to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::error::ValidationError;

    fn request(titles: &[&str], abstracts: &[&str]) -> AnalyzeRequest {
        AnalyzeRequest {
            titles: titles.iter().map(|s| s.to_string()).collect(),
            abstracts: abstracts.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn success_carries_message_matrix_and_ranks() {
        let (status, response) = handle(&request(&["A", "B"], &["apple banana", "xylophone zebra"]));
        assert_eq!(status, StatusCode::Ok);
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["message"], json!(SUCCESS_MESSAGE));
        assert_eq!(body["similarity_matrix"], json!([[1.0, 0.0], [0.0, 1.0]]));
        assert_eq!(body["uniqueness_ranks"][0], json!({ "index": 0, "score": 1.0, "rank": 1, "abstract_length": 2 }));
        assert_eq!(body["uniqueness_ranks"][1]["index"], json!(1));
    }

    #[test]
    fn validation_errors_are_bad_requests() {
        let (status, response) = handle(&request(&["A"], &[]));
        assert_eq!(status, StatusCode::BadRequest);
        assert_eq!(status.as_u16(), 400);
        let expected = ValidationError::LengthMismatch { titles: 1, abstracts: 0 }.to_string();
        assert_eq!(response, AnalyzeResponse::Failure { error: expected });
    }

    #[test]
    fn unexpected_errors_are_generic() {
        let (status, response) = respond(Err(AnalyzeError::Unexpected("matrix went NaN".into())));
        assert_eq!(status, StatusCode::InternalServerError);
        assert_eq!(response, AnalyzeResponse::Failure { error: UNEXPECTED_MESSAGE.to_string() });
    }

    #[test]
    fn panics_become_internal_errors() {
        let (status, response) = handle_with(&request(&["A"], &["alpha beta"]), |_| panic!("similarity row out of bounds"));
        assert_eq!(status, StatusCode::InternalServerError);
        assert_eq!(status.as_u16(), 500);
        assert_eq!(response, AnalyzeResponse::Failure { error: UNEXPECTED_MESSAGE.to_string() });
    }

    #[test]
    fn handle_with_passes_the_request_through() {
        let (status, response) = handle_with(&request(&["A", "B"], &["cat dog", "cat dog"]), |req| {
            analyze(&req.titles, &req.abstracts)
        });
        assert_eq!(status, StatusCode::Ok);
        assert!(matches!(response, AnalyzeResponse::Success { .. }));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let (status, body) = handle_json(r#"{"titles": ["only"]}"#, false);
        assert_eq!(status, StatusCode::BadRequest);
        let body: Value = serde_json::from_str(&body).unwrap();
        assert!(body["error"].as_str().unwrap().contains("matching lists"));
    }

    #[test]
    fn malformed_json_is_bad_request() {
        let (status, body) = handle_json("{not json", false);
        assert_eq!(status, StatusCode::BadRequest);
        assert!(body.contains("Invalid request body"));
    }

    #[test]
    fn empty_lists_are_bad_request() {
        let (status, _) = handle_json(r#"{"titles": [], "abstracts": []}"#, true);
        assert_eq!(status, StatusCode::BadRequest);
    }

    #[test]
    fn panic_payloads_are_readable() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");
        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");
    }
}
