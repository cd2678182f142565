use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, Serialize};

use crate::error_handler::AppError;

/// Request payload for /predict.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Natural language question, possibly with location/rating hints
    /// appended by the client form.
    pub question: String,
}

/// Extracts the JSON body, converting axum's rejection into [`AppError`] so
/// a malformed body gets the usual `{error, message}` 400 response instead
/// of the default plain-text rejection.
impl<S> FromRequest<S> for PredictRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Self>::from_request(req, state).await?;
        Ok(body)
    }
}

/// Response payload for /predict.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Final model answer (plain text) or the fixed "no results" message.
    pub answer: String,
    /// Kept for client compatibility: always 200 on success.
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, response::IntoResponse};

    #[test]
    fn request_deserializes_question() {
        let req: PredictRequest =
            serde_json::from_str("{\"question\": \"Tôi muốn tìm khách sạn 4 sao\"}").unwrap();
        assert_eq!(req.question, "Tôi muốn tìm khách sạn 4 sao");
    }

    #[test]
    fn response_shape_matches_contract() {
        let resp = PredictResponse {
            answer: "Dưới đây là thông tin khách sạn A".into(),
            status_code: 200,
        };
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(v["status_code"], 200);
        assert!(v["answer"].as_str().unwrap().starts_with("Dưới đây"));
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_body_maps_to_bad_request() {
        let err = PredictRequest::from_request(json_request("{\"question\": "), &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_question_field_maps_to_bad_request() {
        let err = PredictRequest::from_request(json_request("{}"), &())
            .await
            .unwrap_err();
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
