//! REST client for the family-events backend.

use gloo_net::http::Request;
use thiserror::Error;

use shared::api::{
    DeleteEventRequest, DeleteEventResponse, EventPayload, FamilyEventsRequest, LoginRequest,
    LoginResponse, RegisterRequest, RegisterResponse, SaveEventResponse,
};
use shared::models::EventRecord;

const API_BASE_URL: &str = "http://localhost:3002";

/// Errors surfaced by backend calls. Every failure is terminal for the
/// current action; there is no automatic retry.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("backend returned HTTP {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),

    /// The backend answered but refused the operation. Authorization
    /// failures arrive this way too, indistinguishable from other refusals.
    #[error("{0}")]
    Rejected(String),
}

pub struct ApiService;

impl ApiService {
    pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Self::post_json("/login", request).await?;
        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

        if !body.success {
            return Err(ApiError::Rejected("login rejected".to_string()));
        }
        Ok(body)
    }

    pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
        let response = Self::post_json("/register", request).await?;
        let body: RegisterResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

        if !body.success {
            let msg = body
                .msg
                .unwrap_or_else(|| "registration rejected".to_string());
            return Err(ApiError::Rejected(msg));
        }
        Ok(())
    }

    pub async fn create_event(payload: &EventPayload) -> Result<(), ApiError> {
        let response = Self::post_json("/new-event-entry", payload).await?;
        Self::expect_success(response).await
    }

    /// Full replace of the stored event document.
    pub async fn update_event(id: &str, payload: &EventPayload) -> Result<(), ApiError> {
        let response = Self::post_json(&format!("/update-event/{id}"), payload).await?;
        Self::expect_success(response).await
    }

    pub async fn family_events(family_id: &str) -> Result<Vec<EventRecord>, ApiError> {
        let request = FamilyEventsRequest {
            family_id: family_id.to_string(),
        };
        let response = Self::post_json("/get-family-events", &request).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))
    }

    pub async fn delete_event(id: &str, request: &DeleteEventRequest) -> Result<(), ApiError> {
        let response = Self::post_json(&format!("/delete-event/{id}"), request).await?;
        let body: DeleteEventResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

        if !body.deleted {
            return Err(ApiError::Rejected("event was not deleted".to_string()));
        }
        Ok(())
    }

    async fn post_json<T: serde::Serialize>(
        path: &str,
        body: &T,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let url = format!("{}{}", API_BASE_URL, path);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }

    async fn expect_success(response: gloo_net::http::Response) -> Result<(), ApiError> {
        let body: SaveEventResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

        if !body.success {
            return Err(ApiError::Rejected("backend refused the event".to_string()));
        }
        Ok(())
    }
}
