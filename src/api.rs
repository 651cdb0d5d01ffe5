//! Client for the remote event API.
//!
//! Every call is a single request; failures are returned to the caller for
//! display and never retried.

use crate::models::{
    AcceptedInvitation, Comment, CreatedEvent, Event, EventAdmin, EventPayload, Invitation,
    InvitationDetails, PersonalizedInvitation,
};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to reach the event API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Unexpected response from the event API: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status reported by the API, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// ==================== Request Bodies ====================

#[derive(Debug, Serialize)]
struct InvitationRequest<'a> {
    event: &'a str,
    event_edit_uuid: &'a str,
}

#[derive(Debug, Serialize)]
struct PersonalizedInvitationRequest<'a> {
    event: &'a str,
    event_edit_uuid: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct AcceptInvitationRequest<'a> {
    invitation: &'a str,
    name: &'a str,
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    event: &'a str,
    author_uuid: &'a str,
    content: &'a str,
}

/// Build the user-facing message for a failed response.
///
/// Uses the `detail` field of a JSON error body when present, the whole JSON
/// body otherwise, and a generic status message when the body is not JSON.
pub fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            _ => serde_json::Value::Object(map).to_string(),
        },
        Ok(other) => other.to_string(),
        Err(_) => format!("API error: {}", status.as_u16()),
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// Endpoint paths are appended to the base URL, which is normalized to
    /// end with a slash.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let base_url = format!("{}/", base_url.trim_end_matches('/'));
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and turn non-success statuses into `ApiError::Status`.
    async fn send(&self, request: RequestBuilder, what: &str) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| {
            warn!("Event API request failed ({}): {}", what, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            debug!("Event API {} -> {}", what, status);
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        let message = error_message(status, &body);
        warn!("Event API error ({}): {} {}", what, status, message);
        Err(ApiError::Status { status, message })
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> ApiResult<T> {
        let response = self.send(request, what).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(format!("{}: {}", what, e)))
    }

    /// For endpoints answering `204 No Content` or a body nobody reads.
    async fn empty(&self, request: RequestBuilder, what: &str) -> ApiResult<()> {
        self.send(request, what).await.map(|_| ())
    }

    // ==================== Events ====================

    pub async fn create_event(&self, event: &EventPayload) -> ApiResult<CreatedEvent> {
        let request = self.client.post(self.url("event-admin/")).json(event);
        self.json(request, "create event").await
    }

    pub async fn get_event(&self, uuid: &str) -> ApiResult<Event> {
        let request = self.client.get(self.url(&format!("event/{}/", uuid)));
        self.json(request, "get event").await
    }

    pub async fn get_event_admin(&self, uuid: &str, edit_uuid: &str) -> ApiResult<EventAdmin> {
        let request = self
            .client
            .get(self.url(&format!("event-admin/{}/{}/", uuid, edit_uuid)));
        self.json(request, "get event admin").await
    }

    pub async fn update_event(
        &self,
        uuid: &str,
        edit_uuid: &str,
        event: &EventPayload,
    ) -> ApiResult<()> {
        let request = self
            .client
            .put(self.url(&format!("event-admin/{}/{}/", uuid, edit_uuid)))
            .json(event);
        self.empty(request, "update event").await
    }

    pub async fn delete_event(&self, uuid: &str, edit_uuid: &str) -> ApiResult<()> {
        let request = self
            .client
            .delete(self.url(&format!("event-admin/{}/{}/", uuid, edit_uuid)));
        self.empty(request, "delete event").await
    }

    pub async fn remove_participant(&self, participant_id: i64, edit_uuid: &str) -> ApiResult<()> {
        let request = self.client.delete(self.url(&format!(
            "event-admin/remove-participant/{}/{}/",
            participant_id, edit_uuid
        )));
        self.empty(request, "remove participant").await
    }

    /// Calendar file for an event, as `text/calendar` source.
    pub async fn get_event_ics(&self, uuid: &str) -> ApiResult<String> {
        let request = self.client.get(self.url(&format!("event/ics/{}/", uuid)));
        let response = self.send(request, "get event ics").await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Decode(format!("get event ics: {}", e)))
    }

    // ==================== Generic Invitations ====================

    pub async fn create_invitation(
        &self,
        event_uuid: &str,
        edit_uuid: &str,
    ) -> ApiResult<Invitation> {
        let request = self.client.post(self.url("invitation/")).json(&InvitationRequest {
            event: event_uuid,
            event_edit_uuid: edit_uuid,
        });
        self.json(request, "create invitation").await
    }

    pub async fn get_invitation(&self, invitation_uuid: &str) -> ApiResult<InvitationDetails> {
        let request = self
            .client
            .get(self.url(&format!("invitation/{}/", invitation_uuid)));
        self.json(request, "get invitation").await
    }

    pub async fn delete_invitation(&self, invitation_uuid: &str, edit_uuid: &str) -> ApiResult<()> {
        let request = self.client.delete(self.url(&format!(
            "invitation/remove/{}/{}/",
            invitation_uuid, edit_uuid
        )));
        self.empty(request, "delete invitation").await
    }

    pub async fn accept_invitation(
        &self,
        invitation_uuid: &str,
        name: &str,
        email: &str,
    ) -> ApiResult<AcceptedInvitation> {
        let request = self
            .client
            .post(self.url("invitation/accept/"))
            .json(&AcceptInvitationRequest {
                invitation: invitation_uuid,
                name,
                email,
            });
        self.json(request, "accept invitation").await
    }

    // ==================== Personalized Invitations ====================

    pub async fn create_personalized_invitation(
        &self,
        event_uuid: &str,
        edit_uuid: &str,
        name: &str,
    ) -> ApiResult<PersonalizedInvitation> {
        let request = self
            .client
            .post(self.url("personalized-invitation/"))
            .json(&PersonalizedInvitationRequest {
                event: event_uuid,
                event_edit_uuid: edit_uuid,
                name,
            });
        self.json(request, "create personalized invitation").await
    }

    pub async fn get_personalized_invitation(
        &self,
        invitation_uuid: &str,
    ) -> ApiResult<InvitationDetails> {
        let request = self
            .client
            .get(self.url(&format!("personalized-invitation/{}/", invitation_uuid)));
        self.json(request, "get personalized invitation").await
    }

    pub async fn delete_personalized_invitation(
        &self,
        invitation_uuid: &str,
        edit_uuid: &str,
    ) -> ApiResult<()> {
        let request = self.client.delete(self.url(&format!(
            "personalized-invitation/remove/{}/{}/",
            invitation_uuid, edit_uuid
        )));
        self.empty(request, "delete personalized invitation").await
    }

    pub async fn accept_personalized_invitation(
        &self,
        invitation_uuid: &str,
        name: &str,
        email: &str,
    ) -> ApiResult<AcceptedInvitation> {
        let request = self
            .client
            .post(self.url("personalized-invitation/accept/"))
            .json(&AcceptInvitationRequest {
                invitation: invitation_uuid,
                name,
                email,
            });
        self.json(request, "accept personalized invitation").await
    }

    // ==================== Comments ====================

    /// Post a comment as a participant (participant UUID) or as the
    /// organizer (edit UUID).
    pub async fn create_comment(
        &self,
        event_uuid: &str,
        author_uuid: &str,
        content: &str,
    ) -> ApiResult<()> {
        let request = self.client.post(self.url("comment/")).json(&CommentRequest {
            event: event_uuid,
            author_uuid,
            content,
        });
        self.empty(request, "create comment").await
    }

    pub async fn get_comments(&self, event_uuid: &str) -> ApiResult<Vec<Comment>> {
        let request = self.client.get(self.url(&format!("comment/{}/", event_uuid)));
        self.json(request, "get comments").await
    }

    pub async fn delete_comment(&self, comment_uuid: &str, author_uuid: &str) -> ApiResult<()> {
        let request = self.client.delete(self.url(&format!(
            "comment/remove/{}/{}",
            comment_uuid, author_uuid
        )));
        self.empty(request, "delete comment").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn event_body(uuid: &str) -> serde_json::Value {
        serde_json::json!({
            "uuid": uuid,
            "name": "Picnic",
            "location": "Park",
            "start_datetime": "2025-07-01T12:00:00Z",
            "end_datetime": "2025-07-01T16:00:00Z",
            "participants": []
        })
    }

    fn payload() -> EventPayload {
        EventPayload {
            name: "Picnic".to_string(),
            location: "Park".to_string(),
            start_datetime: "2025-07-01T12:00".to_string(),
            end_datetime: "2025-07-01T16:00".to_string(),
            organizer_email: "ola@example.com".to_string(),
            organizer_name: None,
            description: None,
            link: None,
            participants_limit: Some(10),
        }
    }

    // ==================== error_message Tests ====================

    #[test]
    fn test_error_message_uses_detail() {
        let message = error_message(StatusCode::BAD_REQUEST, r#"{"detail": "Event is full."}"#);
        assert_eq!(message, "Event is full.");
    }

    #[test]
    fn test_error_message_falls_back_to_json_body() {
        let message =
            error_message(StatusCode::BAD_REQUEST, r#"{"email": ["Enter a valid email."]}"#);
        assert_eq!(message, r#"{"email":["Enter a valid email."]}"#);
    }

    #[test]
    fn test_error_message_non_json_body() {
        let message = error_message(StatusCode::BAD_GATEWAY, "<html>Bad gateway</html>");
        assert_eq!(message, "API error: 502");
    }

    #[test]
    fn test_error_message_empty_body() {
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "API error: 404");
    }

    #[test]
    fn test_base_url_is_normalized() {
        assert_eq!(ApiClient::new("http://api.local/api").base_url(), "http://api.local/api/");
        assert_eq!(ApiClient::new("http://api.local/api//").base_url(), "http://api.local/api/");
    }

    // ==================== Endpoint Tests ====================

    #[tokio::test]
    async fn test_create_event_posts_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/event-admin/"))
            .and(body_json(serde_json::json!({
                "name": "Picnic",
                "location": "Park",
                "start_datetime": "2025-07-01T12:00",
                "end_datetime": "2025-07-01T16:00",
                "organizer_email": "ola@example.com",
                "participants_limit": 10
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "uuid": "ev-1",
                "edit_uuid": "edit-1",
                "name": "Picnic"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api/", mock_server.uri()));
        let created = client.create_event(&payload()).await.expect("Should succeed");

        assert_eq!(
            created,
            CreatedEvent {
                uuid: "ev-1".to_string(),
                edit_uuid: "edit-1".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_get_event_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/event/ev-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(event_body("ev-1")))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        let event = client.get_event("ev-1").await.expect("Should succeed");

        assert_eq!(event.uuid, "ev-1");
        assert_eq!(event.location, "Park");
    }

    #[tokio::test]
    async fn test_get_event_not_found_carries_detail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/event/missing/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Not found."})),
            )
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        let err = client.get_event("missing").await.unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "Not found.");
    }

    #[tokio::test]
    async fn test_get_event_invalid_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/event/ev-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        let err = client.get_event("ev-1").await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:1/api");
        let err = client.get_event("ev-1").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_delete_event_accepts_no_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/event-admin/ev-1/edit-1/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        client.delete_event("ev-1", "edit-1").await.expect("Should succeed");
    }

    #[tokio::test]
    async fn test_update_event_uses_put() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/event-admin/ev-1/edit-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(event_body("ev-1")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        client
            .update_event("ev-1", "edit-1", &payload())
            .await
            .expect("Should succeed");
    }

    #[tokio::test]
    async fn test_remove_participant_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/event-admin/remove-participant/42/edit-1/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        client.remove_participant(42, "edit-1").await.expect("Should succeed");
    }

    #[tokio::test]
    async fn test_create_invitation_sends_edit_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/invitation/"))
            .and(body_json(serde_json::json!({
                "event": "ev-1",
                "event_edit_uuid": "edit-1"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"uuid": "inv-1", "event": "ev-1"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        let invitation = client
            .create_invitation("ev-1", "edit-1")
            .await
            .expect("Should succeed");
        assert_eq!(invitation.uuid, "inv-1");
    }

    #[tokio::test]
    async fn test_create_personalized_invitation_sends_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/personalized-invitation/"))
            .and(body_json(serde_json::json!({
                "event": "ev-1",
                "event_edit_uuid": "edit-1",
                "name": "Ala"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(
                serde_json::json!({"uuid": "pinv-1", "event": "ev-1", "name": "Ala"}),
            ))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        let invitation = client
            .create_personalized_invitation("ev-1", "edit-1", "Ala")
            .await
            .expect("Should succeed");
        assert_eq!(invitation.name, "Ala");
    }

    #[tokio::test]
    async fn test_accept_invitation_returns_participant() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/invitation/accept/"))
            .and(body_json(serde_json::json!({
                "invitation": "inv-1",
                "name": "Jan",
                "email": "jan@example.com"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"uuid": "part-1", "event": "ev-1"})),
            )
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        let accepted = client
            .accept_invitation("inv-1", "Jan", "jan@example.com")
            .await
            .expect("Should succeed");
        assert_eq!(accepted.uuid, "part-1");
        assert_eq!(accepted.event.as_deref(), Some("ev-1"));
    }

    #[tokio::test]
    async fn test_accept_personalized_invitation_full_event() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/personalized-invitation/accept/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                serde_json::json!({"detail": "Participants limit reached."}),
            ))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        let err = client
            .accept_personalized_invitation("pinv-1", "Ala", "ala@example.com")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.to_string(), "Participants limit reached.");
    }

    #[tokio::test]
    async fn test_get_personalized_invitation_details() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/personalized-invitation/pinv-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "event_name": "Picnic",
                "event_uuid": "ev-1",
                "name": "Ala"
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        let details = client
            .get_personalized_invitation("pinv-1")
            .await
            .expect("Should succeed");
        assert_eq!(details.name.as_deref(), Some("Ala"));
        assert_eq!(details.event_uuid, "ev-1");
    }

    #[tokio::test]
    async fn test_delete_invitation_paths() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/invitation/remove/inv-1/edit-1/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/personalized-invitation/remove/pinv-1/edit-1/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        client
            .delete_invitation("inv-1", "edit-1")
            .await
            .expect("Should succeed");
        client
            .delete_personalized_invitation("pinv-1", "edit-1")
            .await
            .expect("Should succeed");
    }

    #[tokio::test]
    async fn test_comments_roundtrip_through_api() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/comment/"))
            .and(body_json(serde_json::json!({
                "event": "ev-1",
                "author_uuid": "part-1",
                "content": "See you there"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "uuid": "c-1"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/comment/ev-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"uuid": "c-1", "author": "Jan", "content": "See you there", "date": "2025-06-01T10:00:00Z"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/comment/remove/c-1/part-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        client
            .create_comment("ev-1", "part-1", "See you there")
            .await
            .expect("Should succeed");
        let comments = client.get_comments("ev-1").await.expect("Should succeed");
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].author, "Jan");
        client
            .delete_comment("c-1", "part-1")
            .await
            .expect("Should succeed");
    }

    #[tokio::test]
    async fn test_get_event_ics_returns_calendar_text() {
        let mock_server = MockServer::start().await;
        let calendar = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";

        Mock::given(method("GET"))
            .and(path("/api/event/ics/ev-1/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", "text/calendar")
                    .set_body_string(calendar),
            )
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(&format!("{}/api", mock_server.uri()));
        let ics = client.get_event_ics("ev-1").await.expect("Should succeed");
        assert_eq!(ics, calendar);
    }
}
