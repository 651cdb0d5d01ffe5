//! Payloads exchanged with the remote event API and the page forms.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Someone who accepted an invitation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub id: i64,
    #[serde(default)]
    pub uuid: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Public view of an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub uuid: String,
    pub name: String,
    pub location: String,
    pub start_datetime: DateTime<FixedOffset>,
    pub end_datetime: DateTime<FixedOffset>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub organizer_name: Option<String>,
    #[serde(default)]
    pub organizer_email: Option<String>,
    #[serde(default)]
    pub participants_limit: Option<u32>,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// Event as seen by the holder of its edit key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventAdmin {
    #[serde(flatten)]
    pub event: Event,
    pub edit_uuid: String,
    #[serde(default)]
    pub invitations: Vec<Invitation>,
    #[serde(default)]
    pub personalized_invitations: Vec<PersonalizedInvitation>,
}

/// Identifiers returned when an event is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedEvent {
    pub uuid: String,
    pub edit_uuid: String,
}

/// Shareable link that lets anyone join an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invitation {
    pub uuid: String,
    pub event: String,
}

/// Link bound to one invitee's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalizedInvitation {
    pub uuid: String,
    pub event: String,
    pub name: String,
}

/// What an invitation page needs to know about its event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvitationDetails {
    pub event_name: String,
    pub event_uuid: String,
    /// Invitee name, only present for personalized invitations
    #[serde(default)]
    pub name: Option<String>,
}

/// Participant created by accepting an invitation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AcceptedInvitation {
    pub uuid: String,
    #[serde(default)]
    pub event: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub uuid: String,
    /// Display name of the author
    pub author: String,
    pub content: String,
    pub date: DateTime<FixedOffset>,
}

/// Comment ordering on the event page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// Read the `sort` query value; anything unrecognized means newest first.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("oldest") => SortOrder::Oldest,
            _ => SortOrder::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }
}

/// Sort comments in place by date.
pub fn sort_comments(comments: &mut [Comment], order: SortOrder) {
    match order {
        SortOrder::Newest => comments.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => comments.sort_by(|a, b| a.date.cmp(&b.date)),
    }
}

// ==================== Forms ====================

/// Event form as submitted by the browser. Every field arrives as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_datetime: String,
    #[serde(default)]
    pub end_datetime: String,
    #[serde(default)]
    pub organizer_email: String,
    #[serde(default)]
    pub organizer_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub participants_limit: String,
}

/// Event body sent to the API. Empty optional fields are omitted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EventPayload {
    pub name: String,
    pub location: String,
    pub start_datetime: String,
    pub end_datetime: String,
    pub organizer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants_limit: Option<u32>,
}

/// Local validation failure of an event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// A required field is blank; carries the field name
    MissingField(&'static str),
    InvalidParticipantsLimit,
}

/// Format used by `<input type="datetime-local">`.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl EventForm {
    /// Prefill the form with an existing event, for editing.
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            location: event.location.clone(),
            start_datetime: event.start_datetime.format(DATETIME_LOCAL_FORMAT).to_string(),
            end_datetime: event.end_datetime.format(DATETIME_LOCAL_FORMAT).to_string(),
            organizer_email: event.organizer_email.clone().unwrap_or_default(),
            organizer_name: event.organizer_name.clone().unwrap_or_default(),
            description: event.description.clone().unwrap_or_default(),
            link: event.link.clone().unwrap_or_default(),
            participants_limit: event
                .participants_limit
                .map(|limit| limit.to_string())
                .unwrap_or_default(),
        }
    }

    /// Check required fields and convert to the API body.
    pub fn validate(&self) -> Result<EventPayload, FormError> {
        let required = |name: &'static str, value: &str| {
            non_empty(value).ok_or(FormError::MissingField(name))
        };

        let participants_limit = match non_empty(&self.participants_limit) {
            None => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(limit) if limit > 0 => Some(limit),
                _ => return Err(FormError::InvalidParticipantsLimit),
            },
        };

        Ok(EventPayload {
            name: required("name", &self.name)?,
            location: required("location", &self.location)?,
            start_datetime: required("start_datetime", &self.start_datetime)?,
            end_datetime: required("end_datetime", &self.end_datetime)?,
            organizer_email: required("organizer_email", &self.organizer_email)?,
            organizer_name: non_empty(&self.organizer_name),
            description: non_empty(&self.description),
            link: non_empty(&self.link),
            participants_limit,
        })
    }
}

/// Name and email typed on an invitation page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AcceptForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub author_uuid: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InviteeForm {
    #[serde(default)]
    pub name: String,
}
