//! Page handlers.
//!
//! Every handler takes the locale segment as its first path parameter, calls
//! the event API and renders a page through [`crate::pages`]. Form posts
//! redirect (303) on success and re-render the form with an inline error on
//! failure.

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::i18n::{Language, LanguageStrings};
use crate::models::{
    sort_comments, AcceptForm, AcceptedInvitation, CommentForm, EventForm, InvitationDetails,
    InviteeForm, SortOrder,
};
use crate::pages::{
    self, accept_invitation_body, create_event_body, error_body, event_admin_body,
    event_created_body, event_details_body, form_error_message, home_body, language_alternates,
    layout, AdminPage, EventPage, STYLESHEET,
};
use crate::server::SharedState;
use axum::{
    extract::{Form, Path, Query, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        StatusCode, Uri,
    },
    response::{Html, IntoResponse, Redirect, Response},
};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{info, warn};

static ID_REGEX: OnceLock<Regex> = OnceLock::new();

/// Identifiers in paths are UUIDs or numbers; nothing else reaches the API.
fn is_valid_id(id: &str) -> bool {
    let regex =
        ID_REGEX.get_or_init(|| Regex::new(r"^[0-9A-Za-z-]{1,64}$").expect("valid regex"));
    regex.is_match(id)
}

/// Status shown for a failed API call: client errors are mirrored, the rest
/// become 502.
pub fn api_error_status(error: &ApiError) -> StatusCode {
    match error.status() {
        Some(status) if status.is_client_error() => status,
        _ => StatusCode::BAD_GATEWAY,
    }
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Page not found")]
    NotFound(Language),

    #[error("{source}")]
    Api {
        language: Language,
        #[source]
        source: ApiError,
    },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound(language) => not_found_page(language).into_response(),
            PageError::Api { language, source } => {
                let status = api_error_status(&source);
                warn!("Event API call failed ({}): {}", status, source);
                let strings = language.strings();
                let body = error_body(strings, &source.to_string());
                (status, layout(language, &[], strings.error_heading, &body)).into_response()
            }
        }
    }
}

fn not_found_page(language: Language) -> (StatusCode, Html<String>) {
    let strings = language.strings();
    let body = error_body(strings, strings.not_found_error);
    (
        StatusCode::NOT_FOUND,
        layout(language, &[], strings.error_heading, &body),
    )
}

/// Language and language-switcher links of the page being rendered.
struct PageContext {
    language: Language,
    alternates: Vec<(Language, String)>,
}

impl PageContext {
    /// Resolve the locale segment; an unsupported one is a 404.
    fn new(state: &SharedState, code: &str, path: &str) -> Result<Self, PageError> {
        let registry = &state.config.locales;
        let language = registry
            .get(code)
            .ok_or(PageError::NotFound(registry.default_language()))?;
        Ok(Self {
            language,
            alternates: language_alternates(registry, language, path),
        })
    }

    fn strings(&self) -> &'static LanguageStrings {
        self.language.strings()
    }

    fn code(&self) -> &'static str {
        self.language.code()
    }

    fn render(&self, title: &str, body: &str) -> Html<String> {
        layout(self.language, &self.alternates, title, body)
    }

    fn check_id(&self, id: &str) -> Result<(), PageError> {
        if is_valid_id(id) {
            Ok(())
        } else {
            Err(PageError::NotFound(self.language))
        }
    }

    fn fail(&self, source: ApiError) -> PageError {
        PageError::Api {
            language: self.language,
            source,
        }
    }
}

// ==================== Static ====================

pub async fn health() -> &'static str {
    "ok"
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

pub async fn not_found(State(state): State<SharedState>, uri: Uri) -> impl IntoResponse {
    let registry = &state.config.locales;
    let first = uri.path().trim_start_matches('/').split('/').next().unwrap_or("");
    let language = registry
        .get(first)
        .unwrap_or_else(|| registry.default_language());
    not_found_page(language)
}

// ==================== Home ====================

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    deleted: Option<String>,
}

pub async fn home(
    State(state): State<SharedState>,
    Path(locale): Path<String>,
    Query(query): Query<HomeQuery>,
    uri: Uri,
) -> Result<Html<String>, PageError> {
    let ctx = PageContext::new(&state, &locale, uri.path())?;
    let strings = ctx.strings();

    let mut body = String::new();
    if query.deleted.as_deref() == Some("1") {
        body.push_str(&pages::notice(strings.event_deleted_notice));
        body.push('\n');
    }
    body.push_str(&home_body(ctx.language));
    Ok(ctx.render(strings.home_heading, &body))
}

// ==================== Create Event ====================

pub async fn create_event_page(
    State(state): State<SharedState>,
    Path(locale): Path<String>,
    uri: Uri,
) -> Result<Html<String>, PageError> {
    let ctx = PageContext::new(&state, &locale, uri.path())?;
    let body = create_event_body(ctx.language, &EventForm::default(), None);
    Ok(ctx.render(ctx.strings().create_page_title, &body))
}

pub async fn create_event(
    State(state): State<SharedState>,
    Path(locale): Path<String>,
    uri: Uri,
    Form(form): Form<EventForm>,
) -> Result<Response, PageError> {
    let ctx = PageContext::new(&state, &locale, uri.path())?;
    let strings = ctx.strings();

    let (status, error) = match form.validate() {
        Err(e) => (StatusCode::UNPROCESSABLE_ENTITY, form_error_message(strings, e)),
        Ok(payload) => match state.api.create_event(&payload).await {
            Ok(created) => {
                info!("Created event {}", created.uuid);
                let base = format!("{}/{}/event", state.config.public_base_url, ctx.code());
                let access_link = format!("{}/{}", base, created.uuid);
                let manage_link = format!("{}/{}/{}", base, created.uuid, created.edit_uuid);
                let body = event_created_body(strings, &access_link, &manage_link);
                return Ok(ctx
                    .render(strings.create_event_success_title, &body)
                    .into_response());
            }
            Err(e) => (api_error_status(&e), e.to_string()),
        },
    };

    let body = create_event_body(ctx.language, &form, Some(&error));
    Ok((status, ctx.render(strings.create_page_title, &body)).into_response())
}

// ==================== Event Details ====================

#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    sort: Option<String>,
    author_uuid: Option<String>,
    joined: Option<String>,
}

/// What to show on top of the event details.
#[derive(Default)]
struct EventView<'a> {
    sort: SortOrder,
    author_uuid: Option<&'a str>,
    notice: Option<&'a str>,
    error: Option<&'a str>,
}

async fn render_event(
    state: &SharedState,
    ctx: &PageContext,
    uuid: &str,
    view: EventView<'_>,
    status: StatusCode,
) -> Result<Response, PageError> {
    let (event, mut comments) =
        futures::try_join!(state.api.get_event(uuid), state.api.get_comments(uuid))
            .map_err(|e| ctx.fail(e))?;
    sort_comments(&mut comments, view.sort);

    let body = event_details_body(&EventPage {
        language: ctx.language,
        event: &event,
        comments: &comments,
        sort: view.sort,
        author_uuid: view.author_uuid,
        notice: view.notice,
        error: view.error,
    });
    Ok((status, ctx.render(&event.name, &body)).into_response())
}

fn event_path(code: &str, uuid: &str) -> String {
    format!("/{}/event/{}", code, uuid)
}

pub async fn event_details(
    State(state): State<SharedState>,
    Path((locale, uuid)): Path<(String, String)>,
    Query(query): Query<EventQuery>,
    uri: Uri,
) -> Result<Response, PageError> {
    let ctx = PageContext::new(&state, &locale, uri.path())?;
    ctx.check_id(&uuid)?;

    let author_uuid = query.author_uuid.as_deref().filter(|id| is_valid_id(id));
    let notice = query
        .joined
        .as_deref()
        .filter(|joined| *joined == "1")
        .map(|_| ctx.strings().joined_notice);

    let view = EventView {
        sort: SortOrder::parse(query.sort.as_deref()),
        author_uuid,
        notice,
        error: None,
    };
    render_event(&state, &ctx, &uuid, view, StatusCode::OK).await
}

pub async fn event_ics(
    State(state): State<SharedState>,
    Path((locale, uuid)): Path<(String, String)>,
    uri: Uri,
) -> Result<Response, PageError> {
    let ctx = PageContext::new(&state, &locale, uri.path())?;
    ctx.check_id(&uuid)?;

    let calendar = state.api.get_event_ics(&uuid).await.map_err(|e| ctx.fail(e))?;
    Ok((
        [
            (CONTENT_TYPE, "text/calendar; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=\"event.ics\""),
        ],
        calendar,
    )
        .into_response())
}

// ==================== Comments ====================

pub async fn add_comment(
    State(state): State<SharedState>,
    Path((locale, uuid)): Path<(String, String)>,
    Form(form): Form<CommentForm>,
) -> Result<Response, PageError> {
    let ctx = PageContext::new(&state, &locale, &event_path(&locale, &uuid))?;
    ctx.check_id(&uuid)?;
    ctx.check_id(&form.author_uuid)?;

    let content = form.content.trim();
    let (status, error) = if content.is_empty() {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            ctx.strings().comment_required_error.to_string(),
        )
    } else {
        match state
            .api
            .create_comment(&uuid, &form.author_uuid, content)
            .await
        {
            Ok(()) => {
                return Ok(Redirect::to(&format!(
                    "{}?author_uuid={}",
                    event_path(ctx.code(), &uuid),
                    form.author_uuid
                ))
                .into_response())
            }
            Err(e) => (api_error_status(&e), e.to_string()),
        }
    };

    let view = EventView {
        author_uuid: Some(&form.author_uuid),
        error: Some(&error),
        ..Default::default()
    };
    render_event(&state, &ctx, &uuid, view, status).await
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    author_uuid: String,
}

pub async fn delete_comment(
    State(state): State<SharedState>,
    Path((locale, uuid, comment_uuid)): Path<(String, String, String)>,
    Form(form): Form<AuthorForm>,
) -> Result<Response, PageError> {
    let ctx = PageContext::new(&state, &locale, &event_path(&locale, &uuid))?;
    ctx.check_id(&uuid)?;
    ctx.check_id(&comment_uuid)?;
    ctx.check_id(&form.author_uuid)?;

    match state.api.delete_comment(&comment_uuid, &form.author_uuid).await {
        Ok(()) => Ok(Redirect::to(&format!(
            "{}?author_uuid={}",
            event_path(ctx.code(), &uuid),
            form.author_uuid
        ))
        .into_response()),
        Err(e) => {
            let error = e.to_string();
            let view = EventView {
                author_uuid: Some(&form.author_uuid),
                error: Some(&error),
                ..Default::default()
            };
            render_event(&state, &ctx, &uuid, view, api_error_status(&e)).await
        }
    }
}

// ==================== Event Administration ====================

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    updated: Option<String>,
}

fn admin_path(code: &str, uuid: &str, edit_uuid: &str) -> String {
    format!("/{}/event/{}/{}", code, uuid, edit_uuid)
}

/// Admin page state besides the event itself.
#[derive(Default)]
struct AdminView<'a> {
    /// Form values to show instead of the stored event
    form: Option<&'a EventForm>,
    notice: Option<&'a str>,
    error: Option<&'a str>,
}

async fn render_admin(
    state: &SharedState,
    ctx: &PageContext,
    uuid: &str,
    edit_uuid: &str,
    view: AdminView<'_>,
    status: StatusCode,
) -> Result<Response, PageError> {
    let admin = state
        .api
        .get_event_admin(uuid, edit_uuid)
        .await
        .map_err(|e| ctx.fail(e))?;

    let stored;
    let form = match view.form {
        Some(form) => form,
        None => {
            stored = EventForm::from_event(&admin.event);
            &stored
        }
    };

    let body = event_admin_body(&AdminPage {
        language: ctx.language,
        admin: &admin,
        form,
        public_base_url: &state.config.public_base_url,
        notice: view.notice,
        error: view.error,
    });
    Ok((status, ctx.render(ctx.strings().admin_heading, &body)).into_response())
}

/// Redirect back to the admin page after a successful change.
fn back_to_admin(ctx: &PageContext, uuid: &str, edit_uuid: &str) -> Response {
    Redirect::to(&admin_path(ctx.code(), uuid, edit_uuid)).into_response()
}

/// Re-render the admin page with the error of a failed API call.
async fn admin_failure(
    state: &SharedState,
    ctx: &PageContext,
    uuid: &str,
    edit_uuid: &str,
    error: ApiError,
) -> Result<Response, PageError> {
    let message = error.to_string();
    let view = AdminView {
        error: Some(&message),
        ..Default::default()
    };
    render_admin(state, ctx, uuid, edit_uuid, view, api_error_status(&error)).await
}

/// Build the context of an admin action and validate both keys.
fn admin_context(
    state: &SharedState,
    locale: &str,
    uuid: &str,
    edit_uuid: &str,
) -> Result<PageContext, PageError> {
    let ctx = PageContext::new(state, locale, &admin_path(locale, uuid, edit_uuid))?;
    ctx.check_id(uuid)?;
    ctx.check_id(edit_uuid)?;
    Ok(ctx)
}

pub async fn event_admin(
    State(state): State<SharedState>,
    Path((locale, uuid, edit_uuid)): Path<(String, String, String)>,
    Query(query): Query<AdminQuery>,
) -> Result<Response, PageError> {
    let ctx = admin_context(&state, &locale, &uuid, &edit_uuid)?;
    let notice = query
        .updated
        .as_deref()
        .filter(|updated| *updated == "1")
        .map(|_| ctx.strings().event_updated_notice);

    let view = AdminView {
        notice,
        ..Default::default()
    };
    render_admin(&state, &ctx, &uuid, &edit_uuid, view, StatusCode::OK).await
}

pub async fn update_event(
    State(state): State<SharedState>,
    Path((locale, uuid, edit_uuid)): Path<(String, String, String)>,
    Form(form): Form<EventForm>,
) -> Result<Response, PageError> {
    let ctx = admin_context(&state, &locale, &uuid, &edit_uuid)?;

    let (status, error) = match form.validate() {
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            form_error_message(ctx.strings(), e),
        ),
        Ok(payload) => match state.api.update_event(&uuid, &edit_uuid, &payload).await {
            Ok(()) => {
                info!("Updated event {}", uuid);
                return Ok(Redirect::to(&format!(
                    "{}?updated=1",
                    admin_path(ctx.code(), &uuid, &edit_uuid)
                ))
                .into_response());
            }
            Err(e) => (api_error_status(&e), e.to_string()),
        },
    };

    let view = AdminView {
        form: Some(&form),
        error: Some(&error),
        ..Default::default()
    };
    render_admin(&state, &ctx, &uuid, &edit_uuid, view, status).await
}

pub async fn delete_event(
    State(state): State<SharedState>,
    Path((locale, uuid, edit_uuid)): Path<(String, String, String)>,
) -> Result<Response, PageError> {
    let ctx = admin_context(&state, &locale, &uuid, &edit_uuid)?;

    match state.api.delete_event(&uuid, &edit_uuid).await {
        Ok(()) => {
            info!("Deleted event {}", uuid);
            Ok(Redirect::to(&format!("/{}/?deleted=1", ctx.code())).into_response())
        }
        Err(e) => admin_failure(&state, &ctx, &uuid, &edit_uuid, e).await,
    }
}

pub async fn remove_participant(
    State(state): State<SharedState>,
    Path((locale, uuid, edit_uuid, participant_id)): Path<(String, String, String, i64)>,
) -> Result<Response, PageError> {
    let ctx = admin_context(&state, &locale, &uuid, &edit_uuid)?;

    match state.api.remove_participant(participant_id, &edit_uuid).await {
        Ok(()) => Ok(back_to_admin(&ctx, &uuid, &edit_uuid)),
        Err(e) => admin_failure(&state, &ctx, &uuid, &edit_uuid, e).await,
    }
}

pub async fn create_invitation(
    State(state): State<SharedState>,
    Path((locale, uuid, edit_uuid)): Path<(String, String, String)>,
) -> Result<Response, PageError> {
    let ctx = admin_context(&state, &locale, &uuid, &edit_uuid)?;

    let admin = state
        .api
        .get_event_admin(&uuid, &edit_uuid)
        .await
        .map_err(|e| ctx.fail(e))?;
    if !admin.invitations.is_empty() {
        let view = AdminView {
            error: Some(ctx.strings().generic_invitation_exists_error),
            ..Default::default()
        };
        return render_admin(&state, &ctx, &uuid, &edit_uuid, view, StatusCode::CONFLICT).await;
    }

    match state.api.create_invitation(&uuid, &edit_uuid).await {
        Ok(invitation) => {
            info!("Created invitation {} for event {}", invitation.uuid, uuid);
            Ok(back_to_admin(&ctx, &uuid, &edit_uuid))
        }
        Err(e) => admin_failure(&state, &ctx, &uuid, &edit_uuid, e).await,
    }
}

pub async fn delete_invitation(
    State(state): State<SharedState>,
    Path((locale, uuid, edit_uuid, invitation_uuid)): Path<(String, String, String, String)>,
) -> Result<Response, PageError> {
    let ctx = admin_context(&state, &locale, &uuid, &edit_uuid)?;
    ctx.check_id(&invitation_uuid)?;

    match state.api.delete_invitation(&invitation_uuid, &edit_uuid).await {
        Ok(()) => Ok(back_to_admin(&ctx, &uuid, &edit_uuid)),
        Err(e) => admin_failure(&state, &ctx, &uuid, &edit_uuid, e).await,
    }
}

pub async fn create_personalized_invitation(
    State(state): State<SharedState>,
    Path((locale, uuid, edit_uuid)): Path<(String, String, String)>,
    Form(form): Form<InviteeForm>,
) -> Result<Response, PageError> {
    let ctx = admin_context(&state, &locale, &uuid, &edit_uuid)?;

    let name = form.name.trim();
    if name.is_empty() {
        let view = AdminView {
            error: Some(ctx.strings().invitee_name_required_error),
            ..Default::default()
        };
        return render_admin(
            &state,
            &ctx,
            &uuid,
            &edit_uuid,
            view,
            StatusCode::UNPROCESSABLE_ENTITY,
        )
        .await;
    }

    match state
        .api
        .create_personalized_invitation(&uuid, &edit_uuid, name)
        .await
    {
        Ok(invitation) => {
            info!(
                "Created personalized invitation {} for event {}",
                invitation.uuid, uuid
            );
            Ok(back_to_admin(&ctx, &uuid, &edit_uuid))
        }
        Err(e) => admin_failure(&state, &ctx, &uuid, &edit_uuid, e).await,
    }
}

pub async fn delete_personalized_invitation(
    State(state): State<SharedState>,
    Path((locale, uuid, edit_uuid, invitation_uuid)): Path<(String, String, String, String)>,
) -> Result<Response, PageError> {
    let ctx = admin_context(&state, &locale, &uuid, &edit_uuid)?;
    ctx.check_id(&invitation_uuid)?;

    match state
        .api
        .delete_personalized_invitation(&invitation_uuid, &edit_uuid)
        .await
    {
        Ok(()) => Ok(back_to_admin(&ctx, &uuid, &edit_uuid)),
        Err(e) => admin_failure(&state, &ctx, &uuid, &edit_uuid, e).await,
    }
}

// ==================== Accepting Invitations ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationKind {
    /// One link shared with anyone
    Generic,

    /// Link bound to a single invitee name
    Personalized,
}

impl InvitationKind {
    /// Path segment of the accept page, before `/accept/{uuid}`.
    pub fn segment(self) -> &'static str {
        match self {
            InvitationKind::Generic => "invitation",
            InvitationKind::Personalized => "personalized-invitation",
        }
    }

    async fn details(self, api: &ApiClient, uuid: &str) -> ApiResult<InvitationDetails> {
        match self {
            InvitationKind::Generic => api.get_invitation(uuid).await,
            InvitationKind::Personalized => api.get_personalized_invitation(uuid).await,
        }
    }

    async fn accept(
        self,
        api: &ApiClient,
        uuid: &str,
        name: &str,
        email: &str,
    ) -> ApiResult<AcceptedInvitation> {
        match self {
            InvitationKind::Generic => api.accept_invitation(uuid, name, email).await,
            InvitationKind::Personalized => {
                api.accept_personalized_invitation(uuid, name, email).await
            }
        }
    }
}

fn accept_path(code: &str, kind: InvitationKind, uuid: &str) -> String {
    format!("/{}/{}/accept/{}", code, kind.segment(), uuid)
}

async fn render_accept(
    state: &SharedState,
    ctx: &PageContext,
    kind: InvitationKind,
    uuid: &str,
    form: &AcceptForm,
    error: Option<&str>,
    status: StatusCode,
) -> Result<Response, PageError> {
    let details = kind
        .details(&state.api, uuid)
        .await
        .map_err(|e| ctx.fail(e))?;
    let title = LanguageStrings::fill(
        ctx.strings().accept_invitation_heading,
        &[("event", details.event_name.as_str())],
    );
    // A personalized invitation is bound to its invitee name
    let name = match (kind, details.name.as_deref()) {
        (InvitationKind::Personalized, Some(bound)) => bound,
        _ => form.name.as_str(),
    };
    let body = accept_invitation_body(
        ctx.language,
        &accept_path(ctx.code(), kind, uuid),
        &details,
        name,
        &form.email,
        error,
    );
    Ok((status, ctx.render(&title, &body)).into_response())
}

async fn show_invitation(
    state: SharedState,
    kind: InvitationKind,
    locale: String,
    uuid: String,
) -> Result<Response, PageError> {
    let ctx = PageContext::new(&state, &locale, &accept_path(&locale, kind, &uuid))?;
    ctx.check_id(&uuid)?;
    render_accept(
        &state,
        &ctx,
        kind,
        &uuid,
        &AcceptForm::default(),
        None,
        StatusCode::OK,
    )
    .await
}

async fn submit_invitation(
    state: SharedState,
    kind: InvitationKind,
    locale: String,
    uuid: String,
    form: AcceptForm,
) -> Result<Response, PageError> {
    let ctx = PageContext::new(&state, &locale, &accept_path(&locale, kind, &uuid))?;
    ctx.check_id(&uuid)?;
    let strings = ctx.strings();

    let email = form.email.trim();
    let missing = match kind {
        InvitationKind::Generic if form.name.trim().is_empty() || email.is_empty() => {
            Some(strings.name_email_required_error)
        }
        InvitationKind::Personalized if email.is_empty() => Some(strings.email_required_error),
        _ => None,
    };
    if let Some(error) = missing {
        return render_accept(
            &state,
            &ctx,
            kind,
            &uuid,
            &form,
            Some(error),
            StatusCode::UNPROCESSABLE_ENTITY,
        )
        .await;
    }

    let name = match kind {
        InvitationKind::Generic => form.name.trim().to_string(),
        InvitationKind::Personalized => kind
            .details(&state.api, &uuid)
            .await
            .map_err(|e| ctx.fail(e))?
            .name
            .unwrap_or_default(),
    };

    match kind.accept(&state.api, &uuid, &name, email).await {
        Ok(accepted) => {
            info!("Invitation {} accepted by participant {}", uuid, accepted.uuid);
            let location = match accepted.event.as_deref().filter(|id| is_valid_id(id)) {
                Some(event) if is_valid_id(&accepted.uuid) => format!(
                    "{}?author_uuid={}&joined=1",
                    event_path(ctx.code(), event),
                    accepted.uuid
                ),
                Some(event) => format!("{}?joined=1", event_path(ctx.code(), event)),
                None => format!("/{}/", ctx.code()),
            };
            Ok(Redirect::to(&location).into_response())
        }
        Err(e) => {
            let error = e.to_string();
            render_accept(&state, &ctx, kind, &uuid, &form, Some(&error), api_error_status(&e))
                .await
        }
    }
}

pub async fn accept_invitation_page(
    State(state): State<SharedState>,
    Path((locale, uuid)): Path<(String, String)>,
) -> Result<Response, PageError> {
    show_invitation(state, InvitationKind::Generic, locale, uuid).await
}

pub async fn accept_invitation(
    State(state): State<SharedState>,
    Path((locale, uuid)): Path<(String, String)>,
    Form(form): Form<AcceptForm>,
) -> Result<Response, PageError> {
    submit_invitation(state, InvitationKind::Generic, locale, uuid, form).await
}

pub async fn accept_personalized_invitation_page(
    State(state): State<SharedState>,
    Path((locale, uuid)): Path<(String, String)>,
) -> Result<Response, PageError> {
    show_invitation(state, InvitationKind::Personalized, locale, uuid).await
}

pub async fn accept_personalized_invitation(
    State(state): State<SharedState>,
    Path((locale, uuid)): Path<(String, String)>,
    Form(form): Form<AcceptForm>,
) -> Result<Response, PageError> {
    submit_invitation(state, InvitationKind::Personalized, locale, uuid, form).await
}
