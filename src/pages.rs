//! Server-side HTML rendering.
//!
//! Pages are assembled from plain strings. Every value that did not come
//! from this file (API data, form input, translations) goes through
//! [`escape_html`].

use crate::i18n::{Language, LanguageStrings, LocaleRegistry};
use crate::models::{
    Comment, Event, EventAdmin, EventForm, FormError, InvitationDetails, SortOrder,
};
use axum::response::Html;
use chrono::{DateTime, FixedOffset};

/// Stylesheet served at `/static/style.css`.
pub const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2933; background: #f5f7fa; }
header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; background: #243b53; color: #fff; }
header a { color: #fff; text-decoration: none; margin-right: 1rem; }
header .tagline { display: block; font-size: 0.85rem; opacity: 0.8; }
main { max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
section { margin-top: 2rem; }
form.stacked label { display: block; margin-top: 0.75rem; font-weight: 600; }
form.stacked input, form.stacked textarea { width: 100%; padding: 0.4rem; box-sizing: border-box; }
form.inline { display: inline; }
button { margin-top: 0.75rem; padding: 0.4rem 1rem; cursor: pointer; }
button.danger { background: #ba2525; color: #fff; border: none; }
.notice { padding: 0.75rem; background: #e3f9e5; border-left: 4px solid #3f9142; }
.error { padding: 0.75rem; background: #ffe3e3; border-left: 4px solid #ba2525; }
.share-link { font-family: monospace; word-break: break-all; }
.comment-content, .description { white-space: pre-wrap; }
.language-switcher a { margin-left: 0.5rem; }
"#;

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }

    result
}

/// Only http(s) URLs from the API are rendered as links or images.
fn is_web_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Replace the locale segment of a localized path.
///
/// `/pl/event/abc` becomes `/en/event/abc`. A path without segments becomes
/// the locale root.
pub fn switch_locale_path(path: &str, code: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return format!("/{}/", code);
    }
    segments[0] = code;
    format!("/{}", segments.join("/"))
}

/// Links to the current page in every other supported language.
pub fn language_alternates(
    registry: &LocaleRegistry,
    current: Language,
    path: &str,
) -> Vec<(Language, String)> {
    registry
        .supported()
        .iter()
        .filter(|language| **language != current)
        .map(|language| (*language, switch_locale_path(path, language.code())))
        .collect()
}

pub fn format_datetime(strings: &LanguageStrings, datetime: &DateTime<FixedOffset>) -> String {
    datetime.format(strings.datetime_format).to_string()
}

/// Wrap a page body in the site layout.
pub fn layout(
    language: Language,
    alternates: &[(Language, String)],
    title: &str,
    body: &str,
) -> Html<String> {
    let strings = language.strings();
    let code = language.code();

    let switcher = if alternates.is_empty() {
        String::new()
    } else {
        let links = alternates
            .iter()
            .map(|(other, href)| {
                format!(
                    r#"<a href="{}" hreflang="{}" lang="{}">{}</a>"#,
                    escape_html(href),
                    other.code(),
                    other.code(),
                    escape_html(other.native_name())
                )
            })
            .collect::<Vec<_>>()
            .join("");
        format!(
            r#"<nav class="language-switcher" aria-label="{}">{}</nav>"#,
            escape_html(strings.switch_language),
            links
        )
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="{code}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {app_title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header>
<div>
<a href="/{code}/"><strong>{app_title}</strong></a>
<a href="/{code}/create-event">{nav_create_event}</a>
<span class="tagline">{app_description}</span>
</div>
{switcher}
</header>
<main>
{body}
</main>
</body>
</html>
"#,
        code = code,
        title = escape_html(title),
        app_title = escape_html(strings.app_title),
        nav_create_event = escape_html(strings.nav_create_event),
        app_description = escape_html(strings.app_description),
        switcher = switcher,
        body = body,
    ))
}

pub fn notice(message: &str) -> String {
    format!(r#"<p class="notice" role="status">{}</p>"#, escape_html(message))
}

pub fn error_box(message: &str) -> String {
    format!(r#"<p class="error" role="alert">{}</p>"#, escape_html(message))
}

/// Localized message for a rejected event form.
pub fn form_error_message(strings: &LanguageStrings, error: FormError) -> String {
    match error {
        FormError::MissingField(field) => {
            let label = match field {
                "name" => strings.event_name_label,
                "location" => strings.location_label,
                "start_datetime" => strings.start_datetime_label,
                "end_datetime" => strings.end_datetime_label,
                "organizer_email" => strings.organizer_email_label,
                other => other,
            };
            LanguageStrings::fill(strings.field_required_error, &[("field", label)])
        }
        FormError::InvalidParticipantsLimit => strings.participants_limit_invalid_error.to_string(),
    }
}

fn post_button(action: &str, label: &str, class: &str, hidden: &[(&str, &str)]) -> String {
    let fields = hidden
        .iter()
        .map(|(name, value)| {
            format!(
                r#"<input type="hidden" name="{}" value="{}">"#,
                name,
                escape_html(value)
            )
        })
        .collect::<String>();
    format!(
        r#"<form class="inline" method="post" action="{}">{}<button type="submit" class="{}">{}</button></form>"#,
        escape_html(action),
        fields,
        class,
        escape_html(label)
    )
}

// ==================== Home ====================

pub fn home_body(language: Language) -> String {
    let strings = language.strings();
    format!(
        r#"<h1>{}</h1>
<p>{}</p>
<p><a href="/{}/create-event">{}</a></p>"#,
        escape_html(strings.home_heading),
        escape_html(strings.home_intro),
        language.code(),
        escape_html(strings.create_button_text)
    )
}

pub fn error_body(strings: &LanguageStrings, message: &str) -> String {
    format!(
        "<h1>{}</h1>\n{}",
        escape_html(strings.error_heading),
        error_box(message)
    )
}

// ==================== Event Form ====================

fn input(label: &str, name: &str, kind: &str, value: &str, required: bool) -> String {
    format!(
        r#"<label for="{name}">{label}{star}</label>
<input id="{name}" type="{kind}" name="{name}" value="{value}"{required}>
"#,
        name = name,
        label = escape_html(label),
        star = if required { "*" } else { "" },
        kind = kind,
        value = escape_html(value),
        required = if required { " required" } else { "" },
    )
}

/// Event fields, shared by the create and edit pages.
pub fn event_form(strings: &LanguageStrings, action: &str, form: &EventForm, submit: &str) -> String {
    let mut html = format!(
        r#"<form class="stacked" method="post" action="{}">
"#,
        escape_html(action)
    );
    html.push_str(&input(strings.event_name_label, "name", "text", &form.name, true));
    html.push_str(&input(strings.location_label, "location", "text", &form.location, true));
    html.push_str(&input(
        strings.start_datetime_label,
        "start_datetime",
        "datetime-local",
        &form.start_datetime,
        true,
    ));
    html.push_str(&input(
        strings.end_datetime_label,
        "end_datetime",
        "datetime-local",
        &form.end_datetime,
        true,
    ));
    html.push_str(&input(
        strings.organizer_email_label,
        "organizer_email",
        "email",
        &form.organizer_email,
        true,
    ));
    html.push_str(&input(
        strings.organizer_name_label,
        "organizer_name",
        "text",
        &form.organizer_name,
        false,
    ));
    html.push_str(&format!(
        r#"<label for="description">{}</label>
<textarea id="description" name="description" rows="5">{}</textarea>
"#,
        escape_html(strings.description_label),
        escape_html(&form.description)
    ));
    html.push_str(&input(strings.external_link_label, "link", "url", &form.link, false));
    html.push_str(&input(
        strings.participants_limit_label,
        "participants_limit",
        "number",
        &form.participants_limit,
        false,
    ));
    html.push_str(&format!(
        r#"<button type="submit">{}</button>
</form>"#,
        escape_html(submit)
    ));
    html
}

pub fn create_event_body(
    language: Language,
    form: &EventForm,
    error: Option<&str>,
) -> String {
    let strings = language.strings();
    let mut html = format!("<h1>{}</h1>\n", escape_html(strings.create_page_title));
    if let Some(error) = error {
        html.push_str(&error_box(error));
    }
    html.push_str(&event_form(
        strings,
        &format!("/{}/create-event", language.code()),
        form,
        strings.create_button_text,
    ));
    html
}

/// Shown after creating an event: both links, absolute so they can be shared.
pub fn event_created_body(strings: &LanguageStrings, access_link: &str, manage_link: &str) -> String {
    format!(
        r#"<h1>{title}</h1>
<p>{message}</p>
<p>{access_label}:<br><a class="share-link" href="{access}">{access}</a></p>
<p>{manage_label}:<br><a class="share-link" href="{manage}">{manage}</a></p>"#,
        title = escape_html(strings.create_event_success_title),
        message = escape_html(strings.create_event_success_message),
        access_label = escape_html(strings.access_link_label),
        access = escape_html(access_link),
        manage_label = escape_html(strings.manage_link_label),
        manage = escape_html(manage_link),
    )
}

// ==================== Event Details ====================

fn event_summary(strings: &LanguageStrings, event: &Event) -> String {
    let mut html = format!(
        r#"<p><strong>{}:</strong> {} &ndash; {}</p>
<p><strong>{}:</strong> {}</p>
<p><strong>{}:</strong> {}</p>
"#,
        escape_html(strings.when_label),
        escape_html(&format_datetime(strings, &event.start_datetime)),
        escape_html(&format_datetime(strings, &event.end_datetime)),
        escape_html(strings.location_label),
        escape_html(&event.location),
        escape_html(strings.organizer_label),
        escape_html(
            event
                .organizer_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(strings.not_available_abbr)
        ),
    );

    if let Some(image) = event.image.as_deref().filter(|url| is_web_url(url)) {
        html.push_str(&format!(
            r#"<p><img src="{}" alt="{}" style="max-width: 100%"></p>
"#,
            escape_html(image),
            escape_html(&event.name)
        ));
    }
    if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
        html.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape_html(description)
        ));
    }
    if let Some(link) = event.link.as_deref().filter(|url| is_web_url(url)) {
        html.push_str(&format!(
            r#"<p><strong>{}:</strong> <a href="{}" rel="noopener noreferrer">{}</a></p>
"#,
            escape_html(strings.external_link_label),
            escape_html(link),
            escape_html(link)
        ));
    }
    html
}

fn participants_section(
    strings: &LanguageStrings,
    event: &Event,
    remove_action: Option<&dyn Fn(i64) -> String>,
) -> String {
    let count = event.participants.len().to_string();
    let mut html = format!(
        "<section>\n<h2>{}</h2>\n",
        escape_html(&LanguageStrings::fill(
            strings.participants_heading,
            &[("count", count.as_str())]
        ))
    );
    if let Some(limit) = event.participants_limit {
        let limit = limit.to_string();
        html.push_str(&format!(
            "<p>{}</p>\n",
            escape_html(&LanguageStrings::fill(
                strings.participants_limit_info,
                &[("count", count.as_str()), ("limit", limit.as_str())]
            ))
        ));
    }

    if event.participants.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", escape_html(strings.no_participants)));
    } else {
        html.push_str("<ul>\n");
        for participant in &event.participants {
            html.push_str("<li>");
            html.push_str(&escape_html(&participant.name));
            if let Some(email) = participant.email.as_deref().filter(|e| !e.is_empty()) {
                html.push_str(&format!(" ({})", escape_html(email)));
            }
            if let Some(action) = remove_action {
                html.push(' ');
                html.push_str(&post_button(
                    &action(participant.id),
                    strings.delete_button,
                    "danger",
                    &[],
                ));
            }
            html.push_str("</li>\n");
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");
    html
}

/// Everything the public event page shows.
pub struct EventPage<'a> {
    pub language: Language,
    pub event: &'a Event,
    pub comments: &'a [Comment],
    pub sort: SortOrder,
    /// Participant or organizer key allowed to comment
    pub author_uuid: Option<&'a str>,
    pub notice: Option<&'a str>,
    pub error: Option<&'a str>,
}

pub fn event_details_body(page: &EventPage<'_>) -> String {
    let strings = page.language.strings();
    let base = format!("/{}/event/{}", page.language.code(), page.event.uuid);

    let mut html = format!("<h1>{}</h1>\n", escape_html(&page.event.name));
    if let Some(message) = page.notice {
        html.push_str(&notice(message));
    }
    if let Some(message) = page.error {
        html.push_str(&error_box(message));
    }
    html.push_str(&event_summary(strings, page.event));
    html.push_str(&format!(
        r#"<p><a href="{}/ics" download="event.ics">{}</a></p>
"#,
        escape_html(&base),
        escape_html(strings.export_ics_button)
    ));

    html.push_str(&participants_section(strings, page.event, None));

    // Comments
    html.push_str(&format!(
        "<section>\n<h2>{}</h2>\n",
        escape_html(strings.comments_heading)
    ));

    let author_query = page
        .author_uuid
        .map(|author| format!("&author_uuid={}", author))
        .unwrap_or_default();
    html.push_str("<p>");
    for (order, label) in [
        (SortOrder::Newest, strings.sort_newest),
        (SortOrder::Oldest, strings.sort_oldest),
    ] {
        if order == page.sort {
            html.push_str(&format!("<strong>{}</strong> ", escape_html(label)));
        } else {
            html.push_str(&format!(
                r#"<a href="{}?sort={}{}">{}</a> "#,
                escape_html(&base),
                order.as_str(),
                escape_html(&author_query),
                escape_html(label)
            ));
        }
    }
    html.push_str("</p>\n");

    if let Some(author) = page.author_uuid {
        html.push_str(&format!(
            r#"<form class="stacked" method="post" action="{action}">
<input type="hidden" name="author_uuid" value="{author}">
<label for="content">{label}</label>
<textarea id="content" name="content" rows="3" required></textarea>
<button type="submit">{submit}</button>
</form>
"#,
            action = escape_html(&format!("{}/comments", base)),
            author = escape_html(author),
            label = escape_html(strings.comment_content_label),
            submit = escape_html(strings.add_comment_button),
        ));
    }

    if page.comments.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", escape_html(strings.no_comments)));
    } else {
        html.push_str("<ul>\n");
        for comment in page.comments {
            html.push_str(&format!(
                r#"<li><strong>{}</strong> <time datetime="{}">{}</time>
<p class="comment-content">{}</p>"#,
                escape_html(&comment.author),
                comment.date.to_rfc3339(),
                escape_html(&format_datetime(strings, &comment.date)),
                escape_html(&comment.content)
            ));
            if let Some(author) = page.author_uuid {
                html.push_str(&post_button(
                    &format!("{}/comments/{}/delete", base, comment.uuid),
                    strings.delete_button,
                    "danger",
                    &[("author_uuid", author)],
                ));
            }
            html.push_str("</li>\n");
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");
    html
}

// ==================== Event Administration ====================

/// Everything the organizer's management page shows.
pub struct AdminPage<'a> {
    pub language: Language,
    pub admin: &'a EventAdmin,
    pub form: &'a EventForm,
    /// Origin used for shareable invitation links
    pub public_base_url: &'a str,
    pub notice: Option<&'a str>,
    pub error: Option<&'a str>,
}

pub fn event_admin_body(page: &AdminPage<'_>) -> String {
    let strings = page.language.strings();
    let code = page.language.code();
    let event = &page.admin.event;
    let base = format!("/{}/event/{}/{}", code, event.uuid, page.admin.edit_uuid);

    let mut html = format!(
        "<h1>{}: {}</h1>\n",
        escape_html(strings.admin_heading),
        escape_html(&event.name)
    );
    if let Some(message) = page.notice {
        html.push_str(&notice(message));
    }
    if let Some(message) = page.error {
        html.push_str(&error_box(message));
    }
    html.push_str(&format!(
        r#"<p><a href="{}">{}</a></p>
"#,
        escape_html(&format!(
            "/{}/event/{}?author_uuid={}",
            code, event.uuid, page.admin.edit_uuid
        )),
        escape_html(strings.view_as_organizer_link)
    ));

    html.push_str(&event_form(strings, &base, page.form, strings.save_changes_button));

    let remove: &dyn Fn(i64) -> String =
        &|id| format!("{}/participants/{}/delete", base, id);
    html.push_str(&participants_section(strings, event, Some(remove)));

    // Generic invitation
    html.push_str(&format!(
        "<section>\n<h2>{}</h2>\n",
        escape_html(strings.generic_invitation_heading)
    ));
    match page.admin.invitations.first() {
        Some(invitation) => {
            let link = format!(
                "{}/{}/invitation/accept/{}",
                page.public_base_url, code, invitation.uuid
            );
            html.push_str(&format!(
                "<p class=\"share-link\">{}</p>\n",
                escape_html(&link)
            ));
            html.push_str(&post_button(
                &format!("{}/invitations/{}/delete", base, invitation.uuid),
                strings.delete_button,
                "danger",
                &[],
            ));
        }
        None => {
            html.push_str(&post_button(
                &format!("{}/invitations", base),
                strings.create_generic_invitation_button,
                "",
                &[],
            ));
        }
    }
    html.push_str("</section>\n");

    // Personalized invitations
    html.push_str(&format!(
        r#"<section>
<h2>{heading}</h2>
<form class="stacked" method="post" action="{action}">
<label for="invitee">{label}</label>
<input id="invitee" type="text" name="name" required>
<button type="submit">{submit}</button>
</form>
"#,
        heading = escape_html(strings.personalized_invitations_heading),
        action = escape_html(&format!("{}/personalized-invitations", base)),
        label = escape_html(strings.invitee_name_label),
        submit = escape_html(strings.create_personalized_invitation_button),
    ));
    if page.admin.personalized_invitations.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", escape_html(strings.no_invitations)));
    } else {
        html.push_str("<ul>\n");
        for invitation in &page.admin.personalized_invitations {
            let link = format!(
                "{}/{}/personalized-invitation/accept/{}",
                page.public_base_url, code, invitation.uuid
            );
            html.push_str(&format!(
                "<li><strong>{}</strong> <span class=\"share-link\">{}</span> ",
                escape_html(&invitation.name),
                escape_html(&link)
            ));
            html.push_str(&post_button(
                &format!("{}/personalized-invitations/{}/delete", base, invitation.uuid),
                strings.delete_button,
                "danger",
                &[],
            ));
            html.push_str("</li>\n");
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");

    html.push_str("<section>\n");
    html.push_str(&post_button(
        &format!("{}/delete", base),
        strings.delete_event_button,
        "danger",
        &[],
    ));
    html.push_str("\n</section>\n");
    html
}

// ==================== Accepting Invitations ====================

/// Join form for both invitation kinds.
///
/// A personalized invitation carries the invitee name, which is shown
/// read-only; a generic one asks for it.
pub fn accept_invitation_body(
    language: Language,
    action: &str,
    details: &InvitationDetails,
    name: &str,
    email: &str,
    error: Option<&str>,
) -> String {
    let strings = language.strings();
    let mut html = format!(
        "<h1>{}</h1>\n",
        escape_html(&LanguageStrings::fill(
            strings.accept_invitation_heading,
            &[("event", details.event_name.as_str())]
        ))
    );

    let personalized = details.name.is_some();
    if let Some(invitee) = details.name.as_deref() {
        html.push_str(&format!(
            "<p>{}</p>\n",
            escape_html(&LanguageStrings::fill(
                strings.personalized_greeting,
                &[("name", invitee)]
            ))
        ));
    }
    if let Some(error) = error {
        html.push_str(&error_box(error));
    }

    html.push_str(&format!(
        r#"<form class="stacked" method="post" action="{action}">
<label for="name">{name_label}</label>
<input id="name" type="text" name="name" value="{name}" required{readonly}>
<label for="email">{email_label}</label>
<input id="email" type="email" name="email" value="{email}" required>
<button type="submit">{submit}</button>
</form>"#,
        action = escape_html(action),
        name_label = escape_html(strings.name_label),
        name = escape_html(name),
        readonly = if personalized { " readonly" } else { "" },
        email_label = escape_html(strings.email_label),
        email = escape_html(email),
        submit = escape_html(strings.accept_button),
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Invitation, Participant, PersonalizedInvitation};

    fn sample_event() -> Event {
        Event {
            uuid: "ev-1".to_string(),
            name: "Board <games> night".to_string(),
            location: "Krakow".to_string(),
            start_datetime: DateTime::parse_from_rfc3339("2025-06-01T18:00:00+02:00")
                .expect("valid date"),
            end_datetime: DateTime::parse_from_rfc3339("2025-06-01T23:00:00+02:00")
                .expect("valid date"),
            description: Some("Bring snacks".to_string()),
            link: Some("javascript:alert(1)".to_string()),
            image: None,
            organizer_name: None,
            organizer_email: None,
            participants_limit: Some(6),
            participants: vec![Participant {
                id: 7,
                uuid: None,
                name: "Jan".to_string(),
                email: Some("jan@example.com".to_string()),
            }],
        }
    }

    fn sample_comment() -> Comment {
        Comment {
            uuid: "c-1".to_string(),
            author: "Ala".to_string(),
            content: "Can't wait & see".to_string(),
            date: DateTime::parse_from_rfc3339("2025-05-30T09:15:00+02:00").expect("valid date"),
        }
    }

    // ==================== Helper Tests ====================

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("zażółć"), "zażółć");
    }

    #[test]
    fn test_switch_locale_path() {
        assert_eq!(switch_locale_path("/pl/event/abc", "en"), "/en/event/abc");
        assert_eq!(switch_locale_path("/en/", "pl"), "/pl");
        assert_eq!(switch_locale_path("/", "pl"), "/pl/");
        assert_eq!(switch_locale_path("", "en"), "/en/");
    }

    #[test]
    fn test_language_alternates_exclude_current() {
        let registry = LocaleRegistry::default();
        let alternates = language_alternates(&registry, Language::POLISH, "/pl/create-event");
        assert_eq!(alternates, vec![(Language::ENGLISH, "/en/create-event".to_string())]);
    }

    #[test]
    fn test_format_datetime_per_language() {
        let date = DateTime::parse_from_rfc3339("2025-06-01T18:05:00+02:00").expect("valid date");
        assert_eq!(format_datetime(Language::ENGLISH.strings(), &date), "2025-06-01 18:05");
        assert_eq!(format_datetime(Language::POLISH.strings(), &date), "01.06.2025, 18:05");
    }

    #[test]
    fn test_form_error_message_uses_label() {
        let message = form_error_message(
            Language::POLISH.strings(),
            FormError::MissingField("location"),
        );
        assert_eq!(message, "Pole \"Miejsce\" jest wymagane.");
    }

    #[test]
    fn test_is_web_url() {
        assert!(is_web_url("https://example.com"));
        assert!(is_web_url("HTTP://example.com"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("/relative"));
    }

    // ==================== Page Tests ====================

    #[test]
    fn test_layout_sets_lang_and_switcher() {
        let alternates = vec![(Language::ENGLISH, "/en/create-event".to_string())];
        let Html(html) = layout(Language::POLISH, &alternates, "Tytuł", "<p>body</p>");

        assert!(html.contains(r#"<html lang="pl">"#));
        assert!(html.contains(r#"href="/en/create-event" hreflang="en""#));
        assert!(html.contains("<title>Tytuł | Prywatny Planer Wydarzeń</title>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"href="/pl/create-event""#));
    }

    #[test]
    fn test_layout_without_alternates_has_no_switcher() {
        let Html(html) = layout(Language::ENGLISH, &[], "Error", "");
        assert!(!html.contains("language-switcher"));
    }

    #[test]
    fn test_event_details_escapes_and_filters_links() {
        let event = sample_event();
        let comments = vec![sample_comment()];
        let html = event_details_body(&EventPage {
            language: Language::ENGLISH,
            event: &event,
            comments: &comments,
            sort: SortOrder::Newest,
            author_uuid: None,
            notice: None,
            error: None,
        });

        assert!(html.contains("Board &lt;games&gt; night"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("Can&#x27;t wait &amp; see"));
        assert!(html.contains("Participants (1)"));
        assert!(html.contains("1 of 6 places taken"));
        assert!(html.contains(r#"href="/en/event/ev-1/ics""#));
        assert!(html.contains("N/A"));
        // No comment form or delete buttons without an author key
        assert!(!html.contains("name=\"content\""));
        assert!(!html.contains("/comments/c-1/delete"));
    }

    #[test]
    fn test_event_details_with_author_shows_comment_controls() {
        let event = sample_event();
        let comments = vec![sample_comment()];
        let html = event_details_body(&EventPage {
            language: Language::POLISH,
            event: &event,
            comments: &comments,
            sort: SortOrder::Oldest,
            author_uuid: Some("part-1"),
            notice: Some(Language::POLISH.strings().joined_notice),
            error: None,
        });

        assert!(html.contains(r#"action="/pl/event/ev-1/comments""#));
        assert!(html.contains(r#"action="/pl/event/ev-1/comments/c-1/delete""#));
        assert!(html.contains(r#"value="part-1""#));
        assert!(html.contains("?sort=newest&amp;author_uuid=part-1"));
        assert!(html.contains("Dołączono do wydarzenia."));
        assert!(html.contains("30.05.2025, 09:15"));
    }

    #[test]
    fn test_event_admin_lists_invitations_with_absolute_links() {
        let event = sample_event();
        let admin = EventAdmin {
            event: event.clone(),
            edit_uuid: "edit-1".to_string(),
            invitations: vec![Invitation {
                uuid: "inv-1".to_string(),
                event: "ev-1".to_string(),
            }],
            personalized_invitations: vec![PersonalizedInvitation {
                uuid: "pinv-1".to_string(),
                event: "ev-1".to_string(),
                name: "Ala".to_string(),
            }],
        };
        let form = EventForm::from_event(&event);
        let html = event_admin_body(&AdminPage {
            language: Language::ENGLISH,
            admin: &admin,
            form: &form,
            public_base_url: "https://events.example.com",
            notice: None,
            error: None,
        });

        assert!(html.contains("https://events.example.com/en/invitation/accept/inv-1"));
        assert!(html.contains("https://events.example.com/en/personalized-invitation/accept/pinv-1"));
        assert!(html.contains(r#"action="/en/event/ev-1/edit-1/participants/7/delete""#));
        assert!(html.contains(r#"action="/en/event/ev-1/edit-1/invitations/inv-1/delete""#));
        assert!(html.contains(r#"action="/en/event/ev-1/edit-1/delete""#));
        assert!(html.contains("/en/event/ev-1?author_uuid=edit-1"));
        assert!(!html.contains("Create invitation link"));
        assert!(html.contains(r#"value="2025-06-01T18:00""#));
    }

    #[test]
    fn test_event_admin_offers_generic_invitation_when_missing() {
        let admin = EventAdmin {
            event: sample_event(),
            edit_uuid: "edit-1".to_string(),
            invitations: vec![],
            personalized_invitations: vec![],
        };
        let form = EventForm::default();
        let html = event_admin_body(&AdminPage {
            language: Language::ENGLISH,
            admin: &admin,
            form: &form,
            public_base_url: "http://localhost:3000",
            notice: None,
            error: None,
        });

        assert!(html.contains(r#"action="/en/event/ev-1/edit-1/invitations""#));
        assert!(html.contains("Create invitation link"));
        assert!(html.contains("No invitations yet."));
    }

    #[test]
    fn test_accept_personalized_invitation_is_readonly_name() {
        let details = InvitationDetails {
            event_name: "Picnic".to_string(),
            event_uuid: "ev-1".to_string(),
            name: Some("Ala".to_string()),
        };
        let html = accept_invitation_body(
            Language::ENGLISH,
            "/en/personalized-invitation/accept/pinv-1",
            &details,
            "Ala",
            "",
            Some("Email is required."),
        );

        assert!(html.contains("You are invited to Picnic"));
        assert!(html.contains("Hello Ala!"));
        assert!(html.contains(r#"value="Ala" required readonly"#));
        assert!(html.contains("Email is required."));
    }

    #[test]
    fn test_accept_generic_invitation_asks_for_name() {
        let details = InvitationDetails {
            event_name: "Picnic".to_string(),
            event_uuid: "ev-1".to_string(),
            name: None,
        };
        let html = accept_invitation_body(
            Language::ENGLISH,
            "/en/invitation/accept/inv-1",
            &details,
            "",
            "",
            None,
        );

        assert!(!html.contains("readonly"));
        assert!(!html.contains("Hello"));
    }

    #[test]
    fn test_create_event_body_shows_error() {
        let html = create_event_body(Language::ENGLISH, &EventForm::default(), Some("Oops <b>"));
        assert!(html.contains(r#"action="/en/create-event""#));
        assert!(html.contains("Oops &lt;b&gt;"));
    }
}
