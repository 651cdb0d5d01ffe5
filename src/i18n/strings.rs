/// All localized user-facing strings for a language
///
/// Strings are stored raw. Page rendering escapes them for HTML, so they
/// must not contain markup.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Layout ====================
    /// Site title shown in the header and the browser tab
    pub app_title: &'static str,

    /// One-line description shown under the title
    pub app_description: &'static str,

    pub nav_home: &'static str,
    pub nav_create_event: &'static str,

    /// Label of the language switcher
    pub switch_language: &'static str,

    // ==================== Home ====================
    pub home_heading: &'static str,
    pub home_intro: &'static str,

    // ==================== Event Form ====================
    pub create_page_title: &'static str,
    pub event_name_label: &'static str,
    pub location_label: &'static str,
    pub start_datetime_label: &'static str,
    pub end_datetime_label: &'static str,
    pub organizer_email_label: &'static str,
    pub organizer_name_label: &'static str,
    pub description_label: &'static str,
    pub external_link_label: &'static str,
    pub participants_limit_label: &'static str,
    pub create_button_text: &'static str,

    /// Shown when a required form field is empty
    /// Placeholders: {field}
    pub field_required_error: &'static str,

    /// Shown when the participants limit is not a positive number
    pub participants_limit_invalid_error: &'static str,

    // ==================== Event Created ====================
    pub create_event_success_title: &'static str,
    pub create_event_success_message: &'static str,
    pub access_link_label: &'static str,
    pub manage_link_label: &'static str,

    // ==================== Event Details ====================
    pub when_label: &'static str,
    pub organizer_label: &'static str,

    /// Placeholders: {count}
    pub participants_heading: &'static str,

    /// Placeholders: {count}, {limit}
    pub participants_limit_info: &'static str,

    pub no_participants: &'static str,
    pub export_ics_button: &'static str,
    pub joined_notice: &'static str,
    pub not_available_abbr: &'static str,

    /// chrono format string for event and comment dates
    pub datetime_format: &'static str,

    // ==================== Comments ====================
    pub comments_heading: &'static str,
    pub no_comments: &'static str,
    pub comment_content_label: &'static str,
    pub add_comment_button: &'static str,
    pub comment_required_error: &'static str,
    pub sort_newest: &'static str,
    pub sort_oldest: &'static str,
    pub delete_button: &'static str,

    // ==================== Event Administration ====================
    pub admin_heading: &'static str,
    pub view_as_organizer_link: &'static str,
    pub save_changes_button: &'static str,
    pub event_updated_notice: &'static str,
    pub delete_event_button: &'static str,
    pub event_deleted_notice: &'static str,
    pub generic_invitation_heading: &'static str,
    pub create_generic_invitation_button: &'static str,
    pub generic_invitation_exists_error: &'static str,
    pub personalized_invitations_heading: &'static str,
    pub invitee_name_label: &'static str,
    pub create_personalized_invitation_button: &'static str,
    pub invitee_name_required_error: &'static str,
    pub no_invitations: &'static str,

    // ==================== Accepting Invitations ====================
    /// Placeholders: {event}
    pub accept_invitation_heading: &'static str,

    /// Placeholders: {name}
    pub personalized_greeting: &'static str,

    pub name_label: &'static str,
    pub email_label: &'static str,
    pub accept_button: &'static str,
    pub name_email_required_error: &'static str,
    pub email_required_error: &'static str,

    // ==================== Errors ====================
    pub error_heading: &'static str,
    pub not_found_error: &'static str,
}

impl LanguageStrings {
    /// Substitute `{key}` placeholders in a template.
    ///
    /// Placeholders without a matching value are left untouched. The
    /// template is scanned once, so substituted values are never expanded.
    pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            result.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                result.push_str(&rest[start..]);
                return result;
            };

            match values.iter().find(|(key, _)| *key == &after[..end]) {
                Some((_, value)) => {
                    result.push_str(value);
                    rest = &after[end + 1..];
                }
                None => {
                    result.push('{');
                    rest = after;
                }
            }
        }

        result.push_str(rest);
        result
    }
}

// ==================== English Strings ====================

/// English language strings (default)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    app_title: "Private Event Planner",
    app_description: "Plan private events, invite guests with a link and chat with participants.",
    nav_home: "Home",
    nav_create_event: "Create event",
    switch_language: "Language",

    home_heading: "Organize your next event",
    home_intro: "Create an event, share the invitation link and see who is coming. No account needed: keep the management link to edit your event later.",

    create_page_title: "Create a new event",
    event_name_label: "Event name",
    location_label: "Location",
    start_datetime_label: "Start",
    end_datetime_label: "End",
    organizer_email_label: "Organizer email",
    organizer_name_label: "Organizer name",
    description_label: "Description",
    external_link_label: "External link",
    participants_limit_label: "Participants limit",
    create_button_text: "Create event",
    field_required_error: "The field \"{field}\" is required.",
    participants_limit_invalid_error: "The participants limit must be a positive whole number.",

    create_event_success_title: "Your event is ready!",
    create_event_success_message: "Save both links below. The management link lets you edit the event and invite people, so do not share it.",
    access_link_label: "Link for guests",
    manage_link_label: "Management link",

    when_label: "When",
    organizer_label: "Organizer",
    participants_heading: "Participants ({count})",
    participants_limit_info: "{count} of {limit} places taken",
    no_participants: "No participants have joined yet.",
    export_ics_button: "Add to calendar (.ics)",
    joined_notice: "You have joined this event.",
    not_available_abbr: "N/A",
    datetime_format: "%Y-%m-%d %H:%M",

    comments_heading: "Comments",
    no_comments: "No comments yet.",
    comment_content_label: "Your comment",
    add_comment_button: "Add comment",
    comment_required_error: "A comment cannot be empty.",
    sort_newest: "Newest first",
    sort_oldest: "Oldest first",
    delete_button: "Delete",

    admin_heading: "Manage event",
    view_as_organizer_link: "Open the event page as organizer",
    save_changes_button: "Save changes",
    event_updated_notice: "The event has been updated.",
    delete_event_button: "Delete event",
    event_deleted_notice: "The event has been deleted.",
    generic_invitation_heading: "Invitation link",
    create_generic_invitation_button: "Create invitation link",
    generic_invitation_exists_error: "This event already has an invitation link.",
    personalized_invitations_heading: "Personalized invitations",
    invitee_name_label: "Invitee name",
    create_personalized_invitation_button: "Create personalized invitation",
    invitee_name_required_error: "Enter the name of the person you are inviting.",
    no_invitations: "No invitations yet.",

    accept_invitation_heading: "You are invited to {event}",
    personalized_greeting: "Hello {name}! Confirm your email address to join.",
    name_label: "Your name",
    email_label: "Your email",
    accept_button: "Join event",
    name_email_required_error: "Name and email are required.",
    email_required_error: "Email is required.",

    error_heading: "Something went wrong",
    not_found_error: "The page you are looking for does not exist.",
};

// ==================== Polish Strings ====================

/// Polish language strings
pub const POLISH_STRINGS: LanguageStrings = LanguageStrings {
    app_title: "Prywatny Planer Wydarzeń",
    app_description: "Planuj prywatne wydarzenia, zapraszaj gości linkiem i rozmawiaj z uczestnikami.",
    nav_home: "Strona główna",
    nav_create_event: "Utwórz wydarzenie",
    switch_language: "Język",

    home_heading: "Zorganizuj swoje następne wydarzenie",
    home_intro: "Utwórz wydarzenie, udostępnij link z zaproszeniem i zobacz, kto przyjdzie. Bez zakładania konta: zachowaj link do zarządzania, aby później edytować wydarzenie.",

    create_page_title: "Utwórz nowe wydarzenie",
    event_name_label: "Nazwa wydarzenia",
    location_label: "Miejsce",
    start_datetime_label: "Początek",
    end_datetime_label: "Koniec",
    organizer_email_label: "Email organizatora",
    organizer_name_label: "Imię organizatora",
    description_label: "Opis",
    external_link_label: "Link zewnętrzny",
    participants_limit_label: "Limit uczestników",
    create_button_text: "Utwórz wydarzenie",
    field_required_error: "Pole \"{field}\" jest wymagane.",
    participants_limit_invalid_error: "Limit uczestników musi być dodatnią liczbą całkowitą.",

    create_event_success_title: "Twoje wydarzenie jest gotowe!",
    create_event_success_message: "Zapisz oba poniższe linki. Link do zarządzania pozwala edytować wydarzenie i zapraszać osoby, więc go nie udostępniaj.",
    access_link_label: "Link dla gości",
    manage_link_label: "Link do zarządzania",

    when_label: "Kiedy",
    organizer_label: "Organizator",
    participants_heading: "Uczestnicy ({count})",
    participants_limit_info: "Zajęte miejsca: {count} z {limit}",
    no_participants: "Nikt jeszcze nie dołączył.",
    export_ics_button: "Dodaj do kalendarza (.ics)",
    joined_notice: "Dołączono do wydarzenia.",
    not_available_abbr: "b.d.",
    datetime_format: "%d.%m.%Y, %H:%M",

    comments_heading: "Komentarze",
    no_comments: "Brak komentarzy.",
    comment_content_label: "Twój komentarz",
    add_comment_button: "Dodaj komentarz",
    comment_required_error: "Komentarz nie może być pusty.",
    sort_newest: "Od najnowszych",
    sort_oldest: "Od najstarszych",
    delete_button: "Usuń",

    admin_heading: "Zarządzaj wydarzeniem",
    view_as_organizer_link: "Otwórz stronę wydarzenia jako organizator",
    save_changes_button: "Zapisz zmiany",
    event_updated_notice: "Wydarzenie zostało zaktualizowane.",
    delete_event_button: "Usuń wydarzenie",
    event_deleted_notice: "Wydarzenie zostało usunięte.",
    generic_invitation_heading: "Link z zaproszeniem",
    create_generic_invitation_button: "Utwórz link z zaproszeniem",
    generic_invitation_exists_error: "To wydarzenie ma już link z zaproszeniem.",
    personalized_invitations_heading: "Zaproszenia imienne",
    invitee_name_label: "Imię zapraszanej osoby",
    create_personalized_invitation_button: "Utwórz zaproszenie imienne",
    invitee_name_required_error: "Podaj imię osoby, którą zapraszasz.",
    no_invitations: "Brak zaproszeń.",

    accept_invitation_heading: "Zaproszenie na wydarzenie {event}",
    personalized_greeting: "Cześć {name}! Potwierdź swój adres email, aby dołączyć.",
    name_label: "Twoje imię",
    email_label: "Twój email",
    accept_button: "Dołącz do wydarzenia",
    name_email_required_error: "Imię i email są wymagane.",
    email_required_error: "Email jest wymagany.",

    error_heading: "Coś poszło nie tak",
    not_found_error: "Strona, której szukasz, nie istnieje.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_placeholders() {
        let text = LanguageStrings::fill(
            ENGLISH_STRINGS.participants_limit_info,
            &[("count", "3"), ("limit", "10")],
        );
        assert_eq!(text, "3 of 10 places taken");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        let text = LanguageStrings::fill("Hello {name}, {missing}", &[("name", "Ala")]);
        assert_eq!(text, "Hello Ala, {missing}");
    }

    #[test]
    fn test_fill_does_not_expand_substituted_values() {
        let text = LanguageStrings::fill("{a} and {b}", &[("a", "{b}"), ("b", "Ola")]);
        assert_eq!(text, "{b} and Ola");
    }

    #[test]
    fn test_fill_unclosed_brace() {
        let text = LanguageStrings::fill("{name} says {oops", &[("name", "Jan")]);
        assert_eq!(text, "Jan says {oops");
    }

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let text = LanguageStrings::fill("{x}-{x}", &[("x", "1")]);
        assert_eq!(text, "1-1");
    }

    #[test]
    fn test_placeholder_templates_agree_across_languages() {
        let pairs = [
            (ENGLISH_STRINGS.participants_heading, POLISH_STRINGS.participants_heading),
            (ENGLISH_STRINGS.participants_limit_info, POLISH_STRINGS.participants_limit_info),
            (ENGLISH_STRINGS.accept_invitation_heading, POLISH_STRINGS.accept_invitation_heading),
            (ENGLISH_STRINGS.personalized_greeting, POLISH_STRINGS.personalized_greeting),
            (ENGLISH_STRINGS.field_required_error, POLISH_STRINGS.field_required_error),
        ];

        for (en, pl) in pairs {
            for key in ["{count}", "{limit}", "{event}", "{name}", "{field}"] {
                assert_eq!(
                    en.contains(key),
                    pl.contains(key),
                    "placeholder {} differs between '{}' and '{}'",
                    key,
                    en,
                    pl
                );
            }
        }
    }

    #[test]
    fn test_strings_contain_no_markup() {
        for strings in [&ENGLISH_STRINGS, &POLISH_STRINGS] {
            assert!(!strings.home_intro.contains('<'));
            assert!(!strings.create_event_success_message.contains('<'));
        }
    }
}
