use maud::{html, Markup};

/// Visual style of a flash notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    pub fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Danger => "alert-danger",
        }
    }
}

/// A dismissible notification for `.flash-messages`.
///
/// The `id` lets the close control and the dismissal timers find it again.
pub fn flash_alert(id: &str, kind: AlertKind, message: &str) -> Markup {
    html! {
        div id=(id) class={ "alert " (kind.class()) " fade-in" } role="alert" {
            div.alert-content { (message) }
            button.alert-close type="button" aria-label="Close" { "\u{00D7}" }
        }
    }
}

/// Submit button content while a request is in flight.
pub fn busy_label() -> Markup {
    html! {
        span.spinner {}
        " Saving..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_alert_markup() {
        let html = flash_alert("flash-1", AlertKind::Success, "Attendance saved successfully!")
            .into_string();
        assert!(html.starts_with(r#"<div id="flash-1" class="alert alert-success fade-in""#));
        assert!(html.contains(r#"<div class="alert-content">Attendance saved successfully!</div>"#));
        assert!(html.contains(r#"class="alert-close""#));
    }

    #[test]
    fn test_message_is_escaped() {
        let html = flash_alert("flash-2", AlertKind::Danger, "<b>oops</b>").into_string();
        assert!(html.contains("&lt;b&gt;oops&lt;/b&gt;"));
        assert!(html.contains("alert-danger"));
    }

    #[test]
    fn test_busy_label() {
        assert_eq!(
            busy_label().into_string(),
            r#"<span class="spinner"></span> Saving..."#
        );
    }
}
