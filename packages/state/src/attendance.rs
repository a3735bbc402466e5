//! Attendance form: asynchronous submit with a busy button, and `.select-all`.

use api::{ApiError, FormQuery};
use ui::AlertKind;

use crate::dom::{DomOp, Target};
use crate::effect::{Completion, Effect, PendingRequest};
use crate::flash::Flash;

pub const SAVED: &str = "Attendance saved successfully!";
pub const SAVE_FAILED: &str = "Failed to save attendance. Please try again.";

#[derive(Debug, Default)]
pub struct Attendance {
    /// Button label to restore, while a submit is in flight.
    in_flight: Option<String>,
}

impl Attendance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn submitted(&mut self, action: &str, fields: FormQuery, label: String) -> Vec<Effect> {
        if self.in_flight.is_some() {
            tracing::debug!("attendance submit ignored, one already in flight");
            return vec![Effect::PreventDefault];
        }
        self.in_flight = Some(label);

        let person_ids = fields.all("person_ids").into_iter().map(String::from).collect();
        let request = api::request::submit_attendance(action, fields);
        vec![
            Effect::PreventDefault,
            DomOp::SetDisabled(Target::SubmitButton, true).into(),
            DomOp::SetHtml(Target::SubmitButton, ui::busy_label().into_string()).into(),
            Effect::Request(PendingRequest {
                request,
                completion: Completion::Attendance { person_ids },
            }),
        ]
    }

    pub fn completed(
        &mut self,
        person_ids: Vec<String>,
        outcome: Result<(), ApiError>,
        flash: &mut Flash,
    ) -> Vec<Effect> {
        let mut effects = match outcome {
            Ok(()) => {
                let mut effects = flash.show(AlertKind::Success, SAVED);
                effects.extend(
                    person_ids
                        .into_iter()
                        .map(|id| DomOp::AddClass(Target::PersonRow(id), "marked").into()),
                );
                effects
            }
            Err(e) => {
                tracing::error!("Form submission error: {}", e);
                flash.show(AlertKind::Danger, SAVE_FAILED)
            }
        };

        let label = self.in_flight.take().unwrap_or_default();
        effects.push(DomOp::SetDisabled(Target::SubmitButton, false).into());
        effects.push(DomOp::SetText(Target::SubmitButton, label).into());
        effects
    }

    /// Check or uncheck every person in the n-th `.select-all`'s section.
    pub fn select_all(&self, index: usize, checked: bool) -> Vec<Effect> {
        vec![DomOp::SetChecked(Target::SelectAllScope(index), checked).into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AttendanceConfig;
    use api::Method;

    fn fields() -> FormQuery {
        FormQuery::new()
            .with("service_id", "4")
            .with("person_ids", "7")
            .with("person_ids", "9")
    }

    #[test]
    fn test_submit_posts_every_field() {
        let mut attendance = Attendance::new();
        let effects = attendance.submitted("/attendance/4", fields(), "Save".to_string());
        assert_eq!(effects[0], Effect::PreventDefault);
        let request = effects
            .iter()
            .find_map(|e| match e {
                Effect::Request(p) => Some(p),
                _ => None,
            })
            .expect("request");
        assert_eq!(request.request.method, Method::Post);
        assert_eq!(request.request.url, "/attendance/4");
        assert_eq!(
            request.completion,
            Completion::Attendance {
                person_ids: vec!["7".to_string(), "9".to_string()]
            }
        );
        assert!(attendance.is_in_flight());
    }

    #[test]
    fn test_second_submit_is_ignored() {
        let mut attendance = Attendance::new();
        attendance.submitted("/a", fields(), "Save".to_string());
        assert_eq!(
            attendance.submitted("/a", fields(), "Saving...".to_string()),
            vec![Effect::PreventDefault]
        );
    }

    #[test]
    fn test_success_marks_rows_and_restores_button() {
        let mut attendance = Attendance::new();
        let mut flash = Flash::new(&AttendanceConfig::default());
        attendance.submitted("/a", fields(), "Save".to_string());
        let effects = attendance.completed(vec!["7".to_string()], Ok(()), &mut flash);
        assert!(effects.contains(&Effect::Dom(DomOp::AddClass(
            Target::PersonRow("7".to_string()),
            "marked"
        ))));
        assert!(effects.ends_with(&[
            Effect::Dom(DomOp::SetDisabled(Target::SubmitButton, false)),
            Effect::Dom(DomOp::SetText(Target::SubmitButton, "Save".to_string())),
        ]));
        assert!(!attendance.is_in_flight());
    }

    #[test]
    fn test_failure_shows_danger_alert() {
        let mut attendance = Attendance::new();
        let mut flash = Flash::new(&AttendanceConfig::default());
        attendance.submitted("/a", fields(), "Save".to_string());
        let effects = attendance.completed(
            vec!["7".to_string()],
            Err(ApiError::status(500)),
            &mut flash,
        );
        match &effects[0] {
            Effect::Dom(DomOp::AppendHtml(Target::FlashMessages, html)) => {
                assert!(html.contains("alert-danger"));
                assert!(html.contains(SAVE_FAILED));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(!effects.iter().any(|e| matches!(
            e,
            Effect::Dom(DomOp::AddClass(Target::PersonRow(_), _))
        )));
        assert_eq!(
            effects.last(),
            Some(&Effect::Dom(DomOp::SetText(
                Target::SubmitButton,
                "Save".to_string()
            )))
        );
    }

    #[test]
    fn test_select_all_targets_its_section() {
        let attendance = Attendance::new();
        assert_eq!(
            attendance.select_all(2, true),
            vec![Effect::Dom(DomOp::SetChecked(Target::SelectAllScope(2), true))]
        );
    }
}
