use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::forms::step::{FieldValue, FlowDefinition, StepDefinition};
use crate::forms::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why `begin_submit` refused to start a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    AlreadySubmitting,
    NotOnLastStep,
    Incomplete(Vec<&'static str>),
}

/// State of one open modal. Every transition keeps `current_step` inside
/// `[1, total_steps]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    flow: &'static FlowDefinition,
    current_step: usize,
    fields: BTreeMap<&'static str, FieldValue>,
    status: SubmissionStatus,
    defaults: BTreeMap<String, String>,
}

impl FormSession {
    pub fn new(flow: &'static FlowDefinition) -> Self {
        Self::with_defaults(flow, BTreeMap::new())
    }

    /// Defaults survive resets. A default whose key is not a field of the
    /// flow is only used for the flow's extra payload fields.
    pub fn with_defaults(flow: &'static FlowDefinition, defaults: BTreeMap<String, String>) -> Self {
        let mut session = Self {
            flow,
            current_step: 1,
            fields: BTreeMap::new(),
            status: SubmissionStatus::Idle,
            defaults,
        };
        session.reset();
        session
    }

    pub fn flow(&self) -> &'static FlowDefinition {
        self.flow
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.flow.total_steps()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn step_definition(&self) -> Option<&'static StepDefinition> {
        self.flow.step(self.current_step)
    }

    pub fn is_terminal(&self) -> bool {
        self.current_step == self.flow.total_steps()
    }

    pub fn is_last_input_step(&self) -> bool {
        self.current_step == self.flow.input_steps()
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.value(name).map(|v| v.as_text()).unwrap_or("")
    }

    pub fn selected_choices(&self, name: &str) -> &[String] {
        self.value(name).map(|v| v.as_list()).unwrap_or(&[])
    }

    pub fn fields(&self) -> &BTreeMap<&'static str, FieldValue> {
        &self.fields
    }

    fn editable(&self) -> bool {
        !self.is_terminal() && self.status != SubmissionStatus::Submitting
    }

    /// Returns false when the edit was ignored.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        if !self.editable() {
            return false;
        }
        let Some(spec) = self.flow.field(name) else {
            return false;
        };
        let value = value.into();
        if spec.is_list() != matches!(value, FieldValue::List(_)) {
            return false;
        }
        self.fields.insert(spec.name, value);
        true
    }

    /// Adds `choice` to a multi-select field, or removes it if present.
    pub fn toggle_choice(&mut self, name: &str, choice: &str) -> bool {
        if !self.editable() {
            return false;
        }
        let Some(spec) = self.flow.field(name).filter(|f| f.is_list()) else {
            return false;
        };
        let mut selected = self.selected_choices(spec.name).to_vec();
        match selected.iter().position(|c| c == choice) {
            Some(i) => {
                selected.remove(i);
            }
            None => selected.push(choice.to_string()),
        }
        self.fields.insert(spec.name, FieldValue::List(selected));
        true
    }

    /// Stores a single choice and moves on when the step's gate allows it.
    pub fn choose(&mut self, name: &str, choice: &str) -> bool {
        self.set_field(name, choice) && self.advance()
    }

    pub fn can_advance(&self) -> bool {
        if !self.editable() || self.current_step >= self.flow.input_steps() {
            return false;
        }
        self.step_definition()
            .map(|step| validation::gate_passes(step, self))
            .unwrap_or(false)
    }

    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.current_step += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.editable() || self.current_step <= 1 {
            return false;
        }
        self.current_step -= 1;
        true
    }

    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    fn check_submit(&self) -> Result<(), SubmitRejected> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if !self.is_last_input_step() {
            return Err(SubmitRejected::NotOnLastStep);
        }
        let missing: Vec<&'static str> = self
            .flow
            .steps
            .iter()
            .flat_map(|step| validation::missing_fields(step, self))
            .collect();
        if !missing.is_empty() {
            return Err(SubmitRejected::Incomplete(missing));
        }
        Ok(())
    }

    /// Marks the session as in flight and returns the JSON body to send.
    pub fn begin_submit(&mut self) -> Result<Value, SubmitRejected> {
        self.check_submit()?;
        self.status = SubmissionStatus::Submitting;
        Ok(self.payload())
    }

    pub fn finish_submit(&mut self, succeeded: bool) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        if succeeded {
            self.status = SubmissionStatus::Succeeded;
            self.current_step = self.flow.total_steps();
        } else {
            self.status = SubmissionStatus::Failed;
        }
    }

    /// Every declared field plus the flow's extras. Timestamp is added by the
    /// submission client.
    pub fn payload(&self) -> Value {
        let mut body = Map::new();
        for spec in self.flow.fields() {
            let value = self.fields.get(spec.name).cloned().unwrap_or_else(|| spec.empty_value());
            body.insert(spec.name.to_string(), serde_json::to_value(value).unwrap_or(Value::Null));
        }
        for extra in self.flow.extra_fields {
            if let Some(value) = self.defaults.get(*extra) {
                body.insert(extra.to_string(), Value::String(value.clone()));
            }
        }
        Value::Object(body)
    }

    pub fn reset(&mut self) {
        self.current_step = 1;
        self.status = SubmissionStatus::Idle;
        self.fields = self
            .flow
            .fields()
            .map(|spec| {
                let value = match self.defaults.get(spec.name) {
                    Some(default) if !spec.is_list() => FieldValue::Text(default.clone()),
                    _ => spec.empty_value(),
                };
                (spec.name, value)
            })
            .collect();
    }

    pub fn confirmation_message(&self) -> String {
        self.flow.confirmation.render_message(self.text("name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::flows::{JOIN_FLOW, SERVICE_INQUIRY_FLOW, START_PROJECT_FLOW};

    fn filled_join() -> FormSession {
        let mut session = FormSession::new(&JOIN_FLOW);
        session.set_field("name", "Kwame");
        session.set_field("email", "kwame@acme.com");
        assert!(session.advance());
        assert!(session.choose("engagementType", "Build with us"));
        session
    }

    #[test]
    fn advance_is_noop_when_gate_fails() {
        let mut session = FormSession::new(&JOIN_FLOW);
        session.set_field("name", "");
        session.set_field("email", "a@b.com");
        let before = session.clone();

        assert!(!session.advance());
        assert_eq!(session, before);
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn retreat_keeps_entered_values() {
        let mut session = FormSession::new(&JOIN_FLOW);
        session.set_field("name", "Ada");
        session.set_field("email", "ada@x.com");
        assert!(session.advance());
        assert_eq!(session.current_step(), 2);

        assert!(session.retreat());
        assert_eq!(session.current_step(), 1);
        assert!(session.advance());

        assert_eq!(session.current_step(), 2);
        assert_eq!(session.text("name"), "Ada");
        assert_eq!(session.text("email"), "ada@x.com");
    }

    #[test]
    fn step_stays_in_bounds() {
        let mut session = FormSession::new(&JOIN_FLOW);
        session.set_field("name", "Ada");
        session.set_field("email", "ada@x.com");
        session.set_field("engagementType", "Grow with us");

        let moves = [true, true, true, true, false, false, false, false, true, false, true, true, true];
        for forward in moves {
            if forward {
                session.advance();
            } else {
                session.retreat();
            }
            assert!(session.current_step() >= 1);
            assert!(session.current_step() <= session.total_steps());
        }
        // advance alone never reaches the terminal step
        assert_eq!(session.current_step(), 3);
    }

    #[test]
    fn choice_step_advances_on_pick() {
        let session = filled_join();
        assert_eq!(session.current_step(), 3);
        assert_eq!(session.text("engagementType"), "Build with us");
    }

    #[test]
    fn begin_submit_only_on_last_input_step() {
        let mut session = FormSession::new(&JOIN_FLOW);
        assert_eq!(session.begin_submit(), Err(SubmitRejected::NotOnLastStep));

        let mut session = filled_join();
        let body = session.begin_submit().unwrap();
        assert_eq!(session.status(), SubmissionStatus::Submitting);
        assert_eq!(body["name"], "Kwame");
        assert_eq!(session.begin_submit(), Err(SubmitRejected::AlreadySubmitting));
    }

    #[test]
    fn submit_requires_every_step_complete() {
        let mut session = FormSession::new(&START_PROJECT_FLOW);
        session.set_field("problem", "Onboarding is slow");
        assert!(session.advance());
        session.set_field("stage", "idea");
        assert!(session.advance());
        session.set_field("name", "Ada");

        assert_eq!(session.begin_submit(), Err(SubmitRejected::Incomplete(vec!["email"])));
        assert_eq!(session.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn success_moves_to_terminal_and_locks_edits() {
        let mut session = filled_join();
        session.begin_submit().unwrap();
        session.finish_submit(true);

        assert!(session.is_terminal());
        assert_eq!(session.current_step(), 4);
        assert_eq!(session.status(), SubmissionStatus::Succeeded);
        assert!(!session.set_field("bio", "late edit"));
        assert!(!session.retreat());
        assert!(!session.advance());
    }

    #[test]
    fn failure_keeps_step_and_fields_and_allows_retry() {
        let mut session = filled_join();
        session.set_field("bio", "Designer");
        session.begin_submit().unwrap();
        session.finish_submit(false);

        assert_eq!(session.status(), SubmissionStatus::Failed);
        assert_eq!(session.current_step(), 3);
        assert_eq!(session.text("bio"), "Designer");
        assert!(session.begin_submit().is_ok());
    }

    #[test]
    fn edits_ignored_while_submitting() {
        let mut session = filled_join();
        session.begin_submit().unwrap();
        assert!(!session.set_field("bio", "x"));
        assert!(!session.retreat());
    }

    #[test]
    fn toggle_choice_adds_and_removes() {
        let mut session = FormSession::new(&START_PROJECT_FLOW);
        session.toggle_choice("needs", "Product development");
        session.toggle_choice("needs", "Full venture build");
        session.toggle_choice("needs", "Product development");
        assert_eq!(session.selected_choices("needs"), ["Full venture build".to_string()]);
        assert!(!session.toggle_choice("stage", "idea"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut session = FormSession::new(&JOIN_FLOW);
        assert!(!session.set_field("favouriteColour", "green"));
        assert!(session.value("favouriteColour").is_none());
    }

    #[test]
    fn defaults_prefill_and_survive_reset() {
        let defaults = BTreeMap::from([("service".to_string(), "Growth & Scale".to_string())]);
        let mut session = FormSession::with_defaults(&SERVICE_INQUIRY_FLOW, defaults);
        assert_eq!(session.text("service"), "Growth & Scale");

        session.set_field("service", "Not sure yet");
        session.reset();
        assert_eq!(session.text("service"), "Growth & Scale");
    }

    #[test]
    fn extras_come_from_defaults() {
        let defaults = BTreeMap::from([("service".to_string(), "Venture Building".to_string())]);
        let session = FormSession::with_defaults(&START_PROJECT_FLOW, defaults);
        let body = session.payload();
        assert_eq!(body["service"], "Venture Building");
        assert_eq!(body["needs"], serde_json::json!([]));

        let without = FormSession::new(&START_PROJECT_FLOW).payload();
        assert!(without.get("service").is_none());
    }

    #[test]
    fn confirmation_uses_name() {
        let mut session = FormSession::new(&SERVICE_INQUIRY_FLOW);
        session.set_field("name", "Ada");
        assert!(session.confirmation_message().starts_with("Thanks Ada!"));
    }
}
