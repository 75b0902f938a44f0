use crate::forms::session::FormSession;
use crate::forms::step::{FieldKind, FieldSpec, StepDefinition};

/// Loose syntactic check, the webhook consumer does the real validation.
pub fn is_plausible_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    match domain.find('.') {
        Some(_) => !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

fn field_satisfied(field: &FieldSpec, session: &FormSession) -> bool {
    let value = session.value(field.name);
    match field.kind {
        FieldKind::Email => is_plausible_email(value.map(|v| v.as_text()).unwrap_or("")),
        _ => value.map(|v| !v.is_blank()).unwrap_or(false),
    }
}

/// Names of the required fields on `step` that currently block advancing.
pub fn missing_fields(step: &StepDefinition, session: &FormSession) -> Vec<&'static str> {
    step.required_fields()
        .filter(|f| !field_satisfied(f, session))
        .map(|f| f.name)
        .collect()
}

pub fn gate_passes(step: &StepDefinition, session: &FormSession) -> bool {
    step.required_fields().all(|f| field_satisfied(f, session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::flows::{JOIN_FLOW, START_PROJECT_FLOW};

    #[test]
    fn plausible_emails() {
        assert!(is_plausible_email("ada@x.com"));
        assert!(is_plausible_email("  kwame@acme.com "));
        assert!(is_plausible_email("first.last+tag@mail.example.org"));
    }

    #[test]
    fn implausible_emails() {
        for bad in ["", "ada", "ada@", "@x.com", "ada@x", "ada@.com", "ada@x.", "a b@x.com", "a@b@c.com"] {
            assert!(!is_plausible_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn identity_step_needs_name_and_email() {
        let mut session = FormSession::new(&JOIN_FLOW);
        let step = JOIN_FLOW.step(1).unwrap();
        assert_eq!(missing_fields(step, &session), vec!["name", "email"]);

        session.set_field("email", "a@b.com");
        assert_eq!(missing_fields(step, &session), vec!["name"]);
        assert!(!gate_passes(step, &session));

        session.set_field("name", "   ");
        assert!(!gate_passes(step, &session));

        session.set_field("name", "Ada");
        assert!(gate_passes(step, &session));
    }

    #[test]
    fn optional_fields_never_block() {
        let mut session = FormSession::new(&START_PROJECT_FLOW);
        let step = START_PROJECT_FLOW.step(3).unwrap();
        session.set_field("name", "Ada");
        session.set_field("email", "ada@x.com");
        assert!(gate_passes(step, &session));
        assert!(missing_fields(step, &session).is_empty());
    }
}
