use serde::Serialize;

/// How a field is rendered and how its value is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea { rows: u32 },
    Select { placeholder: &'static str, options: &'static [SelectOption] },
    /// Clicking an option stores it and moves to the next step.
    ChoiceAdvance { options: &'static [ChoiceOption] },
    /// Single choice that stays on the step until Next is pressed.
    Choice { options: &'static [ChoiceOption] },
    /// Toggle any number of options; stored as a list.
    MultiChoice { options: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn is_list(&self) -> bool {
        matches!(self.kind, FieldKind::MultiChoice { .. })
    }

    pub fn empty_value(&self) -> FieldValue {
        if self.is_list() {
            FieldValue::List(Vec::new())
        } else {
            FieldValue::Text(String::new())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepDefinition {
    pub ordinal: usize,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub fields: &'static [FieldSpec],
    /// Label of the button that leaves this step. The last input step submits.
    pub action_label: &'static str,
}

impl StepDefinition {
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn advances_on_choice(&self) -> bool {
        self.fields
            .iter()
            .any(|f| matches!(f.kind, FieldKind::ChoiceAdvance { .. }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confirmation {
    pub title: &'static str,
    /// `{name}` is replaced with the submitted name.
    pub message: &'static str,
}

impl Confirmation {
    pub fn render_message(&self, name: &str) -> String {
        self.message.replace("{name}", name)
    }
}

/// Static description of one multi-step form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowDefinition {
    pub id: &'static str,
    pub heading: &'static str,
    pub relay_path: &'static str,
    pub steps: &'static [StepDefinition],
    pub confirmation: Confirmation,
    pub success_display_ms: u32,
    /// Constant fields merged into every payload, keyed by payload name.
    /// The value is taken from the session default of the same name.
    pub extra_fields: &'static [&'static str],
}

impl FlowDefinition {
    pub fn input_steps(&self) -> usize {
        self.steps.len()
    }

    /// Input steps plus the terminal confirmation step.
    pub fn total_steps(&self) -> usize {
        self.steps.len() + 1
    }

    pub fn step(&self, ordinal: usize) -> Option<&StepDefinition> {
        ordinal.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::List(_) => "",
        }
    }

    pub fn as_list(&self) -> &[String] {
        match self {
            FieldValue::List(items) => items,
            FieldValue::Text(_) => &[],
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}
