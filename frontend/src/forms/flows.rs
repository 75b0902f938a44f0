// Declarative definitions of the site's lead-capture forms.

use crate::forms::step::{
    ChoiceOption, Confirmation, FieldKind, FieldSpec, FlowDefinition, SelectOption, StepDefinition,
};

const NAME: FieldSpec = FieldSpec {
    name: "name",
    label: "Your Name",
    kind: FieldKind::Text,
    required: true,
};

const EMAIL: FieldSpec = FieldSpec {
    name: "email",
    label: "Email Address",
    kind: FieldKind::Email,
    required: true,
};

// join: home CTA and hero

const ENGAGEMENT_TYPES: &[ChoiceOption] = &[
    ChoiceOption {
        value: "Build with us",
        label: "Build with us",
        description: "Collaborate on ventures, contribute skills, join projects",
    },
    ChoiceOption {
        value: "Partner with us",
        label: "Partner with us",
        description: "Organizations, brands, and teams can partner on innovation, storytelling, or impact initiatives",
    },
    ChoiceOption {
        value: "Grow with us",
        label: "Grow with us",
        description: "Learn, gain exposure, access opportunities, and evolve as a builder",
    },
];

pub static JOIN_FLOW: FlowDefinition = FlowDefinition {
    id: "join",
    heading: "Join Tenacity",
    relay_path: "/api/join",
    steps: &[
        StepDefinition {
            ordinal: 1,
            title: "Join Tenacity",
            subtitle: None,
            fields: &[NAME, EMAIL],
            action_label: "Next",
        },
        StepDefinition {
            ordinal: 2,
            title: "How do you want to engage?",
            subtitle: None,
            fields: &[FieldSpec {
                name: "engagementType",
                label: "Engagement type",
                kind: FieldKind::ChoiceAdvance { options: ENGAGEMENT_TYPES },
                required: true,
            }],
            action_label: "Next",
        },
        StepDefinition {
            ordinal: 3,
            title: "Tell us more",
            subtitle: Some("Optional"),
            fields: &[FieldSpec {
                name: "bio",
                label: "Share a bit about yourself, your interests, or what you're working on...",
                kind: FieldKind::TextArea { rows: 5 },
                required: false,
            }],
            action_label: "Continue",
        },
    ],
    confirmation: Confirmation {
        title: "Think. Build. Do. Grow.",
        message: "Welcome to Tenacity.",
    },
    success_display_ms: 2_000,
    extra_fields: &[],
};

// service inquiry: services page cards

const SERVICE_CHOICES: &[ChoiceOption] = &[
    ChoiceOption { value: "Venture Building", label: "Venture Building", description: "" },
    ChoiceOption { value: "Brand & Narrative", label: "Brand & Narrative", description: "" },
    ChoiceOption { value: "Product & Engineering", label: "Product & Engineering", description: "" },
    ChoiceOption { value: "Growth & Scale", label: "Growth & Scale", description: "" },
    ChoiceOption { value: "Not sure yet", label: "Not sure yet", description: "" },
];

const TIMELINES: &[SelectOption] = &[
    SelectOption { value: "ASAP", label: "ASAP - Need to start immediately" },
    SelectOption { value: "1-3 months", label: "1-3 months" },
    SelectOption { value: "3-6 months", label: "3-6 months" },
    SelectOption { value: "6+ months", label: "6+ months" },
    SelectOption { value: "Exploring", label: "Just exploring" },
];

const BUDGETS: &[SelectOption] = &[
    SelectOption { value: "< $10K", label: "Less than $10K" },
    SelectOption { value: "$10K - $50K", label: "$10K - $50K" },
    SelectOption { value: "$50K - $100K", label: "$50K - $100K" },
    SelectOption { value: "$100K+", label: "$100K+" },
    SelectOption { value: "Not sure", label: "Not sure yet" },
];

pub static SERVICE_INQUIRY_FLOW: FlowDefinition = FlowDefinition {
    id: "service-inquiry",
    heading: "Work with us",
    relay_path: "/api/service-inquiry",
    steps: &[
        StepDefinition {
            ordinal: 1,
            title: "Let's talk",
            subtitle: Some("Tell us who you are."),
            fields: &[
                NAME,
                EMAIL,
                FieldSpec {
                    name: "company",
                    label: "Company (Optional)",
                    kind: FieldKind::Text,
                    required: false,
                },
            ],
            action_label: "Next",
        },
        StepDefinition {
            ordinal: 2,
            title: "Which service are you interested in?",
            subtitle: None,
            fields: &[FieldSpec {
                name: "service",
                label: "Service",
                kind: FieldKind::ChoiceAdvance { options: SERVICE_CHOICES },
                required: true,
            }],
            action_label: "Next",
        },
        StepDefinition {
            ordinal: 3,
            title: "Tell us about your project",
            subtitle: None,
            fields: &[
                FieldSpec {
                    name: "projectBrief",
                    label: "What are you building? What's the vision? *",
                    kind: FieldKind::TextArea { rows: 5 },
                    required: true,
                },
                FieldSpec {
                    name: "timeline",
                    label: "Timeline",
                    kind: FieldKind::Select { placeholder: "Timeline (Optional)", options: TIMELINES },
                    required: false,
                },
                FieldSpec {
                    name: "budget",
                    label: "Budget",
                    kind: FieldKind::Select { placeholder: "Budget Range (Optional)", options: BUDGETS },
                    required: false,
                },
            ],
            action_label: "Submit",
        },
    ],
    confirmation: Confirmation {
        title: "Inquiry received",
        message: "Thanks {name}! We'll review your project and get back to you within 24 hours.",
    },
    success_display_ms: 3_000,
    extra_fields: &[],
};

// start project: venture building page

const STAGES: &[ChoiceOption] = &[
    ChoiceOption { value: "idea", label: "💡 Just an idea", description: "" },
    ChoiceOption { value: "validated", label: "✅ Validated concept", description: "" },
    ChoiceOption { value: "prototype", label: "🛠️ Early prototype/MVP", description: "" },
    ChoiceOption { value: "traction", label: "📈 Have traction, need to scale", description: "" },
    ChoiceOption { value: "ready", label: "🚀 Ready to dominate", description: "" },
];

const NEEDS: &[&str] = &[
    "Strategy & validation",
    "Product development",
    "Brand & go-to-market",
    "Full venture build",
    "Not sure, let's figure it out",
];

const AUDIENCES: &[SelectOption] = &[
    SelectOption { value: "B2B (Business to Business)", label: "B2B (Business to Business)" },
    SelectOption { value: "B2C (Business to Consumer)", label: "B2C (Business to Consumer)" },
    SelectOption { value: "Marketplace", label: "Marketplace" },
    SelectOption { value: "Platform", label: "Platform" },
    SelectOption { value: "SaaS", label: "SaaS" },
    SelectOption { value: "Not sure yet", label: "Not sure yet" },
];

const BEST_TIMES: &[SelectOption] = &[
    SelectOption { value: "Morning (9am - 12pm)", label: "Morning (9am - 12pm)" },
    SelectOption { value: "Afternoon (12pm - 5pm)", label: "Afternoon (12pm - 5pm)" },
    SelectOption { value: "Evening (5pm - 8pm)", label: "Evening (5pm - 8pm)" },
    SelectOption { value: "Flexible", label: "Flexible" },
];

pub static START_PROJECT_FLOW: FlowDefinition = FlowDefinition {
    id: "start-project",
    heading: "Start a project",
    relay_path: "/api/start-project",
    steps: &[
        StepDefinition {
            ordinal: 1,
            title: "What are you building?",
            subtitle: Some("Start with your vision. We'll figure out the rest together."),
            fields: &[
                FieldSpec {
                    name: "problem",
                    label: "What problem are you solving? *",
                    kind: FieldKind::TextArea { rows: 4 },
                    required: true,
                },
                FieldSpec {
                    name: "vision",
                    label: "What's the vision? (Optional)",
                    kind: FieldKind::TextArea { rows: 3 },
                    required: false,
                },
                FieldSpec {
                    name: "audience",
                    label: "Audience",
                    kind: FieldKind::Select { placeholder: "Who is this for? (Optional)", options: AUDIENCES },
                    required: false,
                },
            ],
            action_label: "Next",
        },
        StepDefinition {
            ordinal: 2,
            title: "Where are you at?",
            subtitle: None,
            fields: &[
                FieldSpec {
                    name: "stage",
                    label: "Current stage",
                    kind: FieldKind::Choice { options: STAGES },
                    required: true,
                },
                FieldSpec {
                    name: "needs",
                    label: "What do you need? (Select all that apply)",
                    kind: FieldKind::MultiChoice { options: NEEDS },
                    required: false,
                },
            ],
            action_label: "Next",
        },
        StepDefinition {
            ordinal: 3,
            title: "Let's connect",
            subtitle: Some("We'll get back to you within 24 hours."),
            fields: &[
                FieldSpec { label: "Your Name *", ..NAME },
                FieldSpec { label: "Email Address *", ..EMAIL },
                FieldSpec {
                    name: "phone",
                    label: "WhatsApp/Phone (Optional)",
                    kind: FieldKind::Tel,
                    required: false,
                },
                FieldSpec {
                    name: "bestTime",
                    label: "Best time",
                    kind: FieldKind::Select { placeholder: "Best time to chat? (Optional)", options: BEST_TIMES },
                    required: false,
                },
            ],
            action_label: "Let's build",
        },
    ],
    confirmation: Confirmation {
        title: "Let's build together",
        message: "Thanks {name}! We're excited about what you're building. We'll reach out within 24 hours.",
    },
    success_display_ms: 3_000,
    extra_fields: &["service"],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn field_names_are_unique_per_flow() {
        for flow in [&JOIN_FLOW, &SERVICE_INQUIRY_FLOW, &START_PROJECT_FLOW] {
            let mut seen = HashSet::new();
            for field in flow.fields() {
                assert!(seen.insert(field.name), "{} repeats {}", flow.id, field.name);
            }
        }
    }

    #[test]
    fn ordinals_match_positions() {
        for flow in [&JOIN_FLOW, &SERVICE_INQUIRY_FLOW, &START_PROJECT_FLOW] {
            for (i, step) in flow.steps.iter().enumerate() {
                assert_eq!(step.ordinal, i + 1);
            }
            assert_eq!(flow.total_steps(), 4);
        }
    }
}
