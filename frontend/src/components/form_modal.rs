use std::collections::BTreeMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::lifecycle::{AutoCloseTicket, DeliveryTicket, ModalLifecycle, ResetTicket, CLOSE_ANIMATION_MS};
use crate::forms::session::{FormSession, SubmissionStatus};
use crate::forms::step::{FieldKind, FieldSpec, FlowDefinition};
use crate::forms::submission::{GlooTransport, SubmissionClient};

#[derive(Properties, PartialEq)]
pub struct FormModalProps {
    pub flow: &'static FlowDefinition,
    pub open: bool,
    pub on_close: Callback<()>,
    /// Prefilled values, e.g. the service card that opened the modal.
    #[prop_or_default]
    pub defaults: BTreeMap<String, String>,
}

pub enum FormModalMsg {
    SetField(&'static str, String),
    ToggleChoice(&'static str, &'static str),
    Choose(&'static str, &'static str),
    Next,
    Back,
    Submit,
    Delivered(DeliveryTicket, bool),
    Close,
    ResetElapsed(ResetTicket),
    AutoClose(AutoCloseTicket),
}

/// One multi-step lead form in an overlay. All flows share this component and
/// differ only in their `FlowDefinition`.
pub struct FormModal {
    lifecycle: ModalLifecycle,
    client: Rc<SubmissionClient<GlooTransport>>,
}

impl FormModal {
    fn schedule_reset(ctx: &Context<Self>, ticket: ResetTicket) {
        let link = ctx.link().clone();
        Timeout::new(CLOSE_ANIMATION_MS, move || {
            link.send_message(FormModalMsg::ResetElapsed(ticket));
        })
        .forget();
    }

    fn close(&mut self, ctx: &Context<Self>) {
        let ticket = self.lifecycle.close();
        ctx.props().on_close.emit(());
        Self::schedule_reset(ctx, ticket);
    }

    fn view_field(&self, ctx: &Context<Self>, session: &FormSession, field: &'static FieldSpec) -> Html {
        let name = field.name;
        let link = ctx.link();
        match field.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
                let input_type = match field.kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    _ => "text",
                };
                html! {
                    <input
                        type={input_type}
                        class="form-input"
                        placeholder={field.label}
                        value={session.text(name).to_string()}
                        required={field.required}
                        oninput={link.callback(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            FormModalMsg::SetField(name, input.value())
                        })}
                    />
                }
            }
            FieldKind::TextArea { rows } => html! {
                <textarea
                    class="form-input"
                    rows={rows.to_string()}
                    placeholder={field.label}
                    value={session.text(name).to_string()}
                    required={field.required}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        FormModalMsg::SetField(name, input.value())
                    })}
                />
            },
            FieldKind::Select { placeholder, options } => {
                let current = session.text(name);
                html! {
                    <select
                        class="form-input"
                        onchange={link.callback(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            FormModalMsg::SetField(name, select.value())
                        })}
                    >
                        <option value="" selected={current.is_empty()}>{placeholder}</option>
                        { for options.iter().map(|opt| html! {
                            <option value={opt.value} selected={current == opt.value}>{opt.label}</option>
                        }) }
                    </select>
                }
            }
            FieldKind::ChoiceAdvance { options } | FieldKind::Choice { options } => {
                let advance = matches!(field.kind, FieldKind::ChoiceAdvance { .. });
                let current = session.text(name);
                html! {
                    <div class="choice-list">
                        { for options.iter().map(|opt| {
                            let value = opt.value;
                            let onclick = if advance {
                                link.callback(move |_: MouseEvent| FormModalMsg::Choose(name, value))
                            } else {
                                link.callback(move |_: MouseEvent| FormModalMsg::SetField(name, value.to_string()))
                            };
                            html! {
                                <button
                                    class={classes!("choice", (current == value).then(|| "selected"))}
                                    {onclick}
                                >
                                    <div class="choice-label">{opt.label}</div>
                                    if !opt.description.is_empty() {
                                        <div class="choice-description">{opt.description}</div>
                                    }
                                </button>
                            }
                        }) }
                    </div>
                }
            }
            FieldKind::MultiChoice { options } => {
                let selected = session.selected_choices(name);
                html! {
                    <div class="multi-choice">
                        <p class="field-label">{field.label}</p>
                        { for options.iter().map(|opt| {
                            let value: &'static str = *opt;
                            let is_selected = selected.iter().any(|s| s == value);
                            html! {
                                <button
                                    class={classes!("chip", is_selected.then(|| "selected"))}
                                    onclick={link.callback(move |_| FormModalMsg::ToggleChoice(name, value))}
                                >
                                    {value}
                                </button>
                            }
                        }) }
                    </div>
                }
            }
        }
    }

    fn view_step(&self, ctx: &Context<Self>, session: &FormSession) -> Html {
        let Some(step) = session.step_definition() else {
            return html! {};
        };
        let link = ctx.link();
        let submitting = session.status() == SubmissionStatus::Submitting;

        let action = if session.is_last_input_step() {
            let label = if submitting { "Submitting..." } else { step.action_label };
            html! {
                <button
                    class="primary-button"
                    disabled={!session.can_submit()}
                    onclick={link.callback(|_| FormModalMsg::Submit)}
                >
                    {label}
                </button>
            }
        } else if step.advances_on_choice() {
            html! {}
        } else {
            html! {
                <button
                    class="primary-button"
                    disabled={!session.can_advance()}
                    onclick={link.callback(|_| FormModalMsg::Next)}
                >
                    {step.action_label}
                </button>
            }
        };

        html! {
            <div class="form-step" key={format!("step{}", step.ordinal)}>
                <h2>{step.title}</h2>
                if let Some(subtitle) = step.subtitle {
                    <p class="form-subtitle">{subtitle}</p>
                }
                { for step.fields.iter().map(|field| self.view_field(ctx, session, field)) }
                if session.status() == SubmissionStatus::Failed {
                    <p class="form-error">{"Something went wrong. Please try again."}</p>
                }
                {action}
                if step.ordinal > 1 {
                    <button
                        class="back-button"
                        disabled={submitting}
                        onclick={link.callback(|_| FormModalMsg::Back)}
                    >
                        {"← Back"}
                    </button>
                }
            </div>
        }
    }

    fn view_confirmation(&self, session: &FormSession) -> Html {
        let confirmation = session.flow().confirmation;
        html! {
            <div class="form-confirmation" key="confirmation">
                <h2>{confirmation.title}</h2>
                <p>{session.confirmation_message()}</p>
            </div>
        }
    }
}

impl Component for FormModal {
    type Message = FormModalMsg;
    type Properties = FormModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let session = FormSession::with_defaults(props.flow, props.defaults.clone());
        let mut lifecycle = ModalLifecycle::new(session);
        if props.open {
            lifecycle.open();
        }
        Self {
            lifecycle,
            client: Rc::new(SubmissionClient::browser(config::relay_url(props.flow.relay_path))),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.open && !self.lifecycle.is_open() {
            self.lifecycle.open();
        } else if !props.open && self.lifecycle.is_open() {
            let ticket = self.lifecycle.close();
            Self::schedule_reset(ctx, ticket);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let session = self.lifecycle.session();
        let rerender = match msg {
            FormModalMsg::SetField(name, value) => session.borrow_mut().set_field(name, value),
            FormModalMsg::ToggleChoice(name, value) => session.borrow_mut().toggle_choice(name, value),
            FormModalMsg::Choose(name, value) => session.borrow_mut().choose(name, value),
            FormModalMsg::Next => session.borrow_mut().advance(),
            FormModalMsg::Back => session.borrow_mut().retreat(),
            FormModalMsg::Submit => {
                let body = match self.client.prepare(&session) {
                    Ok(body) => body,
                    Err(reason) => {
                        log::debug!("submit ignored: {:?}", reason);
                        return false;
                    }
                };
                let ticket = self.lifecycle.delivery_ticket();
                let client = self.client.clone();
                let flow_id = ctx.props().flow.id;
                ctx.link().send_future(async move {
                    FormModalMsg::Delivered(ticket, client.deliver(flow_id, &body).await)
                });
                true
            }
            FormModalMsg::Delivered(ticket, succeeded) => {
                if !self.lifecycle.finish_delivery(ticket, succeeded) {
                    return false;
                }
                if let Some(ticket) = self.lifecycle.success_ticket() {
                    let link = ctx.link().clone();
                    Timeout::new(ctx.props().flow.success_display_ms, move || {
                        link.send_message(FormModalMsg::AutoClose(ticket));
                    })
                    .forget();
                }
                true
            }
            FormModalMsg::Close => {
                self.close(ctx);
                true
            }
            FormModalMsg::ResetElapsed(ticket) => self.lifecycle.apply_reset(ticket),
            FormModalMsg::AutoClose(ticket) => match self.lifecycle.auto_close(ticket) {
                Some(reset) => {
                    ctx.props().on_close.emit(());
                    Self::schedule_reset(ctx, reset);
                    true
                }
                None => false,
            },
        };
        rerender
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.lifecycle.is_open() {
            return html! {};
        }
        let session = self.lifecycle.session();
        let session = session.borrow();
        let close = ctx.link().callback(|_: MouseEvent| FormModalMsg::Close);
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="modal-backdrop" onclick={close.clone()}>
                <div class="modal-card" role="dialog" aria-label={ctx.props().flow.heading} onclick={keep_open}>
                    <button class="modal-close" onclick={close}>{"×"}</button>
                    {
                        if session.is_terminal() {
                            self.view_confirmation(&session)
                        } else {
                            self.view_step(ctx, &session)
                        }
                    }
                </div>
                <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(4px);
                    padding: 0 1rem;
                    animation: fadeIn 0.3s ease-out;
                }
                .modal-card {
                    position: relative;
                    background: #fff;
                    border-radius: 16px;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
                    padding: 3rem;
                    width: 100%;
                    max-width: 42rem;
                    max-height: 90vh;
                    overflow-y: auto;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #605A57;
                    font-size: 1.25rem;
                    font-weight: bold;
                    cursor: pointer;
                }
                .form-step, .form-confirmation {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    color: #37322F;
                }
                .form-confirmation {
                    align-items: center;
                    text-align: center;
                    padding: 2rem 0;
                }
                .form-subtitle, .field-label, .choice-description {
                    color: #605A57;
                    font-size: 0.875rem;
                }
                .form-input {
                    border: 1px solid #E0DEDB;
                    border-radius: 8px;
                    padding: 0.75rem 1rem;
                    color: #37322F;
                    resize: none;
                }
                .choice {
                    text-align: left;
                    border: 2px solid #E0DEDB;
                    border-radius: 8px;
                    padding: 1rem 1.25rem;
                    background: #fff;
                    cursor: pointer;
                }
                .choice.selected, .chip.selected {
                    border-color: #37322F;
                    background: #F7F5F3;
                }
                .chip {
                    border: 1px solid #E0DEDB;
                    border-radius: 999px;
                    padding: 0.5rem 1rem;
                    margin: 0 0.5rem 0.5rem 0;
                    background: #fff;
                    cursor: pointer;
                }
                .primary-button {
                    background: #37322F;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.75rem 1.5rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .primary-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .back-button {
                    background: none;
                    border: none;
                    color: #605A57;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .form-error {
                    color: #B42318;
                    font-size: 0.875rem;
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
                </style>
            </div>
        }
    }
}
