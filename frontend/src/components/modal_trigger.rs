use std::collections::BTreeMap;

use yew::prelude::*;

use crate::components::form_modal::FormModal;
use crate::forms::step::FlowDefinition;

#[derive(Properties, PartialEq)]
pub struct ModalTriggerProps {
    pub flow: &'static FlowDefinition,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("cta-button"))]
    pub class: AttrValue,
    #[prop_or_default]
    pub defaults: BTreeMap<String, String>,
}

/// A button that opens the modal for `flow`.
#[function_component(ModalTrigger)]
pub fn modal_trigger(props: &ModalTriggerProps) -> Html {
    let open = use_state(|| false);

    let on_open = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(true);
        })
    };

    let on_close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(false))
    };

    html! {
        <>
            <button class={props.class.to_string()} onclick={on_open}>
                {props.label.clone()}
            </button>
            <FormModal
                flow={props.flow}
                open={*open}
                on_close={on_close}
                defaults={props.defaults.clone()}
            />
        </>
    }
}
