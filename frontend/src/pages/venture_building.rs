use yew::prelude::*;

use crate::components::modal_trigger::ModalTrigger;
use crate::forms::flows::START_PROJECT_FLOW;
use crate::pages::services::prefill;

#[function_component(VentureBuilding)]
pub fn venture_building() -> Html {
    html! {
        <div class="venture">
            <section class="venture__hero">
                <h1>{"From zero to"}<br />{"market dominance"}</h1>
                <p>
                    {"We don't just consult. We co-build ventures with founders who think beyond borders and refuse to settle for ordinary."}
                </p>
                <ModalTrigger
                    flow={&START_PROJECT_FLOW}
                    label="Build with us"
                    defaults={prefill("Venture Building")}
                />
            </section>

            <section class="venture__cta">
                <h2>{"Let's build your"}<br />{"venture together"}</h2>
                <p>
                    {"Whether you're pre-idea or ready to scale, we partner with founders who refuse to build ordinary companies."}
                </p>
                <ModalTrigger
                    flow={&START_PROJECT_FLOW}
                    label="Start building"
                    defaults={prefill("Venture Building")}
                />
            </section>

            <style>
                {r#"
                .venture {
                    min-height: 100vh;
                    background: #F7F5F3;
                    color: #37322F;
                }
                .venture__hero, .venture__cta {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 1.5rem;
                    padding: 6rem 2rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .venture__cta {
                    border-top: 1px solid rgba(55, 50, 47, 0.12);
                }
                .venture .cta-button {
                    background: #37322F;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 1rem 2rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
