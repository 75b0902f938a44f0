use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::modal_trigger::ModalTrigger;
use crate::forms::flows::JOIN_FLOW;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <section class="hero">
                <h1>{"An Ecosystem for Ventures, Builders and Bold Ideas"}</h1>
                <p class="hero__subtitle">
                    {"We build ventures, brands and products with founders who refuse to settle."}
                </p>
                <div class="hero__actions">
                    <ModalTrigger flow={&JOIN_FLOW} label="Join Tenacity" />
                    <Link<Route> to={Route::Services} classes="secondary-link">
                        {"Explore services →"}
                    </Link<Route>>
                </div>
            </section>

            <section class="cta">
                <h2>{"Ready to Build?"}</h2>
                <p>
                    {"This is your invitation. To think bigger. To act boldly. To create something that matters."}
                </p>
                <ModalTrigger flow={&JOIN_FLOW} label="Join Tenacity" />
            </section>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #F7F5F3;
                    color: #37322F;
                }
                .hero, .cta {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    gap: 1.5rem;
                    padding: 6rem 2rem;
                }
                .cta {
                    border-top: 1px solid rgba(55, 50, 47, 0.12);
                }
                .hero__actions {
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                }
                .cta-button {
                    background: #37322F;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.6rem 3rem;
                    font-size: 0.8rem;
                    font-weight: 500;
                    cursor: pointer;
                }
                .secondary-link {
                    color: #605A57;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}
