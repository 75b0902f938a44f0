use std::collections::BTreeMap;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::modal_trigger::ModalTrigger;
use crate::forms::flows::SERVICE_INQUIRY_FLOW;
use crate::Route;

struct ServiceCard {
    title: &'static str,
    description: &'static str,
}

const CARDS: &[ServiceCard] = &[
    ServiceCard {
        title: "Venture Building",
        description: "From zero to market. We co-build ventures with founders who think beyond borders.",
    },
    ServiceCard {
        title: "Brand & Narrative",
        description: "Stories that move markets. Build a brand that people believe in and talk about.",
    },
    ServiceCard {
        title: "Product & Engineering",
        description: "Technology that scales. Build products that users love and that grow with your vision.",
    },
    ServiceCard {
        title: "Growth & Scale",
        description: "From traction to dominance. Scale with strategies that work in emerging markets.",
    },
];

pub fn prefill(service: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("service".to_string(), service.to_string())])
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services">
            <section class="services__header">
                <h1>{"What we do"}</h1>
                <p>{"Services built for founders who refuse to settle."}</p>
            </section>

            <section class="services__grid">
                { for CARDS.iter().map(|card| html! {
                    <div class="service-card">
                        <h3>{card.title}</h3>
                        <p>{card.description}</p>
                        <ModalTrigger
                            flow={&SERVICE_INQUIRY_FLOW}
                            label="Get started"
                            class="card-button"
                            defaults={prefill(card.title)}
                        />
                    </div>
                }) }
            </section>

            <section class="services__cta">
                <h2>{"Have something in mind?"}</h2>
                <ModalTrigger flow={&SERVICE_INQUIRY_FLOW} label="Work with us" />
            </section>

            <section class="services__venture">
                <h2>{"Venture Building"}</h2>
                <p>{"Bring us the problem. We'll build the company around it together."}</p>
                <Link<Route> to={Route::VentureBuilding} classes="card-button">
                    {"See how we build"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .services {
                    min-height: 100vh;
                    background: #F7F5F3;
                    color: #37322F;
                    padding: 4rem 2rem;
                }
                .services__header, .services__cta, .services__venture {
                    text-align: center;
                    margin: 3rem auto;
                    max-width: 48rem;
                }
                .services__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 1.5rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .service-card {
                    background: #fff;
                    border: 1px solid #E0DEDB;
                    border-radius: 12px;
                    padding: 2rem;
                }
                .card-button {
                    background: none;
                    border: 1px solid #37322F;
                    border-radius: 999px;
                    padding: 0.5rem 1.5rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
