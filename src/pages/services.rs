use yew::prelude::*;

use crate::content::{Service, SERVICES};
use crate::pages::landing::{reveal_classes, SectionProps};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service: &Service = &SERVICES[props.index];
    let hovered = use_state(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let style = format!(
        "--accent: {}; transition-delay: {}ms;",
        service.color,
        (props.index % 5) * 80
    );

    html! {
        <div
            class={classes!("service-card", (*hovered).then(|| "hovered"))}
            style={style}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div class="service-icon"><i class={service.icon}></i></div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! {
                    <li><i class="fas fa-check"></i>{*feature}</li>
                })}
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services(props: &SectionProps) -> Html {
    html! {
        <section id="services" class={classes!("services", reveal_classes(props.revealed))}>
            <div class="container">
                <div class="section-header">
                    <h2>{"Our Services"}</h2>
                    <p>{"Comprehensive solutions for all your digital needs"}</p>
                </div>
                <div class="services-grid">
                    { for (0..SERVICES.len()).map(|index| html! { <ServiceCard {index} /> }) }
                </div>
            </div>
            <style>
                {r#"
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card {
                        padding: 2rem 1.5rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        opacity: 0;
                        transform: rotateY(90deg);
                        transition: transform 0.6s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.6s ease,
                                    box-shadow 0.3s ease, border-color 0.3s ease;
                    }
                    .revealed .service-card {
                        opacity: 1;
                        transform: rotateY(0deg);
                    }
                    .revealed .service-card.hovered {
                        transform: translateY(-10px) scale(1.03);
                        border-color: var(--accent);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35);
                    }
                    .service-icon {
                        width: 60px;
                        height: 60px;
                        border-radius: 14px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.6rem;
                        color: var(--accent);
                        background: rgba(255, 255, 255, 0.06);
                        margin-bottom: 1.2rem;
                        transition: transform 0.6s ease;
                    }
                    .service-card.hovered .service-icon {
                        transform: rotate(360deg) scale(1.1);
                    }
                    .service-card h3 {
                        margin-bottom: 0.6rem;
                    }
                    .service-card p {
                        color: #b8b8d1;
                        font-size: 0.95rem;
                        line-height: 1.6;
                    }
                    .service-features {
                        list-style: none;
                        padding: 0;
                        margin: 1rem 0 0;
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.4s ease;
                    }
                    .service-card.hovered .service-features {
                        max-height: 120px;
                    }
                    .service-features li {
                        font-size: 0.85rem;
                        color: #d0d0e8;
                        margin-bottom: 0.3rem;
                    }
                    .service-features i {
                        color: var(--accent);
                        margin-right: 0.5rem;
                    }
                "#}
            </style>
        </section>
    }
}
