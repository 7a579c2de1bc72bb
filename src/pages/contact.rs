use yew::prelude::*;

use crate::content::{CONTACT_DETAILS, SERVICE_OPTIONS};
use crate::forms::form_state::CONTACT_FORM;
use crate::forms::use_form::{use_form, FormStatus};
use crate::pages::landing::{reveal_classes, SectionProps};

#[function_component(Contact)]
pub fn contact(props: &SectionProps) -> Html {
    let form = use_form(&CONTACT_FORM);

    html! {
        <section id="contact" class={classes!("contact", reveal_classes(props.revealed))}>
            <div class="container">
                <div class="section-header">
                    <h2>{"Get In Touch"}</h2>
                    <p>{"Ready to start your project? Contact us today"}</p>
                </div>
                <div class="contact-content">
                    <div class="contact-info">
                        { for CONTACT_DETAILS.iter().map(|(icon, heading, value)| html! {
                            <div class="contact-item">
                                <div class="contact-icon"><i class={*icon}></i></div>
                                <div>
                                    <h4>{*heading}</h4>
                                    <p>{*value}</p>
                                </div>
                            </div>
                        })}
                    </div>

                    <form class="contact-form" onsubmit={form.on_submit()}>
                        <div class="form-group">
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                value={form.value("name")}
                                oninput={form.on_input("name")}
                                required={true}
                            />
                        </div>
                        <div class="form-group">
                            <input
                                type="email"
                                name="email"
                                placeholder="Your Email"
                                value={form.value("email")}
                                oninput={form.on_input("email")}
                                required={true}
                            />
                        </div>
                        <div class="form-group">
                            <select
                                name="service"
                                oninput={form.on_input("service")}
                                required={true}
                            >
                                <option value="" selected={form.value("service").is_empty()}>{"Select a Service"}</option>
                                { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                                    <option value={*value} selected={form.value("service") == *value}>{*label}</option>
                                })}
                            </select>
                        </div>
                        <div class="form-group">
                            <textarea
                                name="message"
                                placeholder="Your Message"
                                rows="5"
                                value={form.value("message")}
                                oninput={form.on_input("message")}
                                required={true}
                            ></textarea>
                        </div>
                        <button type="submit" class="btn btn-primary">{"Send Message"}</button>
                        {
                            match &*form.status {
                                FormStatus::Sent => html! {
                                    <div class="form-message success">{"Thanks! We'll get back to you within one business day."}</div>
                                },
                                FormStatus::Rejected(err) => html! {
                                    <div class="form-message error">{err.to_string()}</div>
                                },
                                FormStatus::Editing => html! {},
                            }
                        }
                    </form>
                </div>
            </div>
            <style>
                {r#"
                    .contact-content {
                        display: grid;
                        grid-template-columns: 1fr 1.4fr;
                        gap: 3rem;
                    }
                    .contact-info,
                    .contact-form {
                        opacity: 0;
                        transition: transform 0.8s ease, opacity 0.8s ease;
                    }
                    .contact-info { transform: translateX(-100px); }
                    .contact-form { transform: translateX(100px); }
                    .revealed .contact-info,
                    .revealed .contact-form {
                        opacity: 1;
                        transform: translateX(0);
                    }
                    .contact-item {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-icon {
                        width: 50px;
                        height: 50px;
                        border-radius: 12px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.2rem;
                        color: #6c63ff;
                        background: rgba(108, 99, 255, 0.12);
                        transition: transform 0.3s ease;
                    }
                    .contact-item:hover .contact-icon {
                        transform: rotate(15deg) scale(1.1);
                    }
                    .contact-item h4 {
                        margin: 0;
                    }
                    .contact-item p {
                        margin: 0.2rem 0 0;
                        color: #b8b8d1;
                    }
                    .form-group {
                        margin-bottom: 1rem;
                        transition: transform 0.2s ease;
                    }
                    .form-group:focus-within {
                        transform: scale(1.02);
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.9rem 1rem;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        font: inherit;
                    }
                    .contact-form select option {
                        color: #000;
                    }
                    .contact-form input:focus,
                    .contact-form select:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #6c63ff;
                    }
                    .form-message {
                        margin-top: 1rem;
                        padding: 0.8rem 1rem;
                        border-radius: 8px;
                        animation: riseIn 0.4s ease-out;
                    }
                    .form-message.success {
                        background: rgba(76, 175, 80, 0.15);
                        color: #7ed37f;
                    }
                    .form-message.error {
                        background: rgba(255, 101, 132, 0.15);
                        color: #ff8fa5;
                    }
                    @media (max-width: 768px) {
                        .contact-content {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
