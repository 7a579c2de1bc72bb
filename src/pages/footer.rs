use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{COMPANY, COMPANY_FULL, FOOTER_COLUMNS, SOCIAL_PLATFORMS};
use crate::forms::form_state::NEWSLETTER_FORM;
use crate::forms::use_form::{use_form, FormStatus};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, COMPANY_FULL)
}

#[function_component(Newsletter)]
fn newsletter() -> Html {
    let form = use_form(&NEWSLETTER_FORM);

    html! {
        <form class="newsletter" onsubmit={form.on_submit()}>
            <h4>{"Newsletter"}</h4>
            <div class="newsletter-row">
                <input
                    type="email"
                    name="email"
                    placeholder="you@company.com"
                    value={form.value("email")}
                    oninput={form.on_input("email")}
                    required={true}
                />
                <button type="submit" class="btn btn-primary">{"Subscribe"}</button>
            </div>
            {
                match &*form.status {
                    FormStatus::Sent => html! { <p class="newsletter-note">{"You're on the list."}</p> },
                    FormStatus::Rejected(err) => html! { <p class="newsletter-note error">{err.to_string()}</p> },
                    FormStatus::Editing => html! {},
                }
            }
        </form>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-section">
                        <div class="logo">
                            <i class="fas fa-code"></i>
                            <span>{COMPANY}</span>
                        </div>
                        <p>
                            {"Transforming ideas into digital reality through innovative \
                              software solutions and cutting-edge technology."}
                        </p>
                        <div class="social-links">
                            { for SOCIAL_PLATFORMS.iter().map(|platform| html! {
                                <a href="#" class="social-link" aria-label={*platform}>
                                    <i class={format!("fab fa-{}", platform)}></i>
                                </a>
                            })}
                        </div>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                        <div class="footer-section">
                            <h4>{*heading}</h4>
                            <ul>
                                { for links.iter().map(|link| html! {
                                    <li><a href="#">{*link}</a></li>
                                })}
                            </ul>
                        </div>
                    })}
                    <div class="footer-section">
                        <Newsletter />
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                </div>
            </div>
            <style>
                {r#"
                    .footer {
                        padding: 4rem 2rem 2rem;
                        background: rgba(10, 10, 20, 0.85);
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                    }
                    .footer-content {
                        display: grid;
                        grid-template-columns: 2fr repeat(3, 1fr) 2fr;
                        gap: 2rem;
                    }
                    .footer-section p {
                        color: #b8b8d1;
                        line-height: 1.7;
                    }
                    .footer-section ul {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-section li {
                        margin-bottom: 0.5rem;
                        transition: transform 0.2s ease;
                    }
                    .footer-section li:hover {
                        transform: translateX(10px);
                    }
                    .footer-section a {
                        color: #b8b8d1;
                        text-decoration: none;
                    }
                    .footer-section a:hover {
                        color: #6c63ff;
                    }
                    .social-links {
                        display: flex;
                        gap: 0.8rem;
                    }
                    .social-link {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 255, 255, 0.06);
                        transition: transform 0.2s ease;
                    }
                    .social-link:hover {
                        transform: translateY(-5px) scale(1.2);
                    }
                    .social-link:active {
                        transform: scale(0.9);
                    }
                    .newsletter-row {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .newsletter input {
                        flex: 1;
                        min-width: 0;
                        padding: 0.7rem 0.9rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                    }
                    .newsletter-note {
                        font-size: 0.85rem;
                        color: #7ed37f;
                    }
                    .newsletter-note.error {
                        color: #ff8fa5;
                    }
                    .footer-bottom {
                        margin-top: 3rem;
                        padding-top: 1.5rem;
                        text-align: center;
                        border-top: 1px solid rgba(255, 255, 255, 0.06);
                        color: #8080a0;
                        font-size: 0.85rem;
                    }
                    @media (max-width: 900px) {
                        .footer-content {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 TechNova Solutions. All rights reserved."
        );
    }
}
