use yew::prelude::*;

use crate::components::particles::ParticleBackground;
use crate::controller::view_controller::use_view_controller;
use crate::pages::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    portfolio::Portfolio,
    process::Process,
    services::Services,
    tech_stack::TechStack,
    testimonials::Testimonials,
};
use crate::Nav;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub revealed: bool,
}

/// Sections start hidden and play their entrance once scrolled into view.
pub fn reveal_classes(revealed: bool) -> Classes {
    classes!("section", "reveal", revealed.then(|| "revealed"))
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let view = use_view_controller();
    let state = &view.state;

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <ParticleBackground />
            <Nav
                active_section={state.active_section()}
                menu_open={state.is_menu_open()}
                scrolled={state.is_scrolled()}
                on_navigate={view.navigate.clone()}
                on_toggle_menu={view.toggle_menu.clone()}
            />
            <Hero on_navigate={view.navigate.clone()} />
            <About revealed={state.is_revealed("about")} />
            <Services revealed={state.is_revealed("services")} />
            <Process revealed={state.is_revealed("process")} />
            <TechStack revealed={state.is_revealed("stack")} />
            <Portfolio revealed={state.is_revealed("portfolio")} />
            <Testimonials revealed={state.is_revealed("testimonials")} />
            <Contact revealed={state.is_revealed("contact")} />
            <Footer />
            <style>
                {r#"
                    * {
                        box-sizing: border-box;
                    }
                    body {
                        margin: 0;
                        background: #0f0f1a;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        overflow-x: hidden;
                    }
                    .landing-page {
                        animation: fadeIn 0.8s ease-out;
                    }
                    .section {
                        padding: 6rem 2rem;
                        position: relative;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                        opacity: 0;
                        transform: translateY(50px);
                        transition: transform 0.8s ease, opacity 0.8s ease;
                    }
                    .revealed .section-header {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .section-header h2 {
                        font-size: 2.6rem;
                        margin-bottom: 0.8rem;
                    }
                    .section-header p {
                        color: #b8b8d1;
                        font-size: 1.1rem;
                    }
                    .btn {
                        padding: 0.9rem 2rem;
                        border: none;
                        border-radius: 50px;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        color: #fff;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .btn:hover {
                        transform: scale(1.05);
                    }
                    .btn:active {
                        transform: scale(0.95);
                    }
                    .btn-primary {
                        background: #6c63ff;
                    }
                    .btn-primary:hover {
                        box-shadow: 0 10px 25px rgba(108, 99, 255, 0.3);
                    }
                    .btn-secondary {
                        background: transparent;
                        border: 2px solid #ff6584;
                    }
                    .btn-secondary:hover {
                        box-shadow: 0 10px 25px rgba(255, 101, 132, 0.3);
                    }
                    .logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .logo i {
                        color: #6c63ff;
                        animation: wiggle 7s ease-in-out infinite;
                    }
                    @keyframes wiggle {
                        0%, 71% { transform: rotate(0deg); }
                        78% { transform: rotate(10deg); }
                        85% { transform: rotate(-10deg); }
                        92%, 100% { transform: rotate(0deg); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes riseIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes shimmer {
                        from { background-position: 0% 0%; }
                        to { background-position: 100% 100%; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_classes() {
        let hidden = reveal_classes(false);
        assert!(hidden.contains("section"));
        assert!(hidden.contains("reveal"));
        assert!(!hidden.contains("revealed"));
        assert!(reveal_classes(true).contains("revealed"));
    }
}
