use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod controller {
    pub mod sections;
    pub mod view_state;
    pub mod scroll_tracker;
    pub mod load_sequencer;
    pub mod rotator;
    pub mod navigator;
    pub mod timers;
    pub mod view_controller;
}
mod forms {
    pub mod form_state;
    pub mod submit;
    pub mod use_form;
}
mod components {
    pub mod loading_screen;
    pub mod particles;
}
mod pages {
    pub mod landing;
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod process;
    pub mod tech_stack;
    pub mod portfolio;
    pub mod testimonials;
    pub mod contact;
    pub mod footer;
    pub mod not_found;
}

use components::loading_screen::LoadingScreen;
use content::COMPANY;
use controller::load_sequencer::use_load_sequencer;
use controller::sections::SECTIONS;
use pages::{landing::Landing, not_found::NotFound};



#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active_section: &'static str,
    pub menu_open: bool,
    pub scrolled: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active_section, menu_open, scrolled, on_navigate, on_toggle_menu } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let to_home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit("home");
        })
    };

    let menu_class = if *menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="logo nav-logo" onclick={to_home}>
                    <i class="fas fa-code"></i>
                    <span>{COMPANY}</span>
                </a>

                <ul class={menu_class}>
                    { for SECTIONS.iter().enumerate().map(|(i, section)| {
                        let key = section.key;
                        let onclick = {
                            let on_navigate = on_navigate.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_navigate.emit(key);
                            })
                        };
                        html! {
                            <li class="nav-item" style={format!("animation-delay: {}ms;", i * 100)}>
                                <a
                                    href={format!("#{}", key)}
                                    class={classes!("nav-link", (*active_section == key).then(|| "active"))}
                                    {onclick}
                                >
                                    {section.label}
                                </a>
                            </li>
                        }
                    })}
                </ul>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <i class={classes!("fas", if *menu_open { "fa-times" } else { "fa-bars" })}></i>
                </button>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 80px;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        transition: background 0.3s ease, box-shadow 0.3s ease, height 0.3s ease;
                        animation: dropIn 0.6s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .top-nav.scrolled {
                        height: 64px;
                        background: rgba(15, 15, 26, 0.92);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        text-decoration: none;
                        transition: transform 0.2s ease;
                    }
                    .nav-logo:hover {
                        transform: scale(1.1);
                    }
                    .nav-menu {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-item {
                        opacity: 0;
                        animation: riseIn 0.4s ease-out forwards;
                    }
                    .nav-link {
                        color: #b8b8d1;
                        text-decoration: none;
                        position: relative;
                        transition: color 0.2s ease;
                    }
                    .nav-link::after {
                        content: "";
                        position: absolute;
                        left: 0;
                        bottom: -6px;
                        width: 0;
                        height: 2px;
                        background: #6c63ff;
                        transition: width 0.3s ease;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: #fff;
                    }
                    .nav-link.active::after {
                        width: 100%;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .burger-menu i {
                        transition: transform 0.3s ease;
                    }
                    .burger-menu .fa-times {
                        transform: rotate(180deg);
                    }
                    @keyframes dropIn {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    @media (max-width: 900px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-menu {
                            position: fixed;
                            top: 64px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: center;
                            padding: 2rem 0;
                            background: rgba(15, 15, 26, 0.97);
                            transform: translateY(-150%);
                            transition: transform 0.3s ease;
                        }
                        .nav-menu.mobile-menu-open {
                            transform: translateY(0);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    // Nothing else mounts, and so no other timer or listener starts, until loading is done.
    let phase = use_load_sequencer(config::LOAD_DURATION_MS);

    if phase.is_loading() {
        return html! { <LoadingScreen /> };
    }

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
