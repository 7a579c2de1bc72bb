use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page drifted out of orbit."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0f0f1a;
                    }
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .not-found h1 {
                        font-size: 6rem;
                        margin: 0;
                        background: linear-gradient(135deg, #6c63ff, #ff6584);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .not-found p {
                        color: #b8b8d1;
                        margin-bottom: 2rem;
                    }
                    .not-found .btn {
                        padding: 0.9rem 2rem;
                        border-radius: 50px;
                        background: #6c63ff;
                        color: #fff;
                        text-decoration: none;
                        font-weight: 600;
                    }
                "#}
            </style>
        </div>
    }
}
