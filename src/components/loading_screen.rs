use yew::prelude::*;

use crate::config;
use crate::content::COMPANY_FULL;

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    // Progress bar runs for exactly as long as the load timer.
    let bar_style = format!("animation-duration: {}ms;", config::LOAD_DURATION_MS);

    html! {
        <div class="loading-screen">
            <div class="loading-logo">
                <i class="fas fa-code"></i>
            </div>
            <h2>{COMPANY_FULL}</h2>
            <div class="loading-bar" style={bar_style}></div>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: #0f0f1a;
                        color: #fff;
                        animation: fadeIn 0.4s ease-out;
                    }
                    .loading-logo {
                        font-size: 4rem;
                        color: #6c63ff;
                        animation: popIn 0.6s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .loading-logo i {
                        animation: spin 2s linear infinite;
                    }
                    .loading-screen h2 {
                        font-size: 1.8rem;
                        opacity: 0;
                        animation: riseIn 0.6s ease-out 0.5s forwards;
                    }
                    .loading-bar {
                        height: 4px;
                        width: 0;
                        max-width: 300px;
                        border-radius: 2px;
                        background: linear-gradient(90deg, #6c63ff, #ff6584);
                        animation-name: fillBar;
                        animation-timing-function: ease-in-out;
                        animation-fill-mode: forwards;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes popIn {
                        from { transform: scale(0); }
                        to { transform: scale(1); }
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    @keyframes riseIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes fillBar {
                        from { width: 0; }
                        to { width: 300px; }
                    }
                "#}
            </style>
        </div>
    }
}
