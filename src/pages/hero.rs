use yew::prelude::*;

use crate::config;
use crate::content::HERO_TAGLINES;
use crate::controller::rotator::use_rotator;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<&'static str>,
}

const CODE_SNIPPET: &str = "// Building the future
function createSolution() {
  return innovation + creativity;
}

const yourSuccess = await createSolution();";

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let tagline = use_rotator(HERO_TAGLINES.len(), config::ROTATE_INTERVAL_MS);
    let current = HERO_TAGLINES[tagline.index()];

    let to_services = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("services"))
    };
    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("contact"))
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <div class="hero-text">
                    <h1 class="hero-title">
                        {"Transform Your "}<span class="highlight">{"Digital Vision"}</span>
                    </h1>
                    <div class="animated-text">
                        <span>{"We Specialize in "}</span>
                        <span class="rotating-slot">
                            // keyed so the enter animation replays on every change
                            <span key={current} class="rotating-text">{current}</span>
                        </span>
                    </div>
                    <p class="hero-description">
                        {"We are a full-service software house providing cutting-edge solutions \
                          from web development to AI agents and everything in between."}
                    </p>
                    <div class="hero-buttons">
                        <button class="btn btn-primary" onclick={to_services}>{"Our Services"}</button>
                        <button class="btn btn-secondary" onclick={to_contact}>{"Get Started"}</button>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="floating-card card-1"><i class="fas fa-code"></i></div>
                    <div class="floating-card card-2"><i class="fas fa-robot"></i></div>
                    <div class="floating-card card-3"><i class="fas fa-mobile-alt"></i></div>
                    <div class="code-window">
                        <div class="window-header">
                            <div class="window-dots">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </div>
                        <pre class="code-content"><code>{CODE_SNIPPET}</code></pre>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator">
                <span>{"Scroll Down"}</span>
                <div class="arrow"></div>
            </div>
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        position: relative;
                        padding: 120px 2rem 4rem;
                    }
                    .hero-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .hero-text > * {
                        opacity: 0;
                        animation: riseIn 0.7s cubic-bezier(0.34, 1.56, 0.64, 1) forwards;
                    }
                    .hero-text > *:nth-child(2) { animation-delay: 0.1s; }
                    .hero-text > *:nth-child(3) { animation-delay: 0.2s; }
                    .hero-text > *:nth-child(4) { animation-delay: 0.3s; }
                    .hero-title {
                        font-size: 3.5rem;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .highlight {
                        background: linear-gradient(90deg, #6c63ff, #ff6584);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .animated-text {
                        font-size: 1.6rem;
                        margin-bottom: 1.5rem;
                        height: 2.2rem;
                        overflow: hidden;
                    }
                    .rotating-text {
                        display: inline-block;
                        color: #6c63ff;
                        font-weight: 600;
                        animation: riseIn 0.5s ease-out;
                    }
                    .hero-description {
                        color: #b8b8d1;
                        font-size: 1.1rem;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }
                    .hero-buttons {
                        display: flex;
                        gap: 1rem;
                    }
                    .hero-visual {
                        position: relative;
                        height: 420px;
                        animation: slideFromRight 1s ease-out 0.5s both;
                    }
                    .floating-card {
                        position: absolute;
                        width: 70px;
                        height: 70px;
                        border-radius: 16px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.8rem;
                        background: rgba(255, 255, 255, 0.06);
                        backdrop-filter: blur(10px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        z-index: 2;
                    }
                    .card-1 { top: 0; left: 10%; color: #6c63ff; animation: floatA 4s ease-in-out infinite; }
                    .card-2 { top: 40%; right: 0; color: #ff6584; animation: floatB 3s ease-in-out 1s infinite; }
                    .card-3 { bottom: 0; left: 0; color: #4CAF50; animation: floatC 5s ease-in-out 2s infinite; }
                    @keyframes floatA {
                        50% { transform: translateY(-20px) rotate(5deg); }
                    }
                    @keyframes floatB {
                        50% { transform: translateY(15px) rotate(-3deg); }
                    }
                    @keyframes floatC {
                        50% { transform: translateY(-25px) rotate(8deg); }
                    }
                    .code-window {
                        position: absolute;
                        inset: 15% 10%;
                        border-radius: 12px;
                        background: #1a1a2e;
                        box-shadow: 0 30px 60px rgba(0, 0, 0, 0.4);
                        overflow: hidden;
                        animation: floatA 3s ease-in-out infinite;
                    }
                    .window-header {
                        padding: 0.8rem;
                        background: #16162a;
                    }
                    .window-dots span {
                        display: inline-block;
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        margin-right: 6px;
                        background: #ff5f56;
                    }
                    .window-dots span:nth-child(2) { background: #ffbd2e; }
                    .window-dots span:nth-child(3) { background: #27c93f; }
                    .code-content {
                        padding: 1.2rem;
                        margin: 0;
                        font-size: 0.9rem;
                        line-height: 1.6;
                        background: linear-gradient(135deg, #6c63ff, #ff6584, #4facfe);
                        background-size: 200% 200%;
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: shimmer 5s ease infinite alternate;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        color: #b8b8d1;
                        font-size: 0.85rem;
                        animation: bob 2s ease-in-out infinite;
                    }
                    .scroll-indicator .arrow {
                        width: 14px;
                        height: 14px;
                        margin-top: 0.5rem;
                        border-right: 2px solid currentColor;
                        border-bottom: 2px solid currentColor;
                        transform: rotate(45deg);
                    }
                    @keyframes bob {
                        50% { transform: translate(-50%, 10px); }
                    }
                    @keyframes slideFromRight {
                        from { opacity: 0; transform: translateX(100px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @media (max-width: 768px) {
                        .hero-content {
                            grid-template-columns: 1fr;
                        }
                        .hero-title {
                            font-size: 2.4rem;
                        }
                        .hero-visual {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
