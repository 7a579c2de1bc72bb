use yew::prelude::*;

use crate::content::{COMPANY, STATS};
use crate::pages::landing::{reveal_classes, SectionProps};

#[function_component(About)]
pub fn about(props: &SectionProps) -> Html {
    html! {
        <section id="about" class={classes!("about", reveal_classes(props.revealed))}>
            <div class="container">
                <div class="section-header">
                    <h2>{format!("About {}", COMPANY)}</h2>
                    <p>{"We transform ideas into powerful digital solutions"}</p>
                </div>
                <div class="about-content">
                    <div class="about-text">
                        <h3>{"Innovation Meets Excellence"}</h3>
                        <p>
                            {format!("At {}, we combine technical expertise with creative thinking to deliver \
                                      solutions that drive real business results. Our team of experienced developers, \
                                      designers and strategists works closely with you from idea to launch.", COMPANY)}
                        </p>
                        <p>
                            {"We believe in building long-term partnerships with our clients, providing \
                              ongoing support and evolving your product as your business grows."}
                        </p>
                        <div class="stats">
                            { for STATS.iter().enumerate().map(|(i, stat)| html! {
                                <div class="stat" style={format!("transition-delay: {}ms;", i * 100)}>
                                    <div class="stat-icon"><i class={stat.icon}></i></div>
                                    <h3>{stat.number}</h3>
                                    <p>{stat.label}</p>
                                </div>
                            })}
                        </div>
                    </div>
                    <div class="about-visual">
                        <div class="orbit-ring ring-1"></div>
                        <div class="orbit-ring ring-2"></div>
                        <div class="orbit-ring ring-3"></div>
                        <div class="about-core"><i class="fas fa-lightbulb"></i></div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .about-content {
                        display: grid;
                        grid-template-columns: 1.2fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-text h3 {
                        font-size: 1.8rem;
                        margin-bottom: 1rem;
                    }
                    .about-text p {
                        color: #b8b8d1;
                        line-height: 1.8;
                        margin-bottom: 1rem;
                    }
                    .stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .stat {
                        text-align: center;
                        padding: 1.2rem 0.5rem;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.04);
                        transform: scale(0.8);
                        opacity: 0;
                        transition: transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.5s ease;
                    }
                    .revealed .stat {
                        transform: scale(1);
                        opacity: 1;
                    }
                    .stat:hover {
                        transform: translateY(-6px) scale(1.05);
                    }
                    .stat-icon {
                        font-size: 1.5rem;
                        color: #6c63ff;
                        margin-bottom: 0.5rem;
                    }
                    .stat h3 {
                        font-size: 1.6rem;
                        margin: 0;
                    }
                    .stat p {
                        margin: 0;
                        font-size: 0.85rem;
                    }
                    .about-visual {
                        position: relative;
                        height: 360px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        perspective: 800px;
                    }
                    .orbit-ring {
                        position: absolute;
                        border-radius: 50%;
                        border: 2px solid rgba(108, 99, 255, 0.35);
                    }
                    .ring-1 { width: 320px; height: 320px; animation: rotate3d 20s linear infinite; }
                    .ring-2 { width: 240px; height: 240px; border-color: rgba(255, 101, 132, 0.35); animation: rotate3d 15s linear infinite reverse; }
                    .ring-3 { width: 160px; height: 160px; border-color: rgba(79, 172, 254, 0.35); animation: rotate3d 10s linear infinite; }
                    .about-core {
                        width: 90px;
                        height: 90px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.2rem;
                        background: linear-gradient(135deg, #6c63ff, #ff6584);
                        animation: pulse 2s ease-in-out infinite alternate;
                    }
                    @keyframes rotate3d {
                        from { transform: rotateX(60deg) rotateZ(0deg); }
                        to { transform: rotateX(60deg) rotateZ(360deg); }
                    }
                    @keyframes pulse {
                        from { transform: scale(1); }
                        to { transform: scale(1.08); }
                    }
                    @media (max-width: 768px) {
                        .about-content {
                            grid-template-columns: 1fr;
                        }
                        .stats {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .about-visual {
                            height: 260px;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
