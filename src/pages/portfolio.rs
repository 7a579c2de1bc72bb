use yew::prelude::*;

use crate::content::PROJECTS;
use crate::pages::landing::{reveal_classes, SectionProps};

#[function_component(Portfolio)]
pub fn portfolio(props: &SectionProps) -> Html {
    html! {
        <section id="portfolio" class={classes!("portfolio", reveal_classes(props.revealed))}>
            <div class="container">
                <div class="section-header">
                    <h2>{"Our Portfolio"}</h2>
                    <p>{"Some of our recent work"}</p>
                </div>
                <div class="portfolio-grid">
                    { for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                        <div class="portfolio-item" style={format!("transition-delay: {}ms;", i * 120)}>
                            <div class={classes!("portfolio-image", project.image)}>
                                <div class="portfolio-overlay">
                                    <button class="btn btn-primary">{"View Project"}</button>
                                </div>
                            </div>
                            <div class="portfolio-content">
                                <span class="project-category">{project.category}</span>
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                            </div>
                        </div>
                    })}
                </div>
            </div>
            <style>
                {r#"
                    .portfolio-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .portfolio-item {
                        border-radius: 16px;
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.04);
                        opacity: 0;
                        transform: scale(0.5);
                        transition: transform 0.6s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.6s ease;
                    }
                    .revealed .portfolio-item {
                        opacity: 1;
                        transform: scale(1);
                    }
                    .revealed .portfolio-item:hover {
                        transform: translateY(-8px);
                    }
                    .portfolio-image {
                        position: relative;
                        height: 200px;
                        background: linear-gradient(135deg, #6c63ff, #4facfe);
                    }
                    .portfolio-image.project2 { background: linear-gradient(135deg, #9C27B0, #ff6584); }
                    .portfolio-image.project3 { background: linear-gradient(135deg, #4CAF50, #00f2fe); }
                    .portfolio-image.project4 { background: linear-gradient(135deg, #FF9800, #f5576c); }
                    .portfolio-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(15, 15, 26, 0.7);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .portfolio-item:hover .portfolio-overlay {
                        opacity: 1;
                    }
                    .portfolio-overlay .btn {
                        transform: translateY(20px);
                        transition: transform 0.3s ease;
                    }
                    .portfolio-item:hover .portfolio-overlay .btn {
                        transform: translateY(0);
                    }
                    .portfolio-content {
                        padding: 1.5rem;
                    }
                    .project-category {
                        font-size: 0.8rem;
                        color: #6c63ff;
                        text-transform: uppercase;
                        letter-spacing: 1px;
                    }
                    .portfolio-content p {
                        color: #b8b8d1;
                    }
                "#}
            </style>
        </section>
    }
}
