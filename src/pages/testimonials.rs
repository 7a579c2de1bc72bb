use yew::prelude::*;

use crate::content::TESTIMONIALS;
use crate::pages::landing::{reveal_classes, SectionProps};

#[function_component(Testimonials)]
pub fn testimonials(props: &SectionProps) -> Html {
    html! {
        <section id="testimonials" class={classes!("testimonials", reveal_classes(props.revealed))}>
            <div class="container">
                <div class="section-header">
                    <h2>{"What Our Clients Say"}</h2>
                    <p>{"Don't just take our word for it"}</p>
                </div>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <div class="testimonial-card" style={format!("transition-delay: {}ms;", i * 150)}>
                            <div class="quote-icon"><i class="fas fa-quote-left"></i></div>
                            <p>{format!("\"{}\"", t.content)}</p>
                            <div class="testimonial-author">
                                <div class="avatar">{t.avatar}</div>
                                <div>
                                    <h4>{t.name}</h4>
                                    <span>{t.role}</span>
                                </div>
                            </div>
                        </div>
                    })}
                </div>
            </div>
            <style>
                {r#"
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .testimonial-card {
                        padding: 2rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        opacity: 0;
                        transform: translateY(60px);
                        transition: transform 0.6s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.6s ease;
                    }
                    .revealed .testimonial-card {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .revealed .testimonial-card:hover {
                        transform: translateY(-10px) scale(1.02);
                    }
                    .quote-icon {
                        font-size: 1.8rem;
                        color: #6c63ff;
                        margin-bottom: 1rem;
                    }
                    .testimonial-card p {
                        color: #d0d0e8;
                        font-style: italic;
                        line-height: 1.7;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .avatar {
                        width: 50px;
                        height: 50px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        background: linear-gradient(135deg, #6c63ff, #ff6584);
                    }
                    .testimonial-author h4 {
                        margin: 0;
                    }
                    .testimonial-author span {
                        color: #b8b8d1;
                        font-size: 0.85rem;
                    }
                "#}
            </style>
        </section>
    }
}
