use std::f64::consts::{FRAC_PI_2, TAU};

use yew::prelude::*;

use crate::content::TECH_STACK;
use crate::pages::landing::{reveal_classes, SectionProps};

const ORBIT_RADIUS: f64 = 170.0;

/// Offset from the orbit centre of node `index` out of `count`, evenly spaced and starting at 12 o'clock.
pub fn orbit_position(index: usize, count: usize, radius: f64) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let angle = TAU * index as f64 / count as f64 - FRAC_PI_2;
    (radius * angle.cos(), radius * angle.sin())
}

#[function_component(TechStack)]
pub fn tech_stack(props: &SectionProps) -> Html {
    let count = TECH_STACK.len();

    html! {
        <section id="stack" class={classes!("tech-stack", reveal_classes(props.revealed))}>
            <div class="container">
                <div class="section-header">
                    <h2>{"Our Technology Stack"}</h2>
                    <p>{"Modern tools for modern problems"}</p>
                </div>
                <div class="orbit">
                    <div class="orbit-center"><i class="fas fa-code"></i></div>
                    <div class="orbit-path"></div>
                    <div class="orbit-spinner">
                        { for TECH_STACK.iter().enumerate().map(|(i, tech)| {
                            let (x, y) = orbit_position(i, count, ORBIT_RADIUS);
                            let style = format!(
                                "transform: translate({:.1}px, {:.1}px); transition-delay: {}ms;",
                                x, y, i * 60
                            );
                            html! {
                                <div class="orbit-node" {style} title={tech.name}>
                                    <div class="orbit-node-inner">
                                        <i class={tech.icon}></i>
                                        <span>{tech.name}</span>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .orbit {
                        position: relative;
                        width: 440px;
                        height: 440px;
                        margin: 0 auto;
                    }
                    .orbit-center {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 100px;
                        height: 100px;
                        margin: -50px 0 0 -50px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                        background: linear-gradient(135deg, #6c63ff, #ff6584);
                        box-shadow: 0 0 40px rgba(108, 99, 255, 0.5);
                    }
                    .orbit-path {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 340px;
                        height: 340px;
                        margin: -170px 0 0 -170px;
                        border-radius: 50%;
                        border: 1px dashed rgba(255, 255, 255, 0.15);
                    }
                    .orbit-spinner {
                        position: absolute;
                        inset: 0;
                        animation: orbitSpin 40s linear infinite;
                    }
                    .orbit:hover .orbit-spinner,
                    .orbit:hover .orbit-node-inner {
                        animation-play-state: paused;
                    }
                    .orbit-node {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 70px;
                        height: 70px;
                        margin: -35px 0 0 -35px;
                        opacity: 0;
                        transition: opacity 0.6s ease;
                    }
                    .revealed .orbit-node {
                        opacity: 1;
                    }
                    .orbit-node-inner {
                        width: 100%;
                        height: 100%;
                        border-radius: 50%;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #1a1a2e;
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        font-size: 1.5rem;
                        animation: orbitSpin 40s linear infinite reverse;
                        transition: box-shadow 0.3s ease;
                    }
                    .orbit-node-inner span {
                        font-size: 0.6rem;
                        margin-top: 0.2rem;
                    }
                    .orbit-node-inner:hover {
                        box-shadow: 0 0 20px rgba(108, 99, 255, 0.7);
                    }
                    @keyframes orbitSpin {
                        to { transform: rotate(360deg); }
                    }
                    @media (max-width: 768px) {
                        .orbit {
                            transform: scale(0.7);
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_first_node_at_top() {
        assert!(close(orbit_position(0, 4, 100.0), (0.0, -100.0)));
    }

    #[test]
    fn test_quarter_turns() {
        assert!(close(orbit_position(1, 4, 100.0), (100.0, 0.0)));
        assert!(close(orbit_position(2, 4, 100.0), (0.0, 100.0)));
        assert!(close(orbit_position(3, 4, 100.0), (-100.0, 0.0)));
    }

    #[test]
    fn test_nodes_sit_on_radius() {
        for i in 0..TECH_STACK.len() {
            let (x, y) = orbit_position(i, TECH_STACK.len(), ORBIT_RADIUS);
            assert!(((x * x + y * y).sqrt() - ORBIT_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_orbit() {
        assert_eq!(orbit_position(0, 0, 100.0), (0.0, 0.0));
    }
}
