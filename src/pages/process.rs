use yew::prelude::*;

use crate::config;
use crate::content::PROCESS_STEPS;
use crate::controller::rotator::{use_rotator, RotatorAction};
use crate::pages::landing::{reveal_classes, SectionProps};

/// Width of the progress track up to and including `active`, as a percentage.
pub fn progress_percent(active: usize, steps: usize) -> f64 {
    if steps <= 1 {
        return 100.0;
    }
    (active.min(steps - 1) as f64 / (steps - 1) as f64) * 100.0
}

#[function_component(Process)]
pub fn process(props: &SectionProps) -> Html {
    let steps = use_rotator(PROCESS_STEPS.len(), config::ROTATE_INTERVAL_MS);
    let active = steps.index();
    let step = &PROCESS_STEPS[active];

    html! {
        <section id="process" class={classes!("process", reveal_classes(props.revealed))}>
            <div class="container">
                <div class="section-header">
                    <h2>{"How We Work"}</h2>
                    <p>{"A proven process from first call to launch day"}</p>
                </div>
                <div class="process-track">
                    <div class="process-progress" style={format!("width: calc((100% - 60px) * {:.3});", progress_percent(active, steps.len()) / 100.0)}></div>
                    { for PROCESS_STEPS.iter().enumerate().map(|(i, s)| {
                        let onclick = {
                            let steps = steps.clone();
                            Callback::from(move |_: MouseEvent| steps.dispatch(RotatorAction::Select(i)))
                        };
                        html! {
                            <button
                                class={classes!("process-step", (i == active).then(|| "active"), (i < active).then(|| "done"))}
                                {onclick}
                            >
                                <span class="step-icon"><i class={s.icon}></i></span>
                                <span class="step-title">{s.title}</span>
                            </button>
                        }
                    })}
                </div>
                <div class="process-detail-frame">
                    <div key={active.to_string()} class="process-detail">
                        <span class="step-number">{format!("{:02}", active + 1)}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .process-track {
                        position: relative;
                        display: flex;
                        justify-content: space-between;
                        margin: 0 auto 3rem;
                        max-width: 900px;
                    }
                    .process-track::before,
                    .process-progress {
                        content: "";
                        position: absolute;
                        top: 30px;
                        left: 30px;
                        right: 30px;
                        height: 3px;
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .process-progress {
                        right: auto;
                        background: linear-gradient(90deg, #6c63ff, #ff6584);
                        transition: width 0.6s ease;
                        z-index: 1;
                    }
                    .process-step {
                        position: relative;
                        z-index: 2;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.6rem;
                        background: none;
                        border: none;
                        color: #b8b8d1;
                        cursor: pointer;
                        font: inherit;
                    }
                    .step-icon {
                        width: 60px;
                        height: 60px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                        background: #1a1a2e;
                        border: 2px solid rgba(255, 255, 255, 0.15);
                        transition: transform 0.3s ease, background 0.3s ease, border-color 0.3s ease;
                    }
                    .process-step:hover .step-icon {
                        transform: scale(1.1);
                    }
                    .process-step.done .step-icon {
                        border-color: #6c63ff;
                    }
                    .process-step.active {
                        color: #fff;
                    }
                    .process-step.active .step-icon {
                        background: linear-gradient(135deg, #6c63ff, #ff6584);
                        border-color: transparent;
                        animation: heartBeat 1.3s ease-in-out infinite alternate;
                    }
                    .process-detail {
                        max-width: 640px;
                        margin: 0 auto;
                        text-align: center;
                        animation: flipIn 0.6s ease-out;
                    }
                    .step-number {
                        font-size: 3rem;
                        font-weight: 800;
                        color: rgba(108, 99, 255, 0.35);
                    }
                    .process-detail p {
                        color: #b8b8d1;
                        line-height: 1.7;
                    }
                    @keyframes heartBeat {
                        from { transform: scale(1); }
                        to { transform: scale(1.15); }
                    }
                    @keyframes flipIn {
                        from { transform: perspective(600px) rotateX(90deg); opacity: 0; }
                        to { transform: perspective(600px) rotateX(0deg); opacity: 1; }
                    }
                    @media (max-width: 768px) {
                        .step-title {
                            display: none;
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

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress_percent(0, 5), 0.0);
        assert_eq!(progress_percent(2, 5), 50.0);
        assert_eq!(progress_percent(4, 5), 100.0);
    }

    #[test]
    fn test_progress_degenerate_tracks() {
        assert_eq!(progress_percent(0, 1), 100.0);
        assert_eq!(progress_percent(9, 5), 100.0);
    }
}
