use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub duration: f64,
    pub delay: f64,
    pub hue: f64,
    pub drift: f64,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {x:.2}%; top: {y:.2}%; \
             background: hsl({hue:.0}, 70%, 60%); animation-duration: {duration:.1}s; \
             animation-delay: {delay:.1}s; --drift: {drift:.1}px;",
            size = self.size,
            x = self.x,
            y = self.y,
            hue = self.hue,
            duration = self.duration,
            delay = self.delay,
            drift = self.drift,
        )
    }
}

/// `rand` must yield values in `[0, 1)`.
pub fn generate_particles(count: usize, mut rand: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size: rand() * 6.0 + 2.0,
            x: rand() * 100.0,
            y: rand() * 100.0,
            duration: rand() * 25.0 + 15.0,
            delay: rand() * 5.0,
            hue: rand() * 360.0,
            drift: rand() * 50.0 - 25.0,
        })
        .collect()
}

#[function_component(ParticleBackground)]
pub fn particle_background() -> Html {
    // Rolled once per mount so re-renders don't reshuffle the field.
    let particles = use_state(|| generate_particles(config::PARTICLE_COUNT, Math::random));

    html! {
        <div class="particle-background" aria-hidden="true">
            { for particles.iter().map(|particle| html! {
                <div class="particle" style={particle.style()}></div>
            })}
            <div class="animated-gradient"></div>
            <style>
                {r#"
                    .particle-background {
                        position: fixed;
                        inset: 0;
                        z-index: -1;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .particle {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0;
                        animation-name: particleFloat;
                        animation-iteration-count: infinite;
                        animation-timing-function: linear;
                    }
                    @keyframes particleFloat {
                        0% { transform: translate(0, 0) rotate(0deg); opacity: 0; }
                        50% { transform: translate(var(--drift), -150px) rotate(180deg); opacity: 0.8; }
                        100% { transform: translate(0, 0) rotate(360deg); opacity: 0; }
                    }
                    .animated-gradient {
                        position: absolute;
                        inset: 0;
                        opacity: 0.12;
                        background: linear-gradient(45deg, #667eea, #764ba2, #f093fb, #f5576c, #4facfe, #00f2fe);
                        background-size: 400% 400%;
                        animation: gradientShift 15s linear infinite;
                    }
                    @keyframes gradientShift {
                        0% { background-position: 0% 50%; }
                        50% { background-position: 100% 50%; }
                        100% { background-position: 0% 50%; }
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
    fn test_particle_ranges() {
        for fixed in [0.0, 0.5, 0.999] {
            for particle in generate_particles(5, || fixed) {
                assert!((2.0..8.0).contains(&particle.size));
                assert!((0.0..100.0).contains(&particle.x));
                assert!((15.0..40.0).contains(&particle.duration));
                assert!((0.0..5.0).contains(&particle.delay));
                assert!((-25.0..25.0).contains(&particle.drift));
            }
        }
    }

    #[test]
    fn test_generates_requested_count() {
        let mut n = 0.0;
        let particles = generate_particles(80, || {
            n = (n + 0.37) % 1.0;
            n
        });
        assert_eq!(particles.len(), 80);
        assert_ne!(particles[0], particles[1]);
    }
}
