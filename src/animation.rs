pub const FADE_IN_UP: &str = "animate-fade-in-up";
pub const FADE_IN_LEFT: &str = "animate-fade-in-left";
pub const FADE_IN_RIGHT: &str = "animate-fade-in-right";
pub const SCALE_IN: &str = "animate-scale-in";
pub const PARALLAX_FLOAT: &str = "animate-parallax-float";

/// Class for content waiting for its section to come into view.
pub const HIDDEN: &str = "opacity-0";

pub fn reveal_class(revealed: bool, animation: &'static str) -> &'static str {
    if revealed {
        animation
    } else {
        HIDDEN
    }
}

/// `animation-delay` for the `index`th item of a staggered group.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    let secs = index as f64 * step_secs;
    // Trim float noise like 0.44999999 so the CSS stays readable
    let rounded = (secs * 1000.0).round() / 1000.0;
    format!("{}s", rounded)
}

pub fn delay_style(delay: &str) -> String {
    format!("animation-delay: {};", delay)
}
