//! Auto-rotating testimonial carousel.

use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::Interval;

/// Delay between automatic slide advances.
pub const ROTATE_MS: u32 = 5000;

/// One testimonial slide.
#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub profession: String,
}

/// Index of the slide after `current`, looping past the end.
pub fn next_slide(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

/// Single-item looping carousel with dot navigation.
///
/// Advances automatically every [`ROTATE_MS`]; the interval is owned by the
/// component and cancelled when it unmounts.
#[component]
pub fn TestimonialCarousel(slides: Vec<Testimonial>) -> Element {
    let mut active = use_signal(|| 0usize);
    let count = slides.len();

    let _rotor = use_hook(move || {
        Rc::new(Interval::new(ROTATE_MS, move || {
            let mut active = active;
            let current = *active.read();
            active.set(next_slide(current, count));
        }))
    });

    let current = (*active.read()).min(count.saturating_sub(1));

    rsx! {
        div {
            class: "testimonial-carousel",
            if let Some(slide) = slides.get(current) {
                div {
                    class: "testimonial-item",
                    p { class: "testimonial-quote", "\u{201c}{slide.quote}\u{201d}" }
                    h6 { class: "testimonial-author", "{slide.author}" }
                    span { class: "testimonial-profession", "{slide.profession}" }
                }
            }
            div {
                class: "carousel-dots",
                for i in 0..count {
                    button {
                        key: "{i}",
                        class: if i == current { "dot active" } else { "dot" },
                        onclick: move |_| active.set(i),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_loops_back_to_the_first_slide() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(2, 3), 0);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(next_slide(5, 0), 0);
    }
}
