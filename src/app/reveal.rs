use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// Shrinks the observed viewport so sections start their entrance shortly
/// before they are fully on screen.
const REVEAL_MARGIN: &str = "-100px";

/// One-shot viewport visibility for a section.
///
/// The returned signal starts `false` and flips to `true` the first time the
/// target intersects the viewport; it never resets, even if the section
/// scrolls back out of view. The observer is detached after the first hit, or
/// on owner teardown if it never fired.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(REVEAL_MARGIN),
    );

    // unsubscribe on the first positive notification
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    revealed.into()
}

/// Entrance classes for a reveal-driven block: hidden until the owning
/// section's trigger fires, then transitioned in by the stylesheet.
pub fn reveal_class(base: &'static str, revealed: bool) -> String {
    if revealed {
        format!("{base} reveal revealed")
    } else {
        format!("{base} reveal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class_two_states() {
        let hidden = reveal_class("text-center mb-16", false);
        let visible = reveal_class("text-center mb-16", true);
        assert!(hidden.contains("reveal"));
        assert!(!hidden.contains("revealed"));
        assert!(visible.ends_with("reveal revealed"));
        assert!(visible.starts_with("text-center mb-16"));
    }
}
