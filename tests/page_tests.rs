// Host-side tests for scroll, decoration and contact helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod scroll {
    include!("../src/scroll.rs");
}
mod effects {
    include!("../src/effects.rs");
}
mod contact {
    include!("../src/contact.rs");
}

use contact::*;
use effects::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scroll::*;

const SECTIONS: [(&str, f64); 4] = [
    ("home", 0.0),
    ("about", 800.0),
    ("projects", 1600.0),
    ("contact", 2400.0),
];

#[test]
fn active_section_uses_two_hundred_px_lead() {
    assert_eq!(active_section(0.0, &SECTIONS, 200.0), Some("home"));
    assert_eq!(active_section(599.0, &SECTIONS, 200.0), Some("home"));
    assert_eq!(active_section(600.0, &SECTIONS, 200.0), Some("about"));
    assert_eq!(active_section(5000.0, &SECTIONS, 200.0), Some("contact"));
}

#[test]
fn no_section_before_the_first() {
    let sections = [("intro", 500.0)];
    assert_eq!(active_section(0.0, &sections, 200.0), None);
    assert_eq!(active_section(0.0, &[], 200.0), None);
}

#[test]
fn nav_links_match_by_fragment() {
    assert!(link_targets("#about", "about"));
    assert!(!link_targets("about", "about"));
    assert!(!link_targets("#about-me", "about"));
}

#[test]
fn parallax_moves_at_half_speed_upward() {
    assert_eq!(parallax_offset(400.0), -200.0);
    assert_eq!(parallax_transform(100.0), "translateY(-50px)");
}

#[test]
fn gradient_hue_spans_cyan_to_purple() {
    assert_eq!(gradient_hue(scroll_fraction(0.0, 3000.0, 1000.0)), 180.0);
    assert_eq!(gradient_hue(scroll_fraction(1000.0, 3000.0, 1000.0)), 210.0);
    assert_eq!(gradient_hue(scroll_fraction(2000.0, 3000.0, 1000.0)), 240.0);
}

#[test]
fn scroll_fraction_handles_short_pages_and_overscroll() {
    assert_eq!(scroll_fraction(10.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_fraction(10.0, 600.0, 800.0), 0.0);
    assert_eq!(scroll_fraction(-50.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_fraction(2500.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn gradient_css_offsets_three_hues() {
    let css = gradient_css(200.0);
    assert!(css.contains("hsla(200, 100%, 50%, 0.1)"));
    assert!(css.contains("hsla(260, 100%, 50%, 0.1)"));
    assert!(css.contains("hsla(320, 100%, 50%, 0.1)"));
    assert_eq!(css.matches("radial-gradient").count(), 3);
}

#[test]
fn typewriter_emits_each_char_then_stops() {
    let mut tw = Typewriter::new("Hi ✨");
    let typed: String = std::iter::from_fn(|| tw.next_char()).collect();
    assert_eq!(typed, "Hi ✨");
    assert!(tw.is_done());
    assert_eq!(tw.next_char(), None);
}

#[test]
fn empty_tagline_is_done_immediately() {
    let tw = Typewriter::new("");
    assert!(tw.is_done());
}

#[test]
fn particles_stay_within_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    let params = ParticleParams::default();
    for _ in 0..500 {
        let p = ParticleSpec::random(&mut rng, &params);
        assert!((1.0..5.0).contains(&p.size_px));
        assert!((180.0..240.0).contains(&p.hue));
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.2..0.7).contains(&p.opacity));
        assert!((10.0..20.0).contains(&p.float_s));
    }
}

#[test]
fn particle_css_is_square_and_floats() {
    let p = ParticleSpec {
        size_px: 3.0,
        hue: 200.0,
        left_pct: 50.0,
        opacity: 0.5,
        float_s: 12.0,
    };
    let css = p.css();
    assert!(css.contains("width:3px;height:3px"));
    assert!(css.contains("hsl(200, 100%, 50%)"));
    assert!(css.contains("top:100%"));
    assert!(css.contains("animation:float 12s linear infinite"));
}

#[test]
fn timeline_items_alternate_sides() {
    assert_eq!(timeline_hidden_transform(0), "translateX(-50px)");
    assert_eq!(timeline_hidden_transform(1), "translateX(50px)");
    assert_eq!(timeline_hidden_transform(4), "translateX(-50px)");
    assert_eq!(card_hidden_transform(), "translateY(30px)");
}

#[test]
fn glow_filter_toggles_brightness() {
    assert_eq!(glow_filter(true), "brightness(1.2)");
    assert_eq!(glow_filter(false), "brightness(1)");
}

#[test]
fn encode_matches_encode_uri_component() {
    assert_eq!(encode_uri_component("Hello World"), "Hello%20World");
    assert_eq!(encode_uri_component("a&b=c?d#e"), "a%26b%3Dc%3Fd%23e");
    assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
    assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
    assert_eq!(encode_uri_component("café"), "caf%C3%A9");
    assert_eq!(encode_uri_component("a+b/c"), "a%2Bb%2Fc");
}

#[test]
fn mailto_carries_subject_and_formatted_body() {
    let msg = ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hi there".into(),
        message: "Let's talk".into(),
    };
    assert_eq!(
        msg.body(),
        "Name: Ada\nEmail: ada@example.com\n\nMessage:\nLet's talk"
    );
    assert_eq!(
        msg.mailto("me@example.com"),
        "mailto:me@example.com?subject=Hi%20there&body=\
         Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0ALet's%20talk"
    );
}

#[test]
fn empty_form_still_builds_a_link() {
    let link = ContactMessage::default().mailto("me@example.com");
    assert!(link.starts_with("mailto:me@example.com?subject=&body=Name%3A%20"));
}

#[test]
fn notification_classes_follow_kind() {
    assert_eq!(
        NotificationKind::Success.class_name(),
        "notification notification-success"
    );
}
