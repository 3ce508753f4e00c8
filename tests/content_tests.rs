// Host-side tests for the card markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod content {
    include!("../src/content.rs");
}

use content::*;

#[test]
fn sheen_sits_inside_tilt_layer_above_the_body() {
    let html = card_layers_html();
    let tilt = html.find("class='card-tilt'").expect("tilt layer");
    let sheen = html.find("class='card-sheen'").expect("sheen layer");
    let body = html.find("class='card-body'").expect("card body");
    assert!(tilt < sheen && sheen < body);
}

#[test]
fn both_faces_are_stacked_in_the_flip_layer() {
    let html = card_layers_html();
    let flip = html.find("class='card-flip'").expect("flip layer");
    let front = html.find("class='card-face card-front'").expect("front face");
    let back = html.find("class='card-face card-back'").expect("back face");
    assert!(flip < front && front < back);
    // neither face is hidden by markup
    assert!(!html.contains("display:none"));
    assert!(!html.contains("hidden"));
}

#[test]
fn faces_carry_profile_content() {
    let front = card_front_html();
    for (label, value) in INFO_PILLS {
        assert!(front.contains(label) && front.contains(value));
    }
    let back = card_back_html();
    for (label, href) in QUICK_LINKS {
        assert!(back.contains(label) && back.contains(href));
    }
    assert_eq!(qr_placeholder_svg().matches("<rect").count(), 12);
}

#[test]
fn footer_names_the_year() {
    assert!(footer_text(2026).starts_with("© 2026 Kaung Khant"));
}
