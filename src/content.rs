// Static profile copy and the markup built from it.

use crate::constants::{
    CARD_FACE_BACK_CLASS, CARD_FACE_FRONT_CLASS, CARD_FLIP_CLASS, CARD_SHEEN_CLASS,
    CARD_TILT_CLASS,
};

pub const OWNER_NAME: &str = "Kaung Khant";
pub const OWNER_DISPLAY_NAME: &str = "Kaung Khant (Ken)";
pub const MONOGRAM: &str = "Ken";
pub const AFFILIATION: &str = "Electrical Engineering @ UC San Diego";
pub const FOCUS_AREAS: &str = "PCB Design • Embedded systems & Control • Robotics";

pub const HERO_TITLE: &str = "Hellooo!";
pub const HERO_SUBTITLE: &str =
    "Electrical Engineering @ UCSD • PCB Design, Embedded systems & Control, Robotic";

pub const WORDMARK: &str = "WELCOME";
pub const LOADING_TEXT: &str = "Loading…";

pub const INFO_PILLS: [(&str, &str); 4] = [
    ("Email", "kkkhant@ucsd.edu"),
    ("Site", "kennethkhant.github.io"),
    ("GitHub", "github.com/KennethKhant"),
    ("LinkedIn", "in/kaungkkhant"),
];

pub const QUICK_LINKS: [(&str, &str); 4] = [
    ("Projects", "https://kennethkhant.github.io/capabilities"),
    ("Resume", "https://kennethkhant.github.io/resume"),
    ("Contact", "https://kennethkhant.github.io/contact"),
    ("LinkedIn", "https://www.linkedin.com/in/ken-kaung"),
];

// Finder patterns plus a few data modules; stands in for a real code
const QR_RECTS: [(u32, u32, u32); 12] = [
    (8, 8, 26),
    (86, 8, 26),
    (8, 86, 26),
    (46, 46, 10),
    (60, 46, 6),
    (72, 46, 8),
    (46, 60, 8),
    (58, 60, 10),
    (74, 60, 6),
    (46, 74, 6),
    (58, 74, 8),
    (72, 74, 10),
];

/// Layer stack inside the card surface: tilt, hover sheen, body, flip, faces.
pub fn card_layers_html() -> String {
    format!(
        "<div class='{tilt}'>\
           <div class='{sheen}'></div>\
           <div class='card-body'>\
             <div class='{flip}'>\
               <div class='{front}'>{front_html}</div>\
               <div class='{back}'>{back_html}</div>\
             </div>\
           </div>\
         </div>",
        tilt = CARD_TILT_CLASS,
        sheen = CARD_SHEEN_CLASS,
        flip = CARD_FLIP_CLASS,
        front = CARD_FACE_FRONT_CLASS,
        back = CARD_FACE_BACK_CLASS,
        front_html = card_front_html(),
        back_html = card_back_html(),
    )
}

pub fn card_front_html() -> String {
    let pills: String = INFO_PILLS
        .iter()
        .map(|(label, value)| {
            format!(
                "<div class='pill'><div class='pill-label'>{}</div><div class='pill-value'>{}</div></div>",
                label, value
            )
        })
        .collect();
    format!(
        "<div class='front-layout'>\
           <div class='avatar'><div class='avatar-ring'><div class='avatar-core'>{}</div></div><div class='avatar-glow'></div></div>\
           <div class='front-text'>\
             <h3>{}</h3><p class='affiliation'>{}</p><p class='focus'>{}</p>\
             <div class='pills'>{}</div>\
           </div>\
         </div>",
        MONOGRAM, OWNER_DISPLAY_NAME, AFFILIATION, FOCUS_AREAS, pills
    )
}

pub fn card_back_html() -> String {
    let links: String = QUICK_LINKS
        .iter()
        .map(|(label, href)| format!("<a class='quick-link' href='{}'>{}</a>", href, label))
        .collect();
    format!(
        "<div class='back-layout'>\
           <div><h3>Quick Links</h3><div class='links'>{}</div></div>\
           <div class='qr'><div class='qr-caption'>Scan to connect</div>{}</div>\
         </div>",
        links,
        qr_placeholder_svg()
    )
}

pub fn qr_placeholder_svg() -> String {
    let rects: String = QR_RECTS
        .iter()
        .map(|(x, y, s)| {
            format!(
                "<rect x='{}' y='{}' width='{}' height='{}' fill='#000'/>",
                x, y, s, s
            )
        })
        .collect();
    format!("<svg viewBox='0 0 120 120' class='qr-code'>{}</svg>", rects)
}

pub fn footer_text(year: u32) -> String {
    format!(
        "© {} {} • UC San Diego • Electrical Engineering",
        year, OWNER_NAME
    )
}
