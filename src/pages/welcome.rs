use crate::constants::{WORDMARK_BLUR_KEYS_PX, WORDMARK_OPACITY_KEYS};
use crate::content::WORDMARK;
use crate::core::{
    keyframes, EASE_EMPHASIZED, EASE_OUT, GLOW_DELAY_SEC, GLOW_FADE_SEC, SPLASH_SETTLE_SEC,
    WELCOME_FADE_SEC, WORDMARK_GROW_SEC, WORDMARK_SCALE_KEYS, WORDMARK_TIME_KEYS,
};
use crate::dom;
use crate::frame::{self, FrameLoop};
use instant::Instant;
use web_sys as web;

/// Splash with the growing wordmark. Navigation away is scheduled by the
/// router, not by the page.
pub struct WelcomePage {
    root: web::HtmlElement,
    _frame: FrameLoop,
}

impl WelcomePage {
    pub fn mount(document: &web::Document, parent: &web::Element) -> anyhow::Result<Self> {
        let markup = format!(
            "<div class='splash'><div class='wordmark'>{}<div class='wordmark-glow'></div></div></div>",
            WORDMARK
        );
        let root = dom::create_html(document, "main", "page welcome", &markup)?;
        dom::append(parent, &root)?;

        let mut splash = SplashFrame {
            splash: dom::query_html(&root, ".splash")?,
            wordmark: dom::query_html(&root, ".wordmark")?,
            glow: dom::query_html(&root, ".wordmark-glow")?,
            started: Instant::now(),
        };
        splash.apply(0.0);
        let frame_loop = frame::start_loop(move || splash.frame())?;

        log::info!("[welcome] splash started");
        Ok(Self {
            root,
            _frame: frame_loop,
        })
    }
}

impl Drop for WelcomePage {
    fn drop(&mut self) {
        self.root.remove();
    }
}

struct SplashFrame {
    splash: web::HtmlElement,
    wordmark: web::HtmlElement,
    glow: web::HtmlElement,
    started: Instant,
}

impl SplashFrame {
    /// Returns `false` once the last keyframe has been written.
    fn frame(&mut self) -> bool {
        let t = self.started.elapsed().as_secs_f32().min(SPLASH_SETTLE_SEC);
        self.apply(t);
        t < SPLASH_SETTLE_SEC
    }

    fn apply(&self, t: f32) {
        let fade = EASE_OUT.progress(t / WELCOME_FADE_SEC);
        dom::set_style(&self.splash, "opacity", &format!("{:.3}", fade));

        let p = t / WORDMARK_GROW_SEC;
        let scale = keyframes(&WORDMARK_SCALE_KEYS, &WORDMARK_TIME_KEYS, EASE_EMPHASIZED, p);
        let opacity = keyframes(&WORDMARK_OPACITY_KEYS, &WORDMARK_TIME_KEYS, EASE_EMPHASIZED, p);
        let blur = keyframes(&WORDMARK_BLUR_KEYS_PX, &WORDMARK_TIME_KEYS, EASE_EMPHASIZED, p);
        dom::set_style(&self.wordmark, "transform", &format!("scale({:.4})", scale));
        dom::set_style(&self.wordmark, "opacity", &format!("{:.3}", opacity));
        dom::set_style(&self.wordmark, "filter", &format!("blur({:.2}px)", blur));

        let glow = EASE_OUT.progress((t - GLOW_DELAY_SEC) / GLOW_FADE_SEC);
        dom::set_style(&self.glow, "opacity", &format!("{:.3}", glow));
    }
}
