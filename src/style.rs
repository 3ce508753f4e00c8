use crate::constants::{CARD_PERSPECTIVE_PX, STYLE_ELEMENT_ID};
use crate::core::{
    EASE_IN_OUT, EASE_OUT, GRID_COLS, GRID_OPACITY_KEYS, HERO_FADE_SEC, HERO_SUBTITLE_DELAY_SEC,
};
use web_sys as web;

/// Inject the site stylesheet into `<head>` once.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    let el = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("create <style>: {:?}", e))?;
    el.set_id(STYLE_ELEMENT_ID);
    el.set_text_content(Some(&stylesheet()));
    head.append_child(&el)
        .map_err(|e| anyhow::anyhow!("append <style>: {:?}", e))?;
    Ok(())
}

fn stylesheet() -> String {
    let [o0, o1, o2] = GRID_OPACITY_KEYS;
    format!(
        r#"
html, body {{ margin: 0; background: #000; color: #f4f4f5; font-family: system-ui, sans-serif; }}
.page {{ position: relative; min-height: 100svh; overflow: hidden; background: #000; }}
.loading {{ display: grid; place-items: center; color: #a1a1aa; }}

.welcome {{ position: fixed; inset: 0; display: grid; place-items: center; }}
.wordmark {{ position: relative; user-select: none; font-size: clamp(3rem, 10vw, 4.5rem); font-weight: 800; letter-spacing: 0.08em; color: #dc2626; }}
.wordmark-glow {{ pointer-events: none; position: absolute; inset: -1.5rem; z-index: -1; border-radius: 32px; background: rgba(185, 28, 28, 0.25); filter: blur(64px); opacity: 0; }}

.grid-bg {{ position: absolute; inset: 0; z-index: 0; opacity: 0.07; display: grid; grid-template-columns: repeat({cols}, 1fr); }}
.grid-cell {{ margin: 4px; border-radius: 6px; background: linear-gradient(135deg, #3f3f46, #18181b); animation-name: grid-pulse; animation-iteration-count: infinite; animation-timing-function: {grid_ease}; }}
@keyframes grid-pulse {{ 0% {{ opacity: {o0}; }} 50% {{ opacity: {o1}; }} 100% {{ opacity: {o2}; }} }}
.vignette {{ pointer-events: none; position: absolute; inset: 0; background: radial-gradient(ellipse at center, transparent 40%, rgba(0,0,0,0.6) 70%, rgba(0,0,0,0.85) 100%); }}

.stage {{ position: relative; z-index: 10; max-width: 72rem; margin: 0 auto; padding: 2.5rem 1.5rem 0; display: flex; flex-direction: column; align-items: center; }}
.hero {{ text-align: center; }}
.hero h1 {{ margin: 0; font-size: clamp(1.9rem, 5vw, 3rem); font-weight: 700; animation: fade-up-20 {hero}s {hero_ease} both; }}
.hero p {{ margin-top: 0.75rem; max-width: 42rem; color: #d4d4d8; animation: fade-up-10 {hero}s {hero_ease} {sub_delay}s both; }}
@keyframes fade-up-20 {{ from {{ opacity: 0; transform: translateY(20px); }} to {{ opacity: 1; transform: none; }} }}
@keyframes fade-up-10 {{ from {{ opacity: 0; transform: translateY(10px); }} to {{ opacity: 0.95; transform: none; }} }}
.card-slot {{ margin-top: 2.5rem; display: grid; place-items: center; width: 100%; }}
footer {{ position: relative; z-index: 10; margin-top: 3.5rem; padding: 0 1.5rem 2.5rem; text-align: center; font-size: 0.75rem; color: #71717a; }}

.card {{ position: relative; width: 380px; height: 224px; cursor: pointer; user-select: none; perspective: {perspective}px; outline: none; }}
.card:focus-visible {{ box-shadow: 0 0 0 2px rgba(248, 113, 113, 0.6); border-radius: 24px; }}
@media (min-width: 640px) {{ .card {{ width: 560px; height: 300px; }} }}
.card-tilt {{ position: relative; width: 100%; height: 100%; box-sizing: border-box; padding: 2px; border-radius: 24px; border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); box-shadow: 0 25px 50px -12px rgba(0,0,0,0.6); backdrop-filter: blur(8px); transform-style: preserve-3d; }}
.card-sheen {{ pointer-events: none; position: absolute; inset: 0; z-index: 1; border-radius: 24px; opacity: 0; transition: opacity 300ms; background: linear-gradient(120deg, rgba(255,255,255,0.12), rgba(255,255,255,0.02) 40%, transparent 60%); }}
.card:hover .card-sheen {{ opacity: 1; }}
.card-body {{ position: relative; width: 100%; height: 100%; overflow: hidden; border-radius: 22px; background: linear-gradient(135deg, #18181b, #27272a); transform-style: preserve-3d; }}
.card-flip {{ position: absolute; inset: 0; transform-style: preserve-3d; }}
.card-face {{ position: absolute; inset: 0; display: grid; place-items: center; backface-visibility: hidden; -webkit-backface-visibility: hidden; }}
.card-back {{ transform: rotateY(180deg); }}

.front-layout {{ display: flex; align-items: center; gap: 1.75rem; padding: 1.75rem; width: 100%; box-sizing: border-box; }}
.avatar {{ position: relative; flex-shrink: 0; }}
.avatar-ring {{ width: 96px; height: 96px; border-radius: 50%; padding: 2px; box-sizing: border-box; background: linear-gradient(45deg, #dc2626, #f87171); }}
.avatar-core {{ display: grid; place-items: center; width: 100%; height: 100%; border-radius: 50%; background: #18181b; font-size: 1.6rem; font-weight: 600; color: #e4e4e7; }}
.avatar-glow {{ pointer-events: none; position: absolute; inset: -8px; z-index: -1; border-radius: 50%; background: rgba(220, 38, 38, 0.2); filter: blur(40px); }}
.front-text {{ min-width: 0; flex: 1; }}
.front-text h3 {{ margin: 0; font-size: 1.25rem; }}
.affiliation {{ margin: 0.125rem 0 0; font-size: 0.875rem; color: #d4d4d8; }}
.focus {{ margin: 0.25rem 0 0; font-size: 11px; color: #a1a1aa; }}
.pills {{ margin-top: 1rem; display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; font-size: 0.75rem; }}
.pill {{ border-radius: 6px; border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); padding: 0.25rem 0.5rem; }}
.pill-label {{ font-size: 10px; text-transform: uppercase; letter-spacing: 0.05em; color: #a1a1aa; }}
.pill-value {{ overflow: hidden; text-overflow: ellipsis; white-space: nowrap; color: #e4e4e7; }}

.back-layout {{ display: grid; grid-template-columns: 1fr auto; align-items: center; gap: 1.5rem; padding: 1.75rem; width: 100%; box-sizing: border-box; }}
.back-layout h3 {{ margin: 0; font-size: 1.125rem; }}
.links {{ margin-top: 0.75rem; display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; max-width: 360px; font-size: 0.875rem; }}
.quick-link {{ border-radius: 8px; border: 1px solid rgba(255,255,255,0.1); background: rgba(255,255,255,0.05); padding: 0.5rem 0.75rem; color: #e4e4e7; text-decoration: none; }}
.quick-link:hover {{ background: rgba(255,255,255,0.1); }}
.qr {{ justify-self: end; text-align: center; }}
.qr-caption {{ font-size: 10px; color: #a1a1aa; }}
.qr-code {{ margin-top: 0.5rem; width: 96px; height: 96px; border-radius: 6px; background: rgba(255,255,255,0.9); padding: 8px; box-sizing: border-box; }}
"#,
        cols = GRID_COLS,
        grid_ease = EASE_IN_OUT.css(),
        hero = HERO_FADE_SEC,
        hero_ease = EASE_OUT.css(),
        sub_delay = HERO_SUBTITLE_DELAY_SEC,
        perspective = CARD_PERSPECTIVE_PX,
    )
}
