pub const SITE_CSS: &str = r#"
:root {
    --brand: #0B7A75;
    --brand-dark: #075955;
    --ink: #1b2226;
    --muted: #5b6870;
    --bg: #f6f8f8;
    --card: #ffffff;
    --radius: 14px;
}
* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    margin: 0;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, "Noto Sans Georgian", "Noto Sans", sans-serif;
    color: var(--ink);
    background: var(--bg);
    line-height: 1.6;
}
a { color: var(--brand); }
img { max-width: 100%; display: block; }
.container { width: min(1120px, 92vw); margin: 0 auto; }
.muted { color: var(--muted); }
.flush { margin: 0; }
.flush-top { margin-top: 0; }
.plain-list { list-style: none; padding-left: 0; }

.topbar { background: var(--brand); color: #fff; font-size: .9rem; }
.topbar .container { display: flex; justify-content: space-between; align-items: center; padding: .4rem 0; gap: 1rem; }
.pill {
    display: inline-block;
    padding: .25rem .75rem;
    border-radius: 999px;
    background: rgba(11, 122, 117, .1);
    color: var(--brand);
    text-decoration: none;
    font-weight: 600;
}
.topbar .pill { background: rgba(255, 255, 255, .15); color: #fff; }

header { position: sticky; top: 0; z-index: 20; background: #fff; box-shadow: 0 1px 0 rgba(0, 0, 0, .06); }
.header-row { display: flex; align-items: center; justify-content: space-between; padding: .6rem 0; }
.logo { display: flex; align-items: center; gap: .5rem; font-weight: 800; color: var(--brand); text-decoration: none; }
.nav-toggle { display: none; background: none; border: 0; width: 44px; height: 44px; padding: 10px; cursor: pointer; }
.nav { display: flex; gap: 1.25rem; list-style: none; margin: 0; padding: 0; align-items: center; }
.nav-link { text-decoration: none; color: var(--ink); font-weight: 600; }
.nav-cta { background: var(--brand); color: #fff; padding: .45rem 1rem; border-radius: 999px; }
.nav-backdrop { display: none; }

@media (max-width: 780px) {
    .nav-toggle { display: block; }
    .nav-panel {
        position: fixed;
        top: 0;
        right: 0;
        height: 100vh;
        width: min(320px, 82vw);
        background: #fff;
        padding: 5rem 1.5rem 2rem;
        transform: translateX(100%);
        transition: transform .25s ease;
        z-index: 40;
    }
    .nav-panel.open { transform: translateX(0); }
    .nav { flex-direction: column; align-items: flex-start; }
    .nav-backdrop.show { display: block; position: fixed; inset: 0; background: rgba(0, 0, 0, .45); z-index: 30; }
}

.hero { padding: 3rem 0; }
.hero h1 { font-size: clamp(1.7rem, 4vw, 2.6rem); line-height: 1.2; margin-top: 0; }
.align-center { align-items: center; }
.grid { display: grid; gap: 1.25rem; }
.grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
@media (max-width: 900px) {
    .grid-2, .grid-3 { grid-template-columns: 1fr; }
}
.cta { display: flex; flex-wrap: wrap; gap: .75rem; margin: 1.25rem 0; }
.badges { display: flex; flex-wrap: wrap; gap: .5rem; }
.btn {
    display: inline-block;
    padding: .7rem 1.3rem;
    border-radius: 10px;
    font-weight: 700;
    text-decoration: none;
    border: 2px solid var(--brand);
    cursor: pointer;
    font: inherit;
}
.btn-primary { background: var(--brand); color: #fff; }
.btn-primary:hover { background: var(--brand-dark); border-color: var(--brand-dark); }
.btn-outline { background: transparent; color: var(--brand); }

.card { background: var(--card); border-radius: var(--radius); padding: 1.25rem; box-shadow: 0 6px 24px rgba(16, 24, 40, .06); margin-bottom: 1rem; }
.media { overflow: hidden; padding: 0; margin: 0 0 1rem; border-radius: var(--radius); }
.ratio { position: relative; }
.ratio-4x3 { aspect-ratio: 4 / 3; }
.ratio img { width: 100%; height: 100%; object-fit: cover; }
.service-card h3 { margin-bottom: .25rem; }

.section { padding: 2.5rem 0; }
.steps { grid-template-columns: repeat(4, minmax(0, 1fr)); counter-reset: step; }
@media (max-width: 900px) {
    .steps { grid-template-columns: 1fr 1fr; }
}
.step { counter-increment: step; background: var(--card); border-radius: var(--radius); padding: 1rem; }
.step::before { content: counter(step); display: inline-grid; place-items: center; width: 2rem; height: 2rem; border-radius: 50%; background: var(--brand); color: #fff; font-weight: 800; }

details summary { cursor: pointer; }

form > div { margin-bottom: .9rem; }
form label { display: block; font-weight: 600; margin-bottom: .3rem; }
form input, form select, form textarea {
    width: 100%;
    padding: .65rem .8rem;
    border: 1px solid #cfd8dc;
    border-radius: 10px;
    font: inherit;
    background: #fff;
}
form input:focus, form select:focus, form textarea:focus { outline: 2px solid var(--brand); border-color: transparent; }

footer { background: #10201f; color: #dfe7e6; padding: 2.5rem 0; margin-top: 2rem; }
footer a { color: #9fe3dd; }
footer .muted { color: #a6b4b3; }
.footer-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
@media (max-width: 780px) {
    .footer-grid { grid-template-columns: 1fr; }
}
"#;
