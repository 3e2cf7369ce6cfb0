/// Site-wide stylesheet, mounted once by the app root.
pub const SITE_CSS: &str = r#"
:root {
    --background: #0a0a0f;
    --secondary: #12121a;
    --primary: #22d3ee;
    --accent: #34d399;
    --alert: #f97316;
    --text: #ffffff;
    --text-secondary: #a1a1aa;
    --text-tertiary: #71717a;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--background);
    color: var(--text);
    font-family: 'Inter', system-ui, sans-serif;
    line-height: 1.6;
}

a { color: inherit; text-decoration: none; }

.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; position: relative; }
.container.narrow { max-width: 880px; }
.two-column { display: grid; gap: 3rem; }
@media (min-width: 1024px) { .two-column { grid-template-columns: 1fr 1fr; gap: 5rem; } }

.section { padding: 7rem 0; position: relative; overflow: hidden; }
.section-header { max-width: 48rem; margin-bottom: 4rem; }
.section-header.centered { text-align: center; margin-left: auto; margin-right: auto; }
.eyebrow { display: inline-block; font-size: 0.85rem; font-weight: 500; color: var(--primary);
    letter-spacing: 0.05em; text-transform: uppercase; margin-bottom: 1rem; }
.eyebrow-alert { color: var(--alert); }
h1, h2, h3 { font-family: 'Space Grotesk', 'Inter', sans-serif; margin: 0 0 1rem; }
h2 { font-size: clamp(2rem, 4vw, 3rem); }
.lead { font-size: 1.15rem; color: var(--text-secondary); }
.muted { color: var(--text-secondary); }
.small { font-size: 0.85rem; }
.text-white { color: var(--text); }
.text-primary { color: var(--primary); }
.text-alert { color: var(--alert); }
.text-gradient-animated {
    background: linear-gradient(90deg, var(--primary), var(--accent), var(--primary));
    background-size: 200% auto;
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    animation: gradient-shift 4s linear infinite;
}
@keyframes gradient-shift { to { background-position: 200% center; } }
.text-link { color: var(--primary); font-weight: 500; }
.text-link:hover { color: var(--accent); }

.glass-panel { background: rgba(255, 255, 255, 0.03); border: 1px solid rgba(255, 255, 255, 0.06);
    border-radius: 1rem; backdrop-filter: blur(12px); }
.badge, .pill { display: inline-block; padding: 0.4rem 1rem; border-radius: 999px;
    border: 1px solid rgba(34, 211, 238, 0.2); background: rgba(34, 211, 238, 0.08);
    color: var(--primary); font-size: 0.85rem; }
.btn-primary { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.9rem 2rem;
    background: #fff; color: var(--background); font-weight: 600; border-radius: 0.75rem;
    transition: transform 0.3s, box-shadow 0.3s; }
.btn-primary:hover { transform: translateY(-2px); box-shadow: 0 10px 30px rgba(255, 255, 255, 0.1); }
.btn-large { font-size: 1.1rem; padding: 1.2rem 2.5rem; }
.btn-secondary { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.15); border-radius: 0.75rem; color: var(--text); }
.btn-secondary:hover { border-color: rgba(255, 255, 255, 0.3); }

/* Entrance transitions, switched on by `is-visible` */
.reveal { opacity: 0; transition: opacity 0.7s ease-out, transform 0.7s ease-out; }
.reveal-up { transform: translateY(2rem); }
.reveal-left { transform: translateX(-2rem); }
.reveal-right { transform: translateX(2.5rem); }
.reveal-fade { transform: none; }
.reveal.is-visible { opacity: 1; transform: none; }
.fade-up { opacity: 0; transform: translateY(1.5rem); transition: opacity 0.7s, transform 0.7s; }
.fade-left { opacity: 0; transform: translateX(-2.5rem); transition: opacity 1s ease-out, transform 1s ease-out; }
.fade-up.is-visible, .fade-left.is-visible { opacity: 1; transform: none; }
.scroll-indicator.is-visible { opacity: 0.6; }

.top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; transition: all 0.5s ease-out; }
.top-nav.scrolled { background: rgba(10, 10, 15, 0.9); backdrop-filter: blur(20px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05); }
.nav-content { max-width: 1280px; margin: 0 auto; padding: 0 1.5rem; height: 5rem;
    display: flex; align-items: center; justify-content: space-between; }
.nav-logo { display: inline-flex; flex-direction: column; gap: 0.1rem; }
.nav-logo-name { font-size: 1.25rem; font-weight: 700; }
.nav-logo-tagline { font-size: 0.65rem; color: var(--text-tertiary); letter-spacing: 0.15em; text-transform: uppercase; }
.nav-right { display: none; align-items: center; gap: 2.5rem; }
.nav-links { display: flex; gap: 2rem; list-style: none; margin: 0; padding: 0; }
.nav-link { color: var(--text-secondary); font-weight: 500; }
.nav-link:hover { color: var(--text); }
.nav-cta { padding: 0.75rem 1.5rem; background: #fff; color: var(--background); font-weight: 600;
    border-radius: 0.75rem; font-size: 0.9rem; }
.nav-cta-large { font-size: 1.1rem; padding: 1rem 2rem; }
.burger-menu { background: none; border: none; width: 2.5rem; height: 2.5rem; display: flex;
    flex-direction: column; justify-content: center; gap: 5px; cursor: pointer; }
.burger-menu span { display: block; height: 2px; background: #fff; border-radius: 2px; }
@media (min-width: 1024px) { .nav-right { display: flex; } .burger-menu { display: none; } }

.mobile-menu { position: fixed; inset: 0; z-index: 40; opacity: 0; pointer-events: none; transition: opacity 0.5s; }
.mobile-menu.mobile-menu-open { opacity: 1; pointer-events: auto; }
.mobile-menu-backdrop { position: absolute; inset: 0; background: rgba(10, 10, 15, 0.95); backdrop-filter: blur(20px); }
.mobile-menu-content { position: relative; height: 100%; display: flex; flex-direction: column;
    align-items: center; justify-content: center; gap: 2.5rem; }
.mobile-menu-links { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column;
    align-items: center; gap: 1.5rem; }
.mobile-menu-link { font-size: 1.5rem; font-weight: 600; }
@media (min-width: 1024px) { .mobile-menu { display: none; } }

.hero { min-height: 100vh; display: flex; align-items: center; padding-top: 5rem; position: relative; overflow: hidden; }
.hero-glow { position: absolute; border-radius: 50%; filter: blur(120px); pointer-events: none; }
.hero-glow-primary { top: 25%; left: 25%; width: 600px; height: 600px; background: rgba(34, 211, 238, 0.05); }
.hero-glow-accent { bottom: 25%; right: 33%; width: 400px; height: 400px; background: rgba(52, 211, 153, 0.05); }
.hero-grid { position: absolute; inset: 0; opacity: 0.02; pointer-events: none; background-size: 60px 60px;
    background-image: linear-gradient(rgba(255,255,255,0.03) 1px, transparent 1px),
        linear-gradient(90deg, rgba(255,255,255,0.03) 1px, transparent 1px); }
.hero-layout { display: grid; gap: 3rem; align-items: center; }
@media (min-width: 1024px) { .hero-layout { grid-template-columns: 1fr 1fr; gap: 5rem; } }
.hero-photo img { width: 100%; max-width: 480px; aspect-ratio: 3 / 4; object-fit: cover; object-position: top;
    border-radius: 1rem; filter: grayscale(30%) contrast(1.05); }
.hero-headline { font-size: clamp(2.25rem, 6vw, 4.5rem); font-weight: 800; line-height: 1.05; }
.hero-subheadline { font-size: 1.2rem; color: var(--text-secondary); max-width: 36rem; }
.hero-ctas { display: flex; flex-wrap: wrap; gap: 1rem; margin: 2rem 0 2.5rem; }
.hero-trust { display: flex; flex-wrap: wrap; gap: 0.5rem 1.5rem; }
.trust-item { display: flex; align-items: center; gap: 0.5rem; color: var(--text-secondary); font-size: 0.9rem; }
.check, .fit-mark { color: var(--accent); }
.scroll-indicator { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%);
    display: flex; flex-direction: column; align-items: center; gap: 0.5rem; font-size: 0.75rem;
    color: var(--text-tertiary); letter-spacing: 0.2em; text-transform: uppercase; }
.scroll-line { width: 1px; height: 2rem; background: linear-gradient(rgba(255,255,255,0.3), transparent); }

.stat-grid, .pillar-grid, .post-grid { display: grid; gap: 1.5rem; }
@media (min-width: 768px) { .stat-grid, .pillar-grid { grid-template-columns: repeat(3, 1fr); } }
@media (min-width: 768px) { .post-grid { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .post-grid { grid-template-columns: repeat(3, 1fr); } }
.stat-card { padding: 2rem; }
.stat-value { font-size: 2.5rem; font-weight: 700; }
.stat-citation { font-size: 0.75rem; color: var(--text-tertiary); }
.callout, .integration-callout { margin-top: 3rem; padding: 1.5rem; border-radius: 1rem;
    border: 1px solid rgba(255, 255, 255, 0.05); text-align: center; color: var(--text-secondary); }
.integration-callout { display: flex; flex-wrap: wrap; gap: 1.5rem; align-items: center; justify-content: space-between; text-align: left; }
.callout-title { font-size: 1.25rem; font-weight: 700; color: var(--text); }

.credential-grid { display: grid; gap: 1rem; margin: 2rem 0; }
@media (min-width: 640px) { .credential-grid { grid-template-columns: repeat(3, 1fr); } }
.credential { padding: 1rem; border-radius: 0.75rem; border: 1px solid rgba(255,255,255,0.05); }
.credential-title { font-weight: 600; font-size: 0.9rem; }
.credential-description { font-size: 0.75rem; color: var(--text-tertiary); }
.prose p { color: var(--text-secondary); }
.quote-card { padding: 2.5rem; position: relative; }
.quote-mark { position: absolute; top: -1rem; left: -0.5rem; font-size: 4rem; color: rgba(34, 211, 238, 0.2); }
.quote-card blockquote { margin: 0 0 1.5rem; font-size: 1.4rem; line-height: 1.5; }
.quote-author { display: flex; align-items: center; gap: 1rem; }
.quote-author img { width: 3rem; height: 3rem; border-radius: 50%; object-fit: cover; object-position: top; }

.pillar { position: relative; padding: 2rem; border-radius: 1rem; border: 1px solid rgba(255,255,255,0.05);
    background: linear-gradient(rgba(255,255,255,0.03), transparent); }
.pillar-number { position: absolute; top: -0.75rem; left: -0.75rem; width: 2rem; height: 2rem;
    border-radius: 0.5rem; display: flex; align-items: center; justify-content: center; font-weight: 700; font-size: 0.85rem; }
.pillar-subtitle { font-size: 0.75rem; letter-spacing: 0.1em; text-transform: uppercase; margin-bottom: 0.5rem; }
.pillar-outcomes { list-style: none; padding: 0; color: var(--text-secondary); font-size: 0.9rem; }
.tone-primary .pillar-number, .tone-primary .pillar-subtitle { color: var(--primary); background: rgba(34, 211, 238, 0.1); }
.tone-accent .pillar-number, .tone-accent .pillar-subtitle { color: var(--accent); background: rgba(52, 211, 153, 0.1); }
.tone-alert .pillar-number, .tone-alert .pillar-subtitle { color: var(--alert); background: rgba(249, 115, 22, 0.1); }
.pillar-subtitle { background: none !important; }

.sticky-column { align-self: start; }
@media (min-width: 1024px) { .sticky-column { position: sticky; top: 8rem; } }
.metric-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-bottom: 2rem; }
.metric { padding: 1rem; border-radius: 0.75rem; border: 1px solid rgba(255,255,255,0.05); }
.metric-value { font-size: 1.5rem; font-weight: 700; color: var(--primary); }
.timeline-step { display: flex; gap: 2rem; }
.timeline-rail { display: flex; flex-direction: column; align-items: center; flex-shrink: 0; }
.timeline-marker { width: 3rem; height: 3rem; border-radius: 0.75rem; border: 1px solid rgba(34, 211, 238, 0.2);
    background: rgba(34, 211, 238, 0.1); }
.timeline-line { width: 1px; flex: 1; margin: 1rem 0; background: linear-gradient(rgba(34, 211, 238, 0.3), transparent); }
.timeline-body { padding-bottom: 3rem; }
.timeline-meta { display: flex; gap: 0.75rem; align-items: center; margin-bottom: 0.5rem; }
.timeline-phase { font-size: 0.75rem; font-weight: 700; color: var(--primary); text-transform: uppercase; }
.timeline-duration { font-size: 0.75rem; color: var(--text-tertiary); background: rgba(255,255,255,0.05);
    padding: 0.2rem 0.5rem; border-radius: 999px; }
.timeline-deliverables { color: var(--text-secondary); font-size: 0.9rem; padding-left: 1rem; }

.fit-grid { display: grid; gap: 2rem; max-width: 64rem; margin: 0 auto; }
@media (min-width: 768px) { .fit-grid { grid-template-columns: 1fr 1fr; } }
.fit-card { padding: 2rem; border-radius: 1rem; }
.fit-card.tone-accent { border: 1px solid rgba(52, 211, 153, 0.1); }
.fit-card.tone-alert { border: 1px solid rgba(249, 115, 22, 0.1); }
.fit-card.tone-alert .fit-mark { color: var(--alert); }
.fit-list { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 1rem; color: var(--text-secondary); }
.fit-list li { display: flex; gap: 0.75rem; }
.fine-print, .testimonial, .faq-footer { text-align: center; color: var(--text-tertiary); font-size: 0.9rem;
    max-width: 42rem; margin: 3rem auto 0; }
.testimonial-author { display: block; margin-top: 0.5rem; color: var(--text-secondary); }

.insights-header { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: flex-end; gap: 1.5rem; margin-bottom: 3rem; }
.post-card { display: block; padding: 1.5rem; border-radius: 1rem; border: 1px solid rgba(255,255,255,0.05);
    background: linear-gradient(rgba(255,255,255,0.03), transparent); }
.post-card:hover { border-color: rgba(255,255,255,0.1); }
.post-date { font-size: 0.75rem; color: var(--text-tertiary); margin-bottom: 0.75rem; }
.post-excerpt { color: var(--text-secondary); font-size: 0.9rem; }
.post-footer { display: flex; justify-content: space-between; align-items: center; font-size: 0.75rem; color: var(--text-tertiary); }
.post-engagement { display: flex; gap: 0.75rem; }
.post-read-more { color: var(--primary); opacity: 0; transition: opacity 0.3s; font-size: 0.85rem; }
.post-card:hover .post-read-more { opacity: 1; }
.insights-cta { text-align: center; margin-top: 3rem; }

.faq-list { padding: 0 2rem; }
.faq-item { border-bottom: 1px solid rgba(255,255,255,0.05); }
.faq-item:last-child { border-bottom: none; }
.faq-question { width: 100%; padding: 1.5rem 0; display: flex; justify-content: space-between; gap: 1rem;
    background: none; border: none; color: var(--text); font-size: 1.1rem; font-weight: 500; text-align: left; cursor: pointer; }
.faq-question:hover, .faq-item.open .toggle-icon { color: var(--primary); }
.faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease-out, padding 0.3s; }
.faq-item.open .faq-answer { max-height: 24rem; padding-bottom: 1.5rem; }
.faq-answer p { margin: 0; color: var(--text-secondary); padding-right: 3rem; }

.booking-card { padding: 3rem; border-radius: 1.5rem; border: 1px solid rgba(255,255,255,0.05);
    background: linear-gradient(135deg, var(--secondary), rgba(18, 18, 26, 0.8)); }
.booking-columns { display: grid; gap: 2rem; align-items: center; }
@media (min-width: 768px) { .booking-columns { grid-template-columns: 1fr 1fr; } }
.booking-cta { display: flex; flex-direction: column; align-items: center; text-align: center; }

.scroll-to-top { position: fixed; right: 2rem; bottom: 2rem; z-index: 40; width: 3rem; height: 3rem;
    border-radius: 0.75rem; border: 1px solid rgba(255,255,255,0.1); background: rgba(18, 18, 26, 0.9);
    color: var(--text); font-size: 1.25rem; cursor: pointer; opacity: 0; pointer-events: none;
    transform: translateY(1rem); transition: opacity 0.3s, transform 0.3s; }
.scroll-to-top.is-visible { opacity: 1; pointer-events: auto; transform: none; }

.site-footer { border-top: 1px solid rgba(255,255,255,0.05); }
.footer-main { max-width: 1200px; margin: 0 auto; padding: 4rem 1.5rem; display: grid; gap: 3rem; }
@media (min-width: 1024px) { .footer-main { grid-template-columns: 2fr 1fr 1fr; } }
.footer-blurb { color: var(--text-secondary); max-width: 28rem; }
.footer-socials { display: flex; gap: 1rem; }
.social-link { padding: 0.5rem 0.9rem; border-radius: 0.5rem; background: rgba(255,255,255,0.05);
    color: var(--text-secondary); font-size: 0.85rem; }
.social-link:hover { color: var(--text); }
.footer-column ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; color: var(--text-secondary); }
.footer-small { color: var(--text-secondary); font-size: 0.9rem; }
.footer-cta { color: var(--primary); font-weight: 500; }
.footer-bottom { border-top: 1px solid rgba(255,255,255,0.05); max-width: 1200px; margin: 0 auto; padding: 1.5rem;
    display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1rem; font-size: 0.85rem; color: var(--text-tertiary); }
.footer-legal { display: flex; gap: 1.5rem; }

.legal-header { border-bottom: 1px solid rgba(255,255,255,0.05); padding: 1.5rem 0; }
.back-link { color: var(--text-secondary); }
.back-link:hover { color: var(--text); }
.legal-body { max-width: 48rem; padding-top: 4rem; padding-bottom: 4rem; }
.legal-body h1 { font-size: clamp(2.25rem, 5vw, 3rem); }
.legal-prose section { margin-top: 2rem; }
.legal-prose h2 { font-size: 1.5rem; }
.legal-prose h3 { font-size: 1.2rem; }
.legal-prose p, .legal-prose li { color: var(--text-secondary); }
.contact-card { margin-top: 1rem; padding: 1.5rem; border-radius: 0.75rem; background: var(--secondary);
    border: 1px solid rgba(255,255,255,0.05); }
.contact-card p { margin: 0.25rem 0; }
.legal-footer { border-top: 1px solid rgba(255,255,255,0.05); padding: 2rem 0; text-align: center;
    font-size: 0.85rem; color: var(--text-tertiary); }
"#;
