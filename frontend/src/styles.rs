/// Shared stylesheet for every landing page variant. Palettes live in the
/// `theme-*` blocks and only swap custom properties.
pub const LANDING_CSS: &str = r#"
    .landing {
        --accent: #34d399;
        --accent-strong: #10b981;
        --accent-soft: rgba(52, 211, 153, 0.15);
        --surface-dark: #1e293b;
        --surface-darker: #0f172a;
        --surface-light: #ffffff;
        --surface-muted: #f8fafc;
        --text-dark: #0f172a;
        --text-muted: #64748b;
        --text-on-dark: #ffffff;
        --radius: 1rem;
        min-height: 100vh;
        overflow-x: hidden;
        background: var(--surface-light);
        color: var(--text-dark);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }

    .landing.theme-classic {
        --accent: #d97706;
        --accent-strong: #b45309;
        --accent-soft: rgba(217, 119, 6, 0.12);
        --surface-dark: #3f2d20;
        --surface-darker: #2a1d14;
        --surface-muted: #fdf8f3;
        font-family: Georgia, "Times New Roman", serif;
    }

    .landing.theme-atelier {
        --accent: #94a3b8;
        --accent-strong: #475569;
        --accent-soft: rgba(148, 163, 184, 0.15);
        --surface-dark: #18181b;
        --surface-darker: #09090b;
        --surface-muted: #fafafa;
        --radius: 0.25rem;
    }

    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }

    /* Progress bar */
    .scroll-progress {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 4px;
        z-index: 100;
        background: rgba(51, 65, 85, 0.6);
    }
    .scroll-progress-fill {
        height: 100%;
        background: linear-gradient(90deg, var(--accent), var(--accent-strong));
        transition: width 0.1s linear;
    }

    /* Header */
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: transparent;
        transition: all 0.5s ease;
    }
    .site-header.scrolled {
        background: rgba(30, 41, 59, 0.9);
        backdrop-filter: blur(20px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.25);
    }
    .header-bar {
        display: flex;
        align-items: center;
        justify-content: space-between;
        height: 72px;
    }
    .header-logo {
        background: none;
        border: none;
        color: var(--text-on-dark);
        font-size: 1.4rem;
        font-weight: 800;
        cursor: pointer;
    }
    .header-nav {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        background: none;
        border: none;
        color: rgba(255, 255, 255, 0.8);
        font-size: 0.9rem;
        cursor: pointer;
    }
    .nav-link:hover {
        color: var(--text-on-dark);
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: var(--text-on-dark);
        font-size: 1.5rem;
        cursor: pointer;
    }
    .mobile-menu {
        max-height: 0;
        overflow: hidden;
        transition: max-height 0.5s ease;
        background: var(--surface-dark);
    }
    .mobile-menu.open {
        max-height: 24rem;
    }
    .mobile-menu .nav-link {
        display: block;
        width: 100%;
        text-align: left;
        padding: 0.75rem 1.5rem;
    }

    .pill-button {
        background: var(--accent-strong);
        color: var(--text-on-dark);
        border: none;
        border-radius: 999px;
        padding: 0.75rem 1.75rem;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
        text-decoration: none;
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
    }
    .pill-button:hover {
        transform: scale(1.05);
        box-shadow: 0 10px 30px var(--accent-soft);
    }
    .pill-button.outline {
        background: transparent;
        border: 1px solid rgba(255, 255, 255, 0.3);
    }

    /* Hero */
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding-top: 4rem;
        background: var(--surface-dark);
        color: var(--text-on-dark);
        overflow: hidden;
    }
    .hero-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .hero-badge {
        color: var(--accent);
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }
    .hero h1 {
        font-size: clamp(2.5rem, 6vw, 4.5rem);
        font-weight: 900;
        line-height: 1.05;
    }
    .accent-text {
        color: var(--accent);
    }
    .hero-subtitle {
        color: #94a3b8;
        font-size: 1.1rem;
        max-width: 32rem;
    }
    .hero-actions {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
    }
    .hero-stats {
        display: flex;
        gap: 2.5rem;
        margin-top: 2rem;
    }
    .hero-stat-value {
        font-size: 2rem;
        font-weight: 800;
    }
    .hero-stat-label {
        color: #94a3b8;
        font-size: 0.8rem;
    }
    .hero-image img {
        width: 100%;
        border-radius: calc(var(--radius) * 1.5);
        box-shadow: 0 30px 60px rgba(0, 0, 0, 0.4);
    }

    /* Marquee */
    .marquee {
        overflow: hidden;
        background: var(--accent-strong);
        color: var(--text-on-dark);
        padding: 0.9rem 0;
    }
    .marquee-track {
        display: flex;
        width: max-content;
        animation: marquee 30s linear infinite;
    }
    .marquee-item {
        padding: 0 2rem;
        white-space: nowrap;
        font-weight: 600;
    }
    @keyframes marquee {
        0% { transform: translateX(0); }
        100% { transform: translateX(-50%); }
    }

    /* Sections */
    .section {
        padding: 6rem 0;
    }
    .section.muted {
        background: var(--surface-muted);
    }
    .section.dark {
        background: var(--surface-darker);
        color: var(--text-on-dark);
    }
    .section-eyebrow {
        color: var(--accent-strong);
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }
    .section-title {
        font-size: clamp(2rem, 4vw, 3rem);
        font-weight: 900;
        margin: 0.5rem 0 1rem;
    }
    .section-lead {
        color: var(--text-muted);
        max-width: 40rem;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
        margin-top: 3rem;
    }
    .card {
        padding: 2rem;
        border-radius: var(--radius);
        background: var(--surface-light);
        border: 1px solid #f1f5f9;
    }
    .card.dark {
        background: var(--surface-darker);
        color: var(--text-on-dark);
        border-color: transparent;
    }
    .card-icon {
        font-size: 1.75rem;
    }
    .feature-list {
        list-style: none;
        padding: 0;
    }
    .feature-list li::before {
        content: "✓ ";
        color: var(--accent-strong);
    }

    /* Reveal treatments */
    .reveal {
        transition: opacity 0.7s ease, transform 0.7s ease;
        opacity: 0;
    }
    .reveal-slide {
        transform: translateY(3rem);
    }
    .reveal-scale {
        transform: scale(0.94);
    }
    .reveal.is-visible {
        opacity: 1;
        transform: none;
    }

    /* Stats */
    .stats-band {
        background: var(--surface-darker);
        color: var(--text-on-dark);
        padding: 4rem 0;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        text-align: center;
    }
    .stat-value {
        font-size: 3rem;
        font-weight: 900;
        color: var(--accent);
        font-variant-numeric: tabular-nums;
    }

    /* Projects */
    .project-card {
        position: relative;
        overflow: hidden;
        border-radius: var(--radius);
        min-height: 22rem;
        color: var(--text-on-dark);
    }
    .project-card img {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.7s ease;
    }
    .project-card:hover img {
        transform: scale(1.08);
    }
    .project-caption {
        position: absolute;
        bottom: 0;
        left: 0;
        right: 0;
        padding: 1.5rem;
        background: linear-gradient(transparent, rgba(0, 0, 0, 0.8));
    }

    /* Testimonials */
    .stars {
        color: #fbbf24;
        letter-spacing: 0.15em;
    }
    .avatar {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        font-weight: 800;
        color: var(--text-on-dark);
    }
    .accent-emerald { background: linear-gradient(135deg, #34d399, #14b8a6); }
    .accent-blue { background: linear-gradient(135deg, #60a5fa, #06b6d4); }
    .accent-violet { background: linear-gradient(135deg, #a78bfa, #a855f7); }

    /* CTA banner */
    .cta-banner {
        padding: 6rem 0;
        text-align: center;
        background: var(--surface-dark);
        color: var(--text-on-dark);
    }

    /* Contact */
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
    }
    .contact-channel {
        display: flex;
        gap: 1rem;
        align-items: center;
        margin-bottom: 1.25rem;
    }
    .contact-form {
        display: grid;
        gap: 1rem;
        padding: 2rem;
        border-radius: var(--radius);
        background: var(--surface-muted);
    }
    .contact-form label {
        font-size: 0.8rem;
        font-weight: 600;
        color: var(--text-muted);
    }
    .contact-form input,
    .contact-form select,
    .contact-form textarea {
        width: 100%;
        padding: 0.75rem 1rem;
        border: 1px solid #e2e8f0;
        border-radius: calc(var(--radius) * 0.75);
        font: inherit;
    }
    .form-notice {
        color: var(--accent-strong);
        font-weight: 600;
    }

    /* Footer */
    .site-footer {
        background: var(--surface-darker);
        color: #94a3b8;
        padding: 4rem 0 2rem;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr 1fr;
        gap: 2rem;
    }
    .footer-link {
        background: none;
        border: none;
        color: inherit;
        padding: 0.25rem 0;
        cursor: pointer;
        text-decoration: none;
        font: inherit;
    }
    .footer-link:hover {
        color: var(--text-on-dark);
    }
    .footer-bottom {
        display: flex;
        justify-content: space-between;
        flex-wrap: wrap;
        gap: 1rem;
        margin-top: 3rem;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }

    /* Messaging button */
    .whatsapp-fab {
        position: fixed;
        right: 1.5rem;
        bottom: 1.5rem;
        z-index: 60;
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 50%;
        background: #25d366;
        color: #ffffff;
        font-size: 1.6rem;
        display: flex;
        align-items: center;
        justify-content: center;
        text-decoration: none;
        box-shadow: 0 10px 30px rgba(37, 211, 102, 0.4);
        transition: transform 0.3s ease;
    }
    .whatsapp-fab:hover {
        transform: scale(1.1);
    }

    /* Legal modals */
    .legal-modal {
        position: fixed;
        inset: 0;
        z-index: 200;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
    }
    .legal-modal-backdrop {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
        backdrop-filter: blur(4px);
    }
    .legal-modal-box {
        position: relative;
        max-width: 48rem;
        max-height: 85vh;
        overflow-y: auto;
        background: var(--surface-light);
        border-radius: var(--radius);
        padding: 2rem;
    }
    .legal-modal-header {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        gap: 1rem;
    }
    .legal-modal-close {
        background: none;
        border: none;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .legal-footnote {
        margin-top: 2rem;
        font-size: 0.85rem;
        color: var(--text-muted);
    }

    @media (max-width: 900px) {
        .header-nav,
        .header-quote {
            display: none;
        }
        .burger-menu {
            display: block;
        }
        .hero-grid,
        .contact-grid {
            grid-template-columns: 1fr;
        }
        .stats-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .footer-grid {
            grid-template-columns: 1fr 1fr;
        }
    }

    @media (prefers-reduced-motion: reduce) {
        .reveal,
        .marquee-track {
            transition: none;
            animation: none;
            opacity: 1;
            transform: none;
        }
    }
"#;
