use stylist::{css, StyleSource};

/// Page-wide rules shared by every section. Component-specific rules live
/// next to their component.
pub fn global_style() -> StyleSource {
    css!(
        r#"
        * {
            box-sizing: border-box;
        }
        html, body {
            margin: 0;
            padding: 0;
            background: #0b1020;
            color: #e2e8f0;
            font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
        }
        a {
            color: #67e8f9;
        }
        .container {
            max-width: 1120px;
            margin: 0 auto;
            padding: 0 1rem;
        }
        .muted {
            color: #94a3b8;
        }
        .tiny {
            font-size: 0.8rem;
        }
        .h1 {
            font-size: 3.2rem;
            line-height: 1.15;
            margin: 1rem 0;
        }
        .h2 {
            font-size: 2.1rem;
            margin: 0.25rem 0 1.5rem;
        }
        .h3 {
            font-size: 1.15rem;
            margin: 0 0 0.5rem;
        }
        .accent {
            color: #67e8f9;
        }
        .lead {
            font-size: 1.2rem;
            color: #cbd5e1;
        }
        .pill {
            display: inline-block;
            padding: 0.3rem 0.8rem;
            border-radius: 999px;
            border: 1px solid rgba(124, 58, 237, 0.5);
            font-size: 0.85rem;
            color: #c4b5fd;
        }
        .btn {
            display: inline-block;
            padding: 0.75rem 1.4rem;
            border-radius: 10px;
            font-weight: 600;
            text-decoration: none;
            cursor: pointer;
            border: 1px solid transparent;
        }
        .btn.primary {
            background: linear-gradient(135deg, #7c3aed, #06b6d4);
            color: #fff;
        }
        .btn.ghost {
            border-color: rgba(148, 163, 184, 0.4);
            color: #e2e8f0;
        }
        .hero {
            padding: 5rem 0 3rem;
        }
        .hero-inner {
            display: grid;
            grid-template-columns: 1.1fr 0.9fr;
            gap: 3rem;
            align-items: center;
        }
        .hero-ctas {
            display: flex;
            gap: 1rem;
            margin: 1.5rem 0;
        }
        .hero-media {
            position: relative;
            border-radius: 20px;
            overflow: hidden;
        }
        .hero-img {
            width: 100%;
            display: block;
        }
        .hero-overlay {
            position: absolute;
            top: 0;
            left: 0;
            width: 100%;
            opacity: 0.35;
        }
        .hero-badge {
            position: absolute;
            left: 1rem;
            bottom: 1rem;
            padding: 0.75rem 1rem;
            border-radius: 12px;
            background: rgba(11, 16, 32, 0.8);
        }
        .badge-title {
            font-weight: 700;
        }
        .stats {
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 0.75rem;
        }
        .stat-card, .card, .panel, .about-card, .team-card, .video-card {
            background: rgba(30, 41, 59, 0.6);
            border: 1px solid rgba(148, 163, 184, 0.15);
            border-radius: 14px;
            padding: 1.25rem;
            transition: transform 0.2s ease, border-color 0.2s ease;
        }
        .hover-tip:hover {
            transform: translateY(-2px);
            border-color: rgba(6, 182, 212, 0.45);
        }
        .stat-value {
            font-weight: 700;
        }
        .stat-label {
            color: #94a3b8;
            font-size: 0.85rem;
        }
        .section {
            padding: 4.5rem 0;
        }
        .eyebrow {
            text-transform: uppercase;
            letter-spacing: 0.12em;
            font-size: 0.8rem;
            color: #06b6d4;
        }
        .grid3 {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.25rem;
        }
        .two-col, .contact, .media-layout, .about {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1.25rem;
            margin-bottom: 1.25rem;
        }
        .list {
            padding-left: 1.2rem;
        }
        .dl-row {
            display: flex;
            justify-content: space-between;
            gap: 1rem;
            padding: 0.4rem 0;
            border-bottom: 1px solid rgba(148, 163, 184, 0.12);
        }
        .dl-row dd {
            margin: 0;
            text-align: right;
        }
        .team-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
            gap: 1.25rem;
        }
        .avatar {
            width: 100%;
            aspect-ratio: 1;
            object-fit: cover;
            border-radius: 12px;
        }
        .team-name {
            font-weight: 700;
            margin-top: 0.75rem;
        }
        .team-role {
            color: #06b6d4;
            font-size: 0.9rem;
        }
        .media-grid {
            display: grid;
            gap: 0.75rem;
        }
        .media-figure {
            margin: 0;
        }
        .media-img, .video {
            width: 100%;
            border-radius: 10px;
            display: block;
        }
        .media-cap {
            font-size: 0.85rem;
            color: #94a3b8;
        }
        .form {
            display: grid;
            gap: 1rem;
        }
        .field {
            display: grid;
            gap: 0.35rem;
        }
        .field input, .field textarea {
            padding: 0.65rem 0.8rem;
            border-radius: 8px;
            border: 1px solid rgba(148, 163, 184, 0.3);
            background: rgba(15, 23, 42, 0.8);
            color: inherit;
            font: inherit;
        }
        .footer {
            padding: 2rem 0;
            border-top: 1px solid rgba(148, 163, 184, 0.12);
        }
        .footer-inner {
            display: flex;
            justify-content: space-between;
            flex-wrap: wrap;
            gap: 1rem;
        }
        @media (max-width: 900px) {
            .hero-inner, .grid3, .two-col, .contact, .media-layout, .about {
                grid-template-columns: 1fr;
            }
            .h1 {
                font-size: 2.2rem;
            }
        }
        "#
    )
}
