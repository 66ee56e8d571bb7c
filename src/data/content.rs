//! Page copy that is not part of the company profile or the roster.

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub src: &'static str,
    /// Also rendered as the figure caption.
    pub alt: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoVideo {
    pub poster: &'static str,
    pub src: &'static str,
    pub mime: &'static str,
}

/// One entry of the header menu.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub static NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Services", anchor: "services" },
    NavItem { label: "About Us", anchor: "about" },
    NavItem { label: "Team", anchor: "team" },
    NavItem { label: "Media", anchor: "media" },
    NavItem { label: "Contact", anchor: "contact" },
];

pub static SERVICES: &[Service] = &[
    Service {
        title: "Corporate Website / Brand Site",
        description: "Build a clear brand presence and conversion path with multi-device support.",
        points: &[
            "Information architecture & content strategy",
            "Responsive design & performance optimization",
            "Basic SEO setup",
        ],
    },
    Service {
        title: "Web Application Development",
        description: "Administrative systems and client portals built around real business workflows.",
        points: &[
            "React component-based architecture",
            "Authentication & routing solutions",
            "Observability and error handling",
        ],
    },
    Service {
        title: "Data Visualization / IoT Dashboard",
        description: "Transform data into intuitive interfaces for faster and smarter decisions.",
        points: &[
            "KPI definition and dashboard planning",
            "Multi-device large-screen support",
            "Alerting and real-time updates",
        ],
    },
];

pub static STATEMENTS: &[Statement] = &[
    Statement {
        title: "Mission",
        body: "We help clients turn ideas into scalable products through reliable engineering and thoughtful design.",
    },
    Statement {
        title: "Vision",
        body: "To be a long-term partner enabling small teams to build outstanding digital experiences.",
    },
];

pub static WORKING_PRINCIPLES: &[&str] = &[
    "Clear requirements and acceptance criteria",
    "Design-first development to reduce rework",
    "Monitoring, feedback, and continuous improvement",
];

pub static HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1555066931-4365d14bab8c?auto=format&fit=crop&w=1600&q=70";

pub static GALLERY: &[MediaItem] = &[
    MediaItem {
        src: "https://images.unsplash.com/photo-1559028012-481c04fa702d?auto=format&fit=crop&w=1200&q=70",
        alt: "Product prototype and design review session",
    },
    MediaItem {
        src: "https://images.unsplash.com/photo-1553877522-43269d4ea984?auto=format&fit=crop&w=1200&q=70",
        alt: "Team collaboration and agile workflow board",
    },
    MediaItem {
        src: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=1200&q=70",
        alt: "Data dashboard and visualization screen",
    },
];

pub static DEMO_VIDEO: DemoVideo = DemoVideo {
    poster: "https://images.unsplash.com/photo-1527689368864-3a821dbccc34?auto=format&fit=crop&w=1200&q=70",
    src: "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4",
    mime: "video/mp4",
};
