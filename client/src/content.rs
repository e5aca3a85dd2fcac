//! Static profile content rendered by the section components.
//!
//! Copy is placeholder. Swap these constants to re-skin the site; no
//! component hard-codes text that belongs here.

pub const NAME: &str = "Alex Rivera";
pub const ROLE: &str = "Software Engineer";
pub const TAGLINE: &str = "I build reliable web services and the tooling around them.";

pub const ABOUT: &[&str] = &[
    "I'm a software engineer who enjoys turning loosely defined problems into small, \
     dependable systems. Most of my work sits between the browser and the data store.",
    "Outside of work I contribute to open source, write about what I learn, and spend \
     too much time tuning my editor.",
];

pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup { title: "Languages", items: &["Rust", "TypeScript", "Go", "SQL"] },
    SkillGroup { title: "Web", items: &["Leptos", "Axum", "React", "HTML & CSS"] },
    SkillGroup { title: "Infrastructure", items: &["Docker", "Kubernetes", "PostgreSQL", "GitHub Actions"] },
];

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Realtime Whiteboard",
        summary: "Collaborative canvas with websocket sync, presence cursors and server-side persistence.",
        tags: &["Rust", "Axum", "WebSocket"],
        url: Some("https://github.com/example/whiteboard"),
    },
    Project {
        title: "Log Shipper",
        summary: "Small agent that tails files, batches lines and forwards them with backpressure.",
        tags: &["Go", "gRPC"],
        url: Some("https://github.com/example/log-shipper"),
    },
    Project {
        title: "This Site",
        summary: "Server-rendered Leptos app with hydration, theme persistence and scroll reveals.",
        tags: &["Rust", "Leptos", "WASM"],
        url: None,
    },
];

pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT_BLURB: &str = "Open to new roles and interesting side projects. Say hello.";

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink { label: "Email", href: "mailto:hello@example.com" },
    ContactLink { label: "GitHub", href: "https://github.com/example" },
    ContactLink { label: "LinkedIn", href: "https://www.linkedin.com/in/example" },
];
