// Static copy for the marketing pages. Team members and testimonials come
// from the backend instead.

pub const HERO_LEAD: &str = "We build software that is";
pub static HERO_WORDS: [&str; 5] = ["reliable", "fast", "accessible", "secure", "beautiful"];

pub struct Offering {
    pub slug: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub solutions: &'static [&'static str],
    pub gradient: (&'static str, &'static str),
}

pub static SERVICES: [Offering; 4] = [
    Offering {
        slug: "web-development",
        title: "Web Development",
        icon: "🌐",
        description: "Fast, accessible sites and web apps built to last past the launch party.",
        solutions: &["Marketing sites", "Customer portals", "Progressive web apps"],
        gradient: ("#6366f1", "#8b5cf6"),
    },
    Offering {
        slug: "mobile-apps",
        title: "Mobile Apps",
        icon: "📱",
        description: "Native-feeling apps for iOS and Android from a single team.",
        solutions: &["Cross-platform apps", "Offline-first sync", "App store releases"],
        gradient: ("#ec4899", "#f43f5e"),
    },
    Offering {
        slug: "cloud-infrastructure",
        title: "Cloud Infrastructure",
        icon: "☁️",
        description: "Infrastructure as code, observability and cost control.",
        solutions: &["Migrations", "CI/CD pipelines", "Monitoring"],
        gradient: ("#06b6d4", "#3b82f6"),
    },
    Offering {
        slug: "product-design",
        title: "Product Design",
        icon: "✏️",
        description: "Research, prototypes and design systems your developers will like.",
        solutions: &[],
        gradient: ("#f59e0b", "#ef4444"),
    },
];

pub static INDUSTRIES: [Offering; 3] = [
    Offering {
        slug: "industries/healthcare",
        title: "Healthcare",
        icon: "🩺",
        description: "Patient-facing tools that respect privacy rules from day one.",
        solutions: &["Appointment booking", "Telehealth"],
        gradient: ("#10b981", "#06b6d4"),
    },
    Offering {
        slug: "industries/retail",
        title: "Retail",
        icon: "🛍️",
        description: "Storefronts and inventory systems that survive the holiday rush.",
        solutions: &["E-commerce", "Point of sale integrations"],
        gradient: ("#f43f5e", "#f59e0b"),
    },
    Offering {
        slug: "industries/finance",
        title: "Finance",
        icon: "📈",
        description: "Dashboards and back-office automation with an audit trail.",
        solutions: &[],
        gradient: ("#8b5cf6", "#6366f1"),
    },
];

pub struct Milestone {
    pub title: &'static str,
    pub text: &'static str,
}

pub static MILESTONES: [Milestone; 5] = [
    Milestone {
        title: "2016",
        text: "Two developers, one borrowed desk and a first client who still works with us.",
    },
    Milestone {
        title: "2018",
        text: "Opened the design practice and shipped our first mobile app.",
    },
    Milestone {
        title: "2020",
        text: "Went remote-first and grew to a team spread over four time zones.",
    },
    Milestone {
        title: "2022",
        text: "Started dedicated healthcare and finance teams.",
    },
    Milestone {
        title: "Today",
        text: "Forty people building software for clients on three continents.",
    },
];

pub fn find_service(slug: &str) -> Option<&'static Offering> {
    SERVICES.iter().find(|s| s.slug == slug)
}

/// Looks up an industry by the path segment after `/industries/`.
pub fn find_industry(name: &str) -> Option<&'static Offering> {
    INDUSTRIES
        .iter()
        .find(|i| i.slug.strip_prefix("industries/") == Some(name))
}
