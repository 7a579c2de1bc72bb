// Copy and presentation data for the page sections.

pub const COMPANY: &str = "TechNova";
pub const COMPANY_FULL: &str = "TechNova Solutions";

pub const HERO_TAGLINES: &[&str] = &[
    "Web Development",
    "AI Solutions",
    "Digital Marketing",
    "Creative Design",
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "150+", label: "Projects", icon: "fas fa-rocket" },
    Stat { number: "50+", label: "Clients", icon: "fas fa-users" },
    Stat { number: "5+", label: "Years", icon: "fas fa-calendar" },
    Stat { number: "24/7", label: "Support", icon: "fas fa-headset" },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub color: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "fas fa-laptop-code",
        title: "Web Development",
        description: "Custom websites and web applications built with modern technologies.",
        features: &["React & Vue", "Rust & WebAssembly", "Progressive Web Apps"],
        color: "#6c63ff",
    },
    Service {
        icon: "fas fa-video",
        title: "Video Editing",
        description: "Professional video editing for marketing and corporate needs.",
        features: &["Promo videos", "Motion graphics", "Color grading"],
        color: "#ff6584",
    },
    Service {
        icon: "fas fa-palette",
        title: "Graphic Design",
        description: "Creative design solutions including logos and branding.",
        features: &["Logo design", "Brand identity", "Print material"],
        color: "#4CAF50",
    },
    Service {
        icon: "fas fa-search",
        title: "SEO",
        description: "Search engine optimization to improve online visibility.",
        features: &["Keyword research", "Technical audits", "Link building"],
        color: "#2196F3",
    },
    Service {
        icon: "fas fa-bullhorn",
        title: "Marketing",
        description: "Digital marketing strategies to grow your brand.",
        features: &["Social media", "Email campaigns", "Paid ads"],
        color: "#FF9800",
    },
    Service {
        icon: "fab fa-wordpress",
        title: "WordPress",
        description: "Custom WordPress development and plugins.",
        features: &["Custom themes", "Plugin development", "WooCommerce"],
        color: "#21759b",
    },
    Service {
        icon: "fas fa-robot",
        title: "AI Agents",
        description: "Intelligent AI solutions and automation systems.",
        features: &["Chatbots", "Workflow automation", "LLM integration"],
        color: "#9C27B0",
    },
    Service {
        icon: "fas fa-globe",
        title: "Large Scale Web",
        description: "Scalable solutions for high-traffic platforms.",
        features: &["Microservices", "Load balancing", "Cloud native"],
        color: "#607D8B",
    },
    Service {
        icon: "fas fa-mobile-alt",
        title: "App Development",
        description: "Native and cross-platform mobile applications.",
        features: &["iOS & Android", "Flutter", "React Native"],
        color: "#E91E63",
    },
    Service {
        icon: "fas fa-cogs",
        title: "Maintenance",
        description: "Ongoing support and maintenance services.",
        features: &["24/7 monitoring", "Security updates", "Backups"],
        color: "#795548",
    },
];

pub struct ProcessStep {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Discovery",
        icon: "fas fa-lightbulb",
        description: "We learn your business, your users and the problem worth solving.",
    },
    ProcessStep {
        title: "Planning",
        icon: "fas fa-drafting-compass",
        description: "Scope, architecture and milestones agreed before a line of code is written.",
    },
    ProcessStep {
        title: "Development",
        icon: "fas fa-code",
        description: "Short iterations with a working build you can click through every week.",
    },
    ProcessStep {
        title: "Testing",
        icon: "fas fa-vial",
        description: "Automated suites and hands-on QA across devices and browsers.",
    },
    ProcessStep {
        title: "Launch",
        icon: "fas fa-rocket",
        description: "Deployment, monitoring and a support plan that keeps things running.",
    },
];

pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const TECH_STACK: &[Technology] = &[
    Technology { name: "React", icon: "fab fa-react" },
    Technology { name: "Node.js", icon: "fab fa-node-js" },
    Technology { name: "Python", icon: "fab fa-python" },
    Technology { name: "Rust", icon: "fab fa-rust" },
    Technology { name: "AWS", icon: "fab fa-aws" },
    Technology { name: "Docker", icon: "fab fa-docker" },
    Technology { name: "WordPress", icon: "fab fa-wordpress" },
    Technology { name: "Android", icon: "fab fa-android" },
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        category: "Web Development",
        image: "project1",
        description: "Full-featured online store with payment integration",
    },
    Project {
        title: "AI Chatbot",
        category: "AI Solutions",
        image: "project2",
        description: "Intelligent customer service automation",
    },
    Project {
        title: "Mobile Banking App",
        category: "App Development",
        image: "project3",
        description: "Secure financial management application",
    },
    Project {
        title: "Corporate Website",
        category: "Web Design",
        image: "project4",
        description: "Modern responsive corporate website",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechStart Inc",
        content: "TechNova transformed our business with their innovative solutions. Their team is professional and delivered beyond our expectations.",
        avatar: "SJ",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Marketing Director",
        content: "The website they built for us increased our conversions by 150%. Their attention to detail is remarkable.",
        avatar: "MC",
    },
    Testimonial {
        name: "Emily Davis",
        role: "Startup Founder",
        content: "Working with TechNova was a game-changer. Their AI solutions automated our processes and saved us countless hours.",
        avatar: "ED",
    },
];

/// (icon, heading, value)
pub const CONTACT_DETAILS: &[(&str, &str, &str)] = &[
    ("fas fa-envelope", "Email", "info@technova.com"),
    ("fas fa-phone", "Phone", "+1 (555) 123-4567"),
    ("fas fa-map-marker-alt", "Address", "123 Tech Street, Innovation City"),
];

/// (value, label) for the contact form's service picker.
pub const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("web-development", "Web Development"),
    ("ai-agents", "AI Agents"),
    ("app-development", "App Development"),
    ("seo", "SEO & Marketing"),
];

pub const SOCIAL_PLATFORMS: &[&str] = &["facebook-f", "twitter", "linkedin-in", "github"];

pub const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("Services", &["Web Development", "AI Agents", "App Development", "SEO"]),
    ("Company", &["About Us", "Portfolio", "Careers", "Blog"]),
    ("Contact", &["info@technova.com", "+1 (555) 123-4567", "Innovation City", "Support"]),
];
