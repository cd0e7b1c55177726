use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::error::AppError;

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub result: &'static str,
}

pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🎯",
        title: "On-Ground Brand Activations",
        description: "Immersive, high-impact experiences that connect your brand with real audiences in real time.",
    },
    Service {
        icon: "🛠️",
        title: "Custom Campaigns",
        description: "Tailor-made physical marketing campaigns designed to spark engagement and drive results.",
    },
    Service {
        icon: "🎪",
        title: "Experiential Pop-Ups",
        description: "Interactive setups that bring your brand story to life — fun, bold, and built for buzz.",
    },
    Service {
        icon: "🔗",
        title: "Brand Integrations",
        description: "Seamless placement of your brand across event properties, ensuring visibility and relevance.",
    },
    Service {
        icon: "🎤",
        title: "Artist Endorsements",
        description: "Get the right voices behind your brand with curated collaborations and influencer tie-ups.",
    },
    Service {
        icon: "📣",
        title: "Digital Exposure and Social Buzz",
        description: "Strategic collaborations that put your brand center stage at youth-driven events and cultural hotspots.",
    },
    Service {
        icon: "📈",
        title: "Data & Impact Reporting",
        description: "Post-activation insights and analytics to measure performance, reach, and ROI.",
    },
];

const PROJECTS: &[Project] = &[
    Project {
        title: "Jungle Juice Co.",
        category: "Branding",
        description: "Rebranding for an organic juice company",
        result: "300% growth in 6 months",
    },
    Project {
        title: "Banana Tech",
        category: "Digital Marketing",
        description: "Digital marketing for a tech startup",
        result: "2M+ impressions",
    },
    Project {
        title: "Monkey Fitness",
        category: "Social Media",
        description: "Social media strategy for a fitness brand",
        result: "50K new followers",
    },
    Project {
        title: "Treetop Café",
        category: "Web Design",
        description: "Website design for a boutique café",
        result: "120% more bookings",
    },
    Project {
        title: "Vine Ventures",
        category: "Content",
        description: "Content strategy for a VC firm",
        result: "3x engagement",
    },
    Project {
        title: "Ape Apparel",
        category: "E-commerce",
        description: "E-commerce strategy for clothing brand",
        result: "75% revenue increase",
    },
];

const STEPS: &[Step] = &[
    Step {
        icon: "🔍",
        title: "Discovery",
        description: "We learn about your brand and goals",
    },
    Step {
        icon: "🧠",
        title: "Strategy",
        description: "We craft a custom plan for your success",
    },
    Step {
        icon: "🛠️",
        title: "Execution",
        description: "We implement with precision and creativity",
    },
    Step {
        icon: "📈",
        title: "Growth",
        description: "We measure and optimize for continuous improvement",
    },
];

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    services: &'static [Service],
    projects: &'static [Project],
    steps: &'static [Step],
}

/// GET / - the whole single-page site.
pub async fn page() -> Result<impl IntoResponse, AppError> {
    let template = IndexTemplate {
        services: SERVICES,
        projects: PROJECTS,
        steps: STEPS,
    };

    Ok(Html(template.render()?))
}
