//! Market insights and featured companies shown on the landing page.
//! Display-only constants; nothing here feeds the search.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendingSkill {
    pub name: &'static str,
    pub icon: &'static str,
    pub growth: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TopLocation {
    pub name: &'static str,
    pub icon: &'static str,
    pub jobs: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SalaryInsight {
    pub role: &'static str,
    pub range: &'static str,
    pub experience: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Company {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub categories: &'static [&'static str],
    pub careers_url: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarketInsights {
    pub trending_skills: &'static [TrendingSkill],
    pub top_locations: &'static [TopLocation],
    pub salary_insights: &'static [SalaryInsight],
}

pub const MARKET_INSIGHTS: MarketInsights = MarketInsights {
    trending_skills: &[
        TrendingSkill {
            name: "Python",
            icon: "fab fa-python",
            growth: "25%",
        },
        TrendingSkill {
            name: "React",
            icon: "fab fa-react",
            growth: "30%",
        },
        TrendingSkill {
            name: "AWS",
            icon: "fab fa-aws",
            growth: "40%",
        },
    ],
    top_locations: &[
        TopLocation {
            name: "Bangalore",
            icon: "fas fa-city",
            jobs: "15K+",
        },
        TopLocation {
            name: "Hyderabad",
            icon: "fas fa-building",
            jobs: "8K+",
        },
    ],
    salary_insights: &[SalaryInsight {
        role: "Software Engineer",
        range: "10-20 LPA",
        experience: "3-5 years",
    }],
};

pub const FEATURED_COMPANIES: &[Company] = &[
    Company {
        name: "Google",
        icon: "fab fa-google",
        color: "#4285F4",
        description: "Search engine and cloud computing company",
        categories: &["Tech", "Global"],
        careers_url: "https://careers.google.com",
    },
    Company {
        name: "Microsoft",
        icon: "fab fa-microsoft",
        color: "#7FBA00",
        description: "Computer software and hardware company",
        categories: &["Tech", "Global"],
        careers_url: "https://careers.microsoft.com",
    },
    Company {
        name: "TCS",
        icon: "fas fa-building",
        color: "#3D8BFF",
        description: "Indian multinational IT services company",
        categories: &["Tech", "Indian"],
        careers_url: "https://www.tcs.com/careers",
    },
];

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: MarketInsights,
    pub companies: &'static [Company],
}

/// GET /api/v1/insights
pub async fn handle_insights() -> Json<InsightsResponse> {
    Json(InsightsResponse {
        insights: MARKET_INSIGHTS,
        companies: FEATURED_COMPANIES,
    })
}
