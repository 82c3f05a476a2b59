//! Server-rendered HTML for the job search page.

use crate::catalog::get_filter_options;
use crate::insights::{Company, FEATURED_COMPANIES, MARKET_INSIGHTS};
use crate::models::filter_option::FilterOption;
use crate::models::search::SearchResult;
use crate::models::suggestion::HasText;
use crate::suggestions::store::{JOB_SUGGESTIONS, LOCATION_SUGGESTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTab {
    JobPortal,
    LinkedIn,
}

/// What the job-portal tab shows below its form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Idle,
    Warning(String),
    Results(Vec<SearchResult>),
}

/// Everything the page needs to render one response.
#[derive(Debug, Clone)]
pub struct PageView {
    pub tab: SearchTab,
    pub job: String,
    pub location: String,
    pub experience: FilterOption,
    pub outcome: SearchOutcome,
    /// Confirmation shown on the LinkedIn tab after submitting its form.
    pub linkedin_notice: Option<String>,
}

pub fn render_page(view: &PageView) -> String {
    let content = format!(
        "{insights}\n{search}\n{companies}",
        insights = render_market_insights(),
        search = render_search_section(view),
        companies = render_company_section(FEATURED_COMPANIES),
    );

    build_page("Smart Job Search", &content)
}

// --- Sections ---

fn render_market_insights() -> String {
    let skills: String = MARKET_INSIGHTS
        .trending_skills
        .iter()
        .map(|s| {
            format!(
                r#"<div class="insight-card"><i class="{icon}" style="font-size:2rem;color:#00bfa5;"></i><h4>{name}</h4><p class="growth">Growth: {growth}</p></div>"#,
                icon = html_escape(s.icon),
                name = html_escape(s.name),
                growth = html_escape(s.growth),
            )
        })
        .collect();

    let locations: String = MARKET_INSIGHTS
        .top_locations
        .iter()
        .map(|l| {
            format!(
                r#"<div class="insight-card"><i class="{icon}" style="font-size:2rem;color:#00bfa5;"></i><h4>{name}</h4><p>{jobs} jobs</p></div>"#,
                icon = html_escape(l.icon),
                name = html_escape(l.name),
                jobs = html_escape(l.jobs),
            )
        })
        .collect();

    let salaries: String = MARKET_INSIGHTS
        .salary_insights
        .iter()
        .map(|s| {
            format!(
                r#"<div class="insight-card"><h4>{role}</h4><p>{range}</p><p style="color:#888;">{exp}</p></div>"#,
                role = html_escape(s.role),
                range = html_escape(s.range),
                exp = html_escape(s.experience),
            )
        })
        .collect();

    format!(
        r#"<section>
<h3>📊 Job Market Insights</h3>
<div class="tabs">
    <input type="radio" name="insights" id="tab-skills" checked><label for="tab-skills">Trending Skills</label>
    <input type="radio" name="insights" id="tab-locations"><label for="tab-locations">Top Locations</label>
    <input type="radio" name="insights" id="tab-salary"><label for="tab-salary">Salary Insights</label>
    <div class="tab-panel" id="panel-skills"><div class="insight-grid">{skills}</div></div>
    <div class="tab-panel" id="panel-locations"><div class="insight-grid">{locations}</div></div>
    <div class="tab-panel" id="panel-salary"><div class="insight-grid">{salaries}</div></div>
</div>
</section>"#
    )
}

fn render_search_section(view: &PageView) -> String {
    let (portal_class, linkedin_class) = match view.tab {
        SearchTab::JobPortal => ("nav-tab active", "nav-tab"),
        SearchTab::LinkedIn => ("nav-tab", "nav-tab active"),
    };

    let body = match view.tab {
        SearchTab::JobPortal => render_job_portal_tab(view),
        SearchTab::LinkedIn => render_linkedin_tab(view),
    };

    format!(
        r#"<section>
<h3>🚀 Find Your Dream Job</h3>
<nav class="nav-tabs"><a class="{portal_class}" href="/">Job Portal</a><a class="{linkedin_class}" href="/linkedin">LinkedIn</a></nav>
{body}
{datalists}
</section>"#,
        datalists = render_datalists(),
    )
}

fn render_job_portal_tab(view: &PageView) -> String {
    let experience_options: String = get_filter_options()
        .experience_levels
        .iter()
        .map(|o| {
            let selected = if o.id == view.experience.id {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{id}"{selected}>{text}</option>"#,
                id = html_escape(o.id),
                text = html_escape(o.text),
            )
        })
        .collect();

    let outcome = match &view.outcome {
        SearchOutcome::Idle => String::new(),
        SearchOutcome::Warning(msg) => {
            format!(r#"<div class="warning">{}</div>"#, html_escape(msg))
        }
        SearchOutcome::Results(results) => results.iter().map(render_result_card).collect(),
    };

    format!(
        r#"<form method="get" action="/" class="search-form">
    <input class="wide" type="text" name="job" list="job-suggestions" placeholder="Software Engineer" value="{job}" aria-label="Job Title">
    <input type="text" name="location" list="location-suggestions" placeholder="Bangalore" value="{location}" aria-label="Location">
    <select name="experience" aria-label="Experience">{experience_options}</select>
    <button type="submit">Search Jobs</button>
</form>
<div class="results">{outcome}</div>"#,
        job = html_escape(&view.job),
        location = html_escape(&view.location),
    )
}

fn render_linkedin_tab(view: &PageView) -> String {
    let notice = view
        .linkedin_notice
        .as_deref()
        .map(|msg| format!(r#"<div class="success">{}</div>"#, html_escape(msg)))
        .unwrap_or_default();

    format!(
        r#"<h3>🔗 LinkedIn Job Scraper</h3>
<form method="get" action="/linkedin" class="search-form">
    <input class="wide" type="text" name="job" placeholder="Software Engineer" value="{job}" aria-label="Job Title">
    <input type="text" name="location" placeholder="India" value="{location}" aria-label="Location">
    <button type="submit">Search LinkedIn</button>
</form>
{notice}"#,
        job = html_escape(&view.job),
        location = html_escape(&view.location),
    )
}

fn render_result_card(result: &SearchResult) -> String {
    format!(
        r#"<div class="result-card">
    <h3>{title}</h3>
    <p class="portal"><i class="{icon}"></i> {portal}</p>
    <p><i class="fas fa-building"></i> {company}</p>
    <p><i class="fas fa-map-marker-alt"></i> {location}</p>
    <p><i class="fas fa-briefcase"></i> {experience} · {salary}</p>
    <a href="{url}" class="action-btn" target="_blank" rel="noopener">View Job <i class="fas fa-external-link-alt"></i></a>
</div>"#,
        title = html_escape(&result.title),
        icon = html_escape(&result.icon),
        portal = html_escape(&result.portal),
        company = html_escape(&result.company),
        location = html_escape(&result.location),
        experience = html_escape(&result.experience),
        salary = html_escape(&result.salary),
        url = html_escape(&result.url),
    )
}

fn render_company_section(companies: &[Company]) -> String {
    let cards: String = companies
        .iter()
        .map(|c| {
            let categories = c
                .categories
                .iter()
                .map(|cat| format!(r#"<span class="company-category">{}</span>"#, html_escape(cat)))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                r#"<a href="{url}" target="_blank" rel="noopener" style="text-decoration:none;color:inherit;">
    <div class="company-card">
        <div class="company-header"><i class="{icon} company-icon" style="color:{color}"></i><h3 style="margin:0;">{name}</h3></div>
        <p style="margin:0.5rem 0;color:#888;">{description}</p>
        <div class="company-categories">{categories}</div>
    </div>
</a>"#,
                url = html_escape(c.careers_url),
                icon = html_escape(c.icon),
                color = html_escape(c.color),
                name = html_escape(c.name),
                description = html_escape(c.description),
            )
        })
        .collect();

    format!(
        r#"<section>
<h3>🏢 Featured Companies</h3>
<div class="company-grid">{cards}</div>
</section>"#
    )
}

fn render_datalists() -> String {
    let jobs: String = JOB_SUGGESTIONS
        .iter()
        .map(|j| format!(r#"<option value="{}">"#, html_escape(j.text())))
        .collect();
    let locations: String = LOCATION_SUGGESTIONS
        .iter()
        .map(|l| match l.parent_state() {
            Some(state) => format!(
                r#"<option value="{}" label="{}, {}">"#,
                html_escape(l.text()),
                html_escape(l.text()),
                html_escape(state)
            ),
            None => format!(r#"<option value="{}">"#, html_escape(l.text())),
        })
        .collect();

    format!(
        r#"<datalist id="job-suggestions">{jobs}</datalist><datalist id="location-suggestions">{locations}</datalist>"#
    )
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>JobSearch AI — {title}</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>💼</text></svg>">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;min-height:100vh;background:linear-gradient(135deg,#0f0c29,#302b63,#24243e);color:#fff;}}
.main{{max-width:1200px;margin:0 auto;padding:24px;}}
section{{margin-bottom:32px;}}
h1{{margin-bottom:24px;}}
h3{{margin-bottom:12px;}}
.tabs input{{display:none;}}
.tabs label{{display:inline-block;padding:8px 16px;cursor:pointer;border-bottom:2px solid transparent;color:#ccc;}}
.tabs input:checked+label{{border-color:#00bfa5;color:#fff;}}
.tab-panel{{display:none;padding-top:12px;}}
#tab-skills:checked~#panel-skills,#tab-locations:checked~#panel-locations,#tab-salary:checked~#panel-salary{{display:block;}}
.insight-grid{{display:grid;grid-template-columns:repeat(3,1fr);gap:1rem;}}
.insight-card{{text-align:center;padding:1rem;background:rgba(255,255,255,0.05);border-radius:10px;}}
.growth{{color:#00c853;font-weight:bold;}}
.nav-tabs{{margin-bottom:16px;}}
.nav-tab{{display:inline-block;padding:8px 16px;color:#ccc;text-decoration:none;border-bottom:2px solid transparent;}}
.nav-tab.active{{color:#fff;border-color:#00bfa5;}}
.search-form{{display:flex;gap:12px;flex-wrap:wrap;margin-bottom:16px;}}
.search-form input,.search-form select{{flex:1;padding:0.5rem;border-radius:5px;border:1px solid #555;background:rgba(255,255,255,0.08);color:#fff;}}
.search-form input.wide{{flex:2;}}
.search-form button{{background:linear-gradient(90deg,#00bfa5,#00897b);color:#fff;border:none;border-radius:5px;padding:0.5rem 1rem;font-weight:bold;cursor:pointer;}}
.warning{{background:rgba(255,193,7,0.15);border:1px solid #ffc107;color:#ffe082;padding:0.75rem 1rem;border-radius:5px;}}
.success{{background:rgba(0,200,83,0.15);border:1px solid #00c853;color:#b9f6ca;padding:0.75rem 1rem;border-radius:5px;}}
.result-card{{padding:1rem;background:rgba(255,255,255,0.05);border-radius:10px;margin-bottom:1rem;}}
.result-card p{{margin:0.25rem 0;}}
.portal{{color:#aaa;font-size:0.9rem;}}
.action-btn{{display:inline-block;margin-top:0.5rem;background:#00bfa5;color:#fff;padding:0.5rem 1rem;border-radius:5px;text-decoration:none;}}
.company-grid{{display:grid;grid-template-columns:repeat(auto-fill,minmax(250px,1fr));gap:1rem;padding:1rem 0;}}
.company-card{{background:rgba(255,255,255,0.05);border-radius:10px;padding:1rem;transition:transform 0.2s;cursor:pointer;}}
.company-card:hover{{transform:translateY(-5px);background:rgba(255,255,255,0.08);}}
.company-header{{display:flex;align-items:center;margin-bottom:0.5rem;}}
.company-icon{{font-size:1.5rem;margin-right:0.5rem;}}
.company-categories{{display:flex;flex-wrap:wrap;gap:0.5rem;margin-top:0.5rem;}}
.company-category{{background:rgba(255,255,255,0.1);padding:0.2rem 0.5rem;border-radius:15px;font-size:0.8rem;}}
</style>
</head>
<body>
<div class="main">
<h1>🔍 {title}</h1>
{content}
</div>
</body>
</html>"#,
        title = html_escape(title),
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_EXPERIENCE;
    use crate::search::portal::search_jobs;

    fn view(tab: SearchTab, outcome: SearchOutcome) -> PageView {
        PageView {
            tab,
            job: String::new(),
            location: String::new(),
            experience: DEFAULT_EXPERIENCE,
            outcome,
            linkedin_notice: None,
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_idle_page_has_sections_and_no_results() {
        let html = render_page(&view(SearchTab::JobPortal, SearchOutcome::Idle));
        assert!(html.contains("Smart Job Search"));
        assert!(html.contains("Job Market Insights"));
        assert!(html.contains("Featured Companies"));
        assert!(html.contains("https://careers.google.com"));
        assert!(html.contains(r#"<option value="Data Scientist">"#));
        assert!(html.contains(r#"<option value="Pune" label="Pune, Maharashtra">"#));
        assert!(html.contains(r#"<option value="Remote">"#));
        assert!(!html.contains("result-card\""));
    }

    #[test]
    fn test_default_experience_is_preselected() {
        let html = render_page(&view(SearchTab::JobPortal, SearchOutcome::Idle));
        assert!(html.contains(r#"<option value="1-3" selected>1-3 years</option>"#));
    }

    #[test]
    fn test_results_render_as_cards_opening_in_new_tab() {
        let results = search_jobs("Data Scientist", "", &DEFAULT_EXPERIENCE);
        let html = render_page(&view(SearchTab::JobPortal, SearchOutcome::Results(results)));
        assert_eq!(html.matches(r#"<div class="result-card">"#).count(), 2);
        assert!(html.contains("Data Scientist at Tech Company"));
        assert!(html.contains("Senior Data Scientist"));
        assert!(html.contains(r#"href="https://linkedin.com" class="action-btn" target="_blank""#));
    }

    #[test]
    fn test_warning_is_rendered() {
        let html = render_page(&view(
            SearchTab::JobPortal,
            SearchOutcome::Warning("Please enter a job title".to_string()),
        ));
        assert!(html.contains(r#"<div class="warning">Please enter a job title</div>"#));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let mut page = view(SearchTab::JobPortal, SearchOutcome::Idle);
        page.job = "<script>alert(1)</script>".to_string();
        let html = render_page(&page);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_linkedin_tab_shows_notice() {
        let mut page = view(SearchTab::LinkedIn, SearchOutcome::Idle);
        page.linkedin_notice = Some("Searching for Rust jobs in India".to_string());
        let html = render_page(&page);
        assert!(html.contains("LinkedIn Job Scraper"));
        assert!(html.contains(r#"<div class="success">Searching for Rust jobs in India</div>"#));
        assert!(html.contains(r#"<a class="nav-tab active" href="/linkedin">"#));
    }
}
