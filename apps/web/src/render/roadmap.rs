//! Three-bucket learning roadmap with an optional next-skill highlight.

use askama::Template;

use super::{display_number, RenderError};
use crate::backend::contract::{RoadmapItem, RoadmapResult};

struct RoadmapItemView {
    skill: String,
    weeks: String,
    priority: String,
}

impl From<&RoadmapItem> for RoadmapItemView {
    fn from(item: &RoadmapItem) -> Self {
        Self {
            skill: item.skill.clone(),
            weeks: display_number(item.weeks),
            priority: item.priority.clone(),
        }
    }
}

struct BucketView {
    title: &'static str,
    header_class: &'static str,
    icon: &'static str,
    skills_html: String,
}

#[derive(Template)]
#[template(path = "fragments/roadmap.html")]
struct RoadmapView {
    total_skills: u32,
    estimated_months: String,
    total_weeks: String,
    buckets: Vec<BucketView>,
    next_skill: Option<RoadmapItemView>,
}

#[derive(Template)]
#[template(path = "fragments/roadmap_skills.html")]
struct RoadmapSkillsView {
    skills: Vec<RoadmapItemView>,
}

pub fn render_roadmap(result: &RoadmapResult) -> Result<String, RenderError> {
    let roadmap = &result.roadmap;
    let buckets = vec![
        BucketView {
            title: "Short-term (0-3 months)",
            header_class: "bg-success text-white",
            icon: "bi-calendar-check",
            skills_html: render_roadmap_skills(&roadmap.short_term)?,
        },
        BucketView {
            title: "Mid-term (3-6 months)",
            header_class: "bg-warning text-dark",
            icon: "bi-calendar",
            skills_html: render_roadmap_skills(&roadmap.mid_term)?,
        },
        BucketView {
            title: "Long-term (6+ months)",
            header_class: "bg-danger text-white",
            icon: "bi-calendar-event",
            skills_html: render_roadmap_skills(&roadmap.long_term)?,
        },
    ];

    RoadmapView {
        total_skills: result.summary.total_skills,
        estimated_months: display_number(result.summary.estimated_months),
        total_weeks: display_number(roadmap.total_weeks),
        buckets,
        next_skill: result.next_skill.as_ref().map(RoadmapItemView::from),
    }
    .render()
}

/// One bucket's timeline; an empty bucket gets a placeholder line.
pub fn render_roadmap_skills(skills: &[RoadmapItem]) -> Result<String, RenderError> {
    RoadmapSkillsView {
        skills: skills.iter().map(RoadmapItemView::from).collect(),
    }
    .render()
}
