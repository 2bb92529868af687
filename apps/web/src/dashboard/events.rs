//! Typed UI events and their dispatch. One event in, one reply out; the
//! reply lists the patches to apply in order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::surface::{PatchRecorder, Surface, UiPatch};
use super::Dashboard;
use crate::animation::reveal::Intersection;
use crate::animation::{AnchorClick, AnimationController, AnimationPlan, ButtonClick, PageScan};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    LoadRoles,
    EvaluateRole {
        /// Current value of the role selector.
        #[serde(default)]
        selected_role: String,
    },
    GenerateRoadmap,
    SimulateSkills {
        #[serde(default)]
        skills: Vec<String>,
    },
    CompareRoles,
    ResumeBreakdown,
    PageLoaded {
        #[serde(default)]
        scan: PageScan,
    },
    ElementsIntersected {
        #[serde(default)]
        entries: Vec<Intersection>,
    },
    ButtonClicked {
        click: ButtonClick,
    },
    AnchorClicked {
        click: AnchorClick,
    },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::LoadRoles => "load_roles",
            UiEvent::EvaluateRole { .. } => "evaluate_role",
            UiEvent::GenerateRoadmap => "generate_roadmap",
            UiEvent::SimulateSkills { .. } => "simulate_skills",
            UiEvent::CompareRoles => "compare_roles",
            UiEvent::ResumeBreakdown => "resume_breakdown",
            UiEvent::PageLoaded { .. } => "page_loaded",
            UiEvent::ElementsIntersected { .. } => "elements_intersected",
            UiEvent::ButtonClicked { .. } => "button_clicked",
            UiEvent::AnchorClicked { .. } => "anchor_clicked",
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct UiReply {
    pub patches: Vec<UiPatch>,
    /// HTML handed back to the caller rather than inserted by a patch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returned_html: Option<String>,
}

fn animate(surface: &mut PatchRecorder, plans: impl IntoIterator<Item = AnimationPlan>) {
    for plan in plans {
        surface.apply(UiPatch::Animate { plan });
    }
}

/// Routes an event to the controller that owns it.
pub async fn dispatch(
    dashboard: &Dashboard,
    animations: &AnimationController,
    event: UiEvent,
) -> UiReply {
    debug!("Dispatching UI event {}", event.name());

    let mut surface = PatchRecorder::new();
    let mut returned_html = None;

    match event {
        UiEvent::LoadRoles => dashboard.load_roles(&mut surface).await,
        UiEvent::EvaluateRole { selected_role } => {
            dashboard.evaluate_role(&selected_role, &mut surface).await
        }
        UiEvent::GenerateRoadmap => dashboard.generate_roadmap(&mut surface).await,
        UiEvent::SimulateSkills { skills } => {
            returned_html = dashboard.simulate_skills(skills, &mut surface).await;
        }
        UiEvent::CompareRoles => dashboard.compare_roles(&mut surface).await,
        UiEvent::ResumeBreakdown => dashboard.get_resume_breakdown(&mut surface).await,
        UiEvent::PageLoaded { scan } => animate(&mut surface, animations.on_page_loaded(scan)),
        UiEvent::ElementsIntersected { entries } => {
            animate(&mut surface, animations.on_intersections(&entries))
        }
        UiEvent::ButtonClicked { click } => {
            animate(&mut surface, animations.on_button_click(&click))
        }
        UiEvent::AnchorClicked { click } => {
            animate(&mut surface, animations.on_anchor_click(&click))
        }
    }

    UiReply {
        patches: surface.into_patches(),
        returned_html,
    }
}
