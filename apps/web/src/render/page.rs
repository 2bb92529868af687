//! Page shell carrying every DOM attachment point the patches target.

use askama::Template;
use uuid::Uuid;

use super::RenderError;
use crate::animation::reveal::REVEAL_SELECTOR;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    title: &'a str,
    session_id: Uuid,
    reveal_selector: &'a str,
}

pub fn render_dashboard_page(session_id: Uuid) -> Result<String, RenderError> {
    DashboardPage {
        title: "NextHire.AI",
        session_id,
        reveal_selector: REVEAL_SELECTOR,
    }
    .render()
}
