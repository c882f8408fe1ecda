//! Inline heroicons used on profile cards.

const CLOCK_PATH: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm1-12a1 1 0 10-2 0v4a1 1 0 00.293.707l2.828 2.829a1 1 0 101.415-1.415L11 9.586V6z";
const USER_PATH: &str = "M10 9a3 3 0 100-6 3 3 0 000 6zm-7 9a7 7 0 1114 0H3z";
const INFORMATION_CIRCLE_PATH: &str = "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z";
const ARROW_RIGHT_PATH: &str = "M14 5l7 7m0 0l-7 7m7-7H3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Clock,
    User,
    InformationCircle,
    /// Outline style; the others are solid.
    ArrowRight,
}

impl Icon {
    /// Renders the icon as a decorative inline SVG carrying `class`.
    pub fn render(&self, class: &str) -> String {
        match self {
            Icon::Clock => solid(CLOCK_PATH, class),
            Icon::User => solid(USER_PATH, class),
            Icon::InformationCircle => solid(INFORMATION_CIRCLE_PATH, class),
            Icon::ArrowRight => format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor" class="{class}" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{ARROW_RIGHT_PATH}"/></svg>"#
            ),
        }
    }
}

fn solid(path: &str, class: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor" class="{class}" aria-hidden="true"><path fill-rule="evenodd" d="{path}" clip-rule="evenodd"/></svg>"#
    )
}
