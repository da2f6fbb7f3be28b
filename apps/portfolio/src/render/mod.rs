//! Page rendering: Tera templates compiled once at startup.

use std::collections::BTreeMap;

use serde::Serialize;
use tera::Tera;

use crate::contact::form::{ContactForm, Draft, SubmissionStatus};
use crate::content::{NavLink, Portfolio};

pub mod reveal;

use reveal::{RevealTracker, REVEAL_VIEWPORT_FRACTION};

const PAGE_TEMPLATE: &str = "page.html";

// Names end in `.html` so Tera autoescapes everything they output.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    (PAGE_TEMPLATE, include_str!("../../templates/page.html")),
    ("sections/nav.html", include_str!("../../templates/sections/nav.html")),
    ("sections/hero.html", include_str!("../../templates/sections/hero.html")),
    ("sections/about.html", include_str!("../../templates/sections/about.html")),
    ("sections/skills.html", include_str!("../../templates/sections/skills.html")),
    ("sections/resume.html", include_str!("../../templates/sections/resume.html")),
    (
        "sections/achievements.html",
        include_str!("../../templates/sections/achievements.html"),
    ),
    ("sections/projects.html", include_str!("../../templates/sections/projects.html")),
    ("sections/contact.html", include_str!("../../templates/sections/contact.html")),
    ("sections/footer.html", include_str!("../../templates/sections/footer.html")),
];

pub const NOTICE_SUCCESS: &str = "Message sent successfully!";
pub const NOTICE_ERROR: &str = "Error sending message. Please try again.";

/// What the contact section shows: the (possibly retained) draft and a
/// status notice. Failure detail never reaches the page.
#[derive(Debug, Serialize)]
pub struct ContactView<'a> {
    pub draft: &'a Draft,
    pub status: &'static str,
    pub notice: Option<&'static str>,
}

impl<'a> From<&'a ContactForm> for ContactView<'a> {
    fn from(form: &'a ContactForm) -> Self {
        let notice = match form.status() {
            SubmissionStatus::Success => Some(NOTICE_SUCCESS),
            SubmissionStatus::Error(_) => Some(NOTICE_ERROR),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        };
        Self {
            draft: form.draft(),
            status: form.status().tag(),
            notice,
        }
    }
}

#[derive(Debug, Serialize)]
struct PageView<'a> {
    portfolio: &'a Portfolio,
    nav: &'a [NavLink],
    /// Section anchor -> visible at load.
    revealed: BTreeMap<&'a str, bool>,
    reveal_fraction: f64,
    contact: ContactView<'a>,
}

/// Renders the single page for a given contact form state.
pub struct PageRenderer {
    tera: Tera,
    portfolio: Portfolio,
    nav: Vec<NavLink>,
}

impl PageRenderer {
    pub fn new(portfolio: Portfolio) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;

        let nav = portfolio.nav_links();
        Ok(Self {
            tera,
            portfolio,
            nav,
        })
    }

    pub fn render(&self, form: &ContactForm) -> Result<String, tera::Error> {
        let reveal = RevealTracker::at_load(self.nav.len());
        let revealed = self
            .nav
            .iter()
            .enumerate()
            .map(|(i, link)| (link.anchor.as_str(), reveal.is_revealed(i)))
            .collect();

        let view = PageView {
            portfolio: &self.portfolio,
            nav: &self.nav,
            revealed,
            reveal_fraction: REVEAL_VIEWPORT_FRACTION,
            contact: ContactView::from(form),
        };

        let context = tera::Context::from_serialize(&view)?;
        self.tera.render(PAGE_TEMPLATE, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::tests::{ann_draft, RecordingStore};
    use crate::contact::form::Field;
    use crate::content::PORTFOLIO;

    fn renderer() -> PageRenderer {
        PageRenderer::new(PORTFOLIO).unwrap()
    }

    #[test]
    fn test_renders_every_section() {
        let html = renderer().render(&ContactForm::new()).unwrap();
        for anchor in ["home", "aboutme", "skills", "resume", "achievements", "projects", "contact"] {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "missing section {anchor}");
        }
        assert!(html.contains("Negin<br>Arabzadeh"));
        assert!(html.contains("Real Estate Platform"));
        assert!(html.contains("var fraction = 0.85;"));
    }

    #[test]
    fn test_idle_form_has_no_notice() {
        let html = renderer().render(&ContactForm::new()).unwrap();
        assert!(!html.contains(NOTICE_SUCCESS));
        assert!(!html.contains(NOTICE_ERROR));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn test_only_hero_visible_at_load() {
        let html = renderer().render(&ContactForm::new()).unwrap();
        assert_eq!(html.matches("reveal is-visible").count(), 1);
        let hero_start = html.find("id=\"home\"").unwrap();
        let about_start = html.find("id=\"aboutme\"").unwrap();
        assert!(html[hero_start..about_start].contains("reveal is-visible"));
    }

    #[test]
    fn test_retained_draft_is_escaped() {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "<script>alert(1)</script>");
        form.update_field(Field::Message, "\"quoted\" & more");

        let html = renderer().render(&form).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;"));
        assert!(html.contains("&quot;quoted&quot; &amp; more"));
    }

    #[tokio::test]
    async fn test_success_notice_and_cleared_fields() {
        let mut form = ContactForm::from_draft(ann_draft());
        form.submit(&RecordingStore::default()).await;

        let html = renderer().render(&form).unwrap();

        assert!(html.contains(NOTICE_SUCCESS));
        assert!(html.contains("data-status=\"success\""));
        assert!(html.contains("name=\"name\" placeholder=\"Your Name\" value=\"\""));
    }

    #[tokio::test]
    async fn test_error_notice_keeps_values() {
        let mut form = ContactForm::from_draft(ann_draft());
        form.submit(&RecordingStore::rejecting()).await;

        let html = renderer().render(&form).unwrap();

        assert!(html.contains(NOTICE_ERROR));
        assert!(html.contains("value=\"a@x.com\""));
        assert!(!html.contains("permission denied"));
    }

    #[test]
    fn test_contact_view_from_status() {
        let form = ContactForm::new();
        let view = ContactView::from(&form);
        assert_eq!(view.status, "idle");
        assert!(view.notice.is_none());
    }
}
