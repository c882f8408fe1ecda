use crate::fixtures::{event_type, jane, pat};
use crate::logic::ProfileProps;
use crate::render::{event_type_href, not_found_page, ProfilePage};
use calendso_common::{EventTypeSummary, User};
use calendso_config::SiteConfig;
use calendso_ui::Theme;

fn props(user: User, event_types: Vec<EventTypeSummary>) -> ProfileProps {
    ProfileProps { user, event_types }
}

fn summaries(slugs: &[&str]) -> Vec<EventTypeSummary> {
    slugs
        .iter()
        .enumerate()
        .map(|(i, slug)| EventTypeSummary::from(event_type(i as i64, 1, slug, false)))
        .collect()
}

#[test]
fn empty_event_list_shows_the_empty_state_and_no_cards() {
    let site = SiteConfig::default();
    let props = props(pat(), Vec::new());
    let body = ProfilePage::new(&props, &site)
        .render_body(&Theme::resolve(None))
        .unwrap();

    assert!(body.contains("Uh oh!"));
    assert!(body.contains("This user hasn&#39;t set up any event types yet."));
    assert!(!body.contains("href=\"/pat/"));
}

#[test]
fn one_card_per_event_type_in_order() {
    let site = SiteConfig::default();
    let props = props(jane(), summaries(&["30min", "60min", "coffee"]));
    let body = ProfilePage::new(&props, &site)
        .render_body(&Theme::resolve(Some("dark")))
        .unwrap();

    let positions: Vec<usize> = ["/jane/30min", "/jane/60min", "/jane/coffee"]
        .iter()
        .map(|href| body.find(&format!("href=\"{}\"", href)).expect(href))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(body.matches("1-on-1").count(), 3);
    assert_eq!(body.matches("30m<").count(), 3);
    assert!(body.contains("About coffee"));
    assert!(!body.contains("Uh oh!"));
}

#[test]
fn event_type_href_joins_username_and_slug() {
    assert_eq!(event_type_href("jane", "30min"), "/jane/30min");
}

#[test]
fn username_stands_in_for_missing_name_everywhere() {
    let site = SiteConfig::default();
    let props = props(pat(), Vec::new());
    let page = ProfilePage::new(&props, &site);
    let document = page.render_document(&Theme::resolve(None));

    assert!(document.contains("<title>pat | Calendso</title>"));
    assert!(document.contains(">pat</h1>"));

    for tag in [r#"name="title""#, r#"property="og:title""#, r#"property="twitter:title""#] {
        assert!(
            document.contains(&format!(r#"<meta {} content="Meet pat via Calendso">"#, tag)),
            "{}",
            tag
        );
    }
    for tag in [
        r#"name="description""#,
        r#"property="og:description""#,
        r#"property="twitter:description""#,
    ] {
        assert!(
            document.contains(&format!(r#"<meta {} content="Book a time with pat">"#, tag)),
            "{}",
            tag
        );
    }

    let image = page.meta().image;
    assert!(image.contains("Meet%20**pat**%20%3Cbr%3E.png"));
    assert!(image.ends_with("&images="));
    let escaped_image = image.replace('&', "&amp;");
    for tag in [r#"property="og:image""#, r#"property="twitter:image""#] {
        assert!(
            document.contains(&format!(r#"<meta {} content="{}">"#, tag, escaped_image)),
            "{}",
            tag
        );
    }
}

#[test]
fn empty_name_is_treated_as_missing() {
    let site = SiteConfig::default();
    let mut user = jane();
    user.name = Some(String::new());
    let props = props(user, Vec::new());
    let page = ProfilePage::new(&props, &site);

    assert_eq!(page.meta().document_title, "jane | Calendso");
}

#[test]
fn pending_theme_renders_head_but_empty_body() {
    let site = SiteConfig::default();
    let props = props(jane(), summaries(&["30min"]));
    let page = ProfilePage::new(&props, &site);

    assert_eq!(page.render_body(&Theme::pending()), None);

    let document = page.render_document(&Theme::pending());
    assert!(document.contains("<body></body>"));
    assert!(document.contains("<title>Jane Doe | Calendso</title>"));
    assert!(document.contains("og:image"));
    assert!(document.contains("<html lang=\"en\">"));
}

#[test]
fn stored_theme_sets_the_html_class() {
    let site = SiteConfig::default();
    let props = props(jane(), Vec::new());
    let page = ProfilePage::new(&props, &site);

    assert!(page
        .render_document(&Theme::resolve(Some("dark")))
        .contains("<html lang=\"en\" class=\"dark\">"));
    assert!(page
        .render_document(&Theme::resolve(None))
        .contains("<html lang=\"en\">"));
}

#[test]
fn avatar_image_is_rendered_with_the_name_as_alt() {
    let site = SiteConfig::default();
    let props = props(jane(), Vec::new());
    let body = ProfilePage::new(&props, &site)
        .render_body(&Theme::resolve(None))
        .unwrap();
    assert!(body.contains(r#"<img src="https://x/a.png" alt="Jane Doe""#));
}

#[test]
fn user_text_is_escaped() {
    let site = SiteConfig::default();
    let mut user = jane();
    user.name = Some("<script>alert(1)</script>".to_string());
    user.bio = Some("Tom & Jerry".to_string());
    let mut cards = summaries(&["x"]);
    cards[0].title = "\"quoted\"".to_string();
    let props = props(user, cards);
    let document = ProfilePage::new(&props, &site).render_document(&Theme::resolve(None));

    assert!(!document.contains("<script>"));
    assert!(document.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(document.contains("Tom &amp; Jerry"));
    assert!(document.contains("&quot;quoted&quot;"));
}

#[test]
fn not_found_page_names_the_status() {
    let page = not_found_page(&SiteConfig::default());
    assert!(page.contains("404"));
    assert!(page.contains("This page could not be found"));
}
