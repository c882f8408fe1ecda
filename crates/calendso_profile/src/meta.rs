// --- File: crates/calendso_profile/src/meta.rs ---
//! `<head>` metadata for the profile page: title, description, Open Graph and
//! Twitter card tags.

use calendso_config::SiteConfig;
use calendso_ui::escape_html;

/// Percent-encodes like JavaScript's `encodeURIComponent`.
///
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` stay as they are; every other UTF-8 byte is
/// written as `%XX` with uppercase hex.
pub fn encode_uri_component(s: &str) -> String {
    urlencoding::encode(s)
        .replace("%21", "!")
        .replace("%2A", "*")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
}

/// Caption segment of the preview image URL.
///
/// The image service mishandles raw apostrophes, so they are sent as `%27`
/// even though `encodeURIComponent` leaves them alone.
pub fn og_image_caption(display_name: &str) -> String {
    encode_uri_component(&format!("Meet **{}** <br>", display_name)).replace('\'', "%27")
}

/// URL of the generated social preview image showing the caption, logo and avatar.
///
/// A missing avatar leaves the last `images` parameter empty.
pub fn og_image_url(site: &SiteConfig, display_name: &str, avatar: Option<&str>) -> String {
    format!(
        "{}{}.png?md=1&images={}&images={}",
        site.og_image_base,
        og_image_caption(display_name),
        encode_uri_component(&site.logo_url),
        encode_uri_component(avatar.unwrap_or_default())
    )
}

/// Every string that goes into the profile page head.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    /// `<title>` text.
    pub document_title: String,
    /// `title`, `og:title` and `twitter:title`.
    pub title: String,
    /// `description`, `og:description` and `twitter:description`.
    pub description: String,
    pub url: String,
    pub image: String,
}

impl PageMeta {
    pub fn for_profile(site: &SiteConfig, display_name: &str, avatar: Option<&str>) -> Self {
        Self {
            document_title: format!("{} | {}", display_name, site.app_name),
            title: format!("Meet {} via {}", display_name, site.app_name),
            description: format!("Book a time with {}", display_name),
            url: site.base_url.clone(),
            image: og_image_url(site, display_name, avatar),
        }
    }

    /// Renders the tags in document order. All values are attribute-escaped.
    pub fn render_tags(&self) -> String {
        let title = escape_html(&self.title);
        let description = escape_html(&self.description);
        let url = escape_html(&self.url);
        let image = escape_html(&self.image);

        let mut tags = Vec::with_capacity(15);
        tags.push(format!("<title>{}</title>", escape_html(&self.document_title)));
        tags.push(r#"<link rel="icon" href="/favicon.ico">"#.to_string());
        tags.push(format!(r#"<meta name="title" content="{title}">"#));
        tags.push(format!(r#"<meta name="description" content="{description}">"#));
        tags.push(r#"<meta property="og:type" content="website">"#.to_string());
        tags.push(format!(r#"<meta property="og:url" content="{url}">"#));
        tags.push(format!(r#"<meta property="og:title" content="{title}">"#));
        tags.push(format!(r#"<meta property="og:description" content="{description}">"#));
        tags.push(format!(r#"<meta property="og:image" content="{image}">"#));
        tags.push(r#"<meta property="twitter:card" content="summary_large_image">"#.to_string());
        tags.push(format!(r#"<meta property="twitter:url" content="{url}">"#));
        tags.push(format!(r#"<meta property="twitter:title" content="{title}">"#));
        tags.push(format!(r#"<meta property="twitter:description" content="{description}">"#));
        tags.push(format!(r#"<meta property="twitter:image" content="{image}">"#));
        tags.join("\n")
    }
}
