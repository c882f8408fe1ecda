// --- File: crates/calendso_profile/src/render.rs ---
//! Two-phase rendering of the profile page.
//!
//! The head is always rendered. The body is rendered only once the theme
//! reports ready; until then the document carries an empty `<body>`.

use calendso_config::SiteConfig;
use calendso_common::EventTypeSummary;
use calendso_ui::{avatar, escape_html, AvatarProps, Icon, Theme};

use crate::logic::ProfileProps;
use crate::meta::PageMeta;

const CARD_CLASSES: &str = "group relative dark:bg-neutral-900 dark:border-0 dark:hover:border-neutral-600 bg-white hover:bg-gray-50 border border-neutral-200 hover:border-black rounded-sm";
const CARD_ARROW_CLASSES: &str = "absolute transition-opacity h-4 w-4 right-3 top-3 text-black dark:text-white opacity-0 group-hover:opacity-100";
const CARD_ICON_CLASSES: &str = "flex-shrink-0 mt-0.5 mr-1.5 h-4 w-4 text-neutral-400 dark:text-white";

pub struct ProfilePage<'a> {
    props: &'a ProfileProps,
    site: &'a SiteConfig,
}

impl<'a> ProfilePage<'a> {
    pub fn new(props: &'a ProfileProps, site: &'a SiteConfig) -> Self {
        Self { props, site }
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta::for_profile(
            self.site,
            self.props.display_name(),
            self.props.user.avatar.as_deref(),
        )
    }

    /// Phase one: head contents. Independent of theme readiness.
    pub fn render_head(&self) -> String {
        format!(
            "<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n{}",
            self.meta().render_tags()
        )
    }

    /// Phase two: body contents, or `None` while the theme is pending.
    pub fn render_body(&self, theme: &Theme) -> Option<String> {
        if !theme.is_ready() {
            return None;
        }

        let user = &self.props.user;
        let header = format!(
            r#"<div class="mb-8 text-center">
{avatar}
<h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-1">{name}</h1>
<p class="text-neutral-500 dark:text-white">{bio}</p>
</div>"#,
            avatar = avatar(&AvatarProps {
                image_src: user.avatar.as_deref(),
                display_name: user.name.as_deref(),
                class: "mx-auto w-24 h-24 rounded-full mb-4",
            }),
            name = escape_html(self.props.display_name()),
            bio = escape_html(user.bio.as_deref().unwrap_or_default()),
        );

        let cards: String = self
            .props
            .event_types
            .iter()
            .map(|event_type| event_type_card(&user.username, event_type))
            .collect();

        let empty = if self.props.event_types.is_empty() {
            empty_state()
        } else {
            String::new()
        };

        Some(format!(
            r#"<div class="bg-neutral-50 dark:bg-black h-screen">
<main class="max-w-3xl mx-auto py-24 px-4">
{header}
<div class="space-y-6">{cards}</div>
{empty}</main>
</div>"#
        ))
    }

    /// Full HTML document for the given theme state.
    pub fn render_document(&self, theme: &Theme) -> String {
        let html_class = match theme.is_ready().then(|| theme.mode().html_class()).flatten() {
            Some(class) => format!(r#" class="{}""#, class),
            None => String::new(),
        };

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\"{}>\n<head>\n{}\n</head>\n<body>{}</body>\n</html>\n",
            html_class,
            self.render_head(),
            self.render_body(theme).unwrap_or_default()
        )
    }
}

/// Link target of an event type card.
pub fn event_type_href(username: &str, slug: &str) -> String {
    format!("/{}/{}", username, slug)
}

fn event_type_card(username: &str, event_type: &EventTypeSummary) -> String {
    format!(
        r#"<div class="{CARD_CLASSES}">
{arrow}
<a href="{href}" class="block px-6 py-4">
<h2 class="font-semibold text-neutral-900 dark:text-white">{title}</h2>
<div class="mt-2 flex space-x-4">
<div class="flex text-sm text-neutral-500">{clock}<p class="dark:text-white">{length}m</p></div>
<div class="flex text-sm min-w-16 text-neutral-500">{user}<p class="dark:text-white">1-on-1</p></div>
<div class="flex text-sm text-neutral-500">{info}<p class="dark:text-white">{description}</p></div>
</div>
</a>
</div>
"#,
        arrow = Icon::ArrowRight.render(CARD_ARROW_CLASSES),
        href = escape_html(&event_type_href(username, &event_type.slug)),
        title = escape_html(&event_type.title),
        clock = Icon::Clock.render(CARD_ICON_CLASSES),
        length = event_type.length,
        user = Icon::User.render(CARD_ICON_CLASSES),
        info = Icon::InformationCircle.render(CARD_ICON_CLASSES),
        description = escape_html(event_type.description.as_deref().unwrap_or_default()),
    )
}

fn empty_state() -> String {
    r#"<div class="shadow overflow-hidden rounded-sm">
<div class="p-8 text-center text-gray-400 dark:text-white">
<h2 class="font-semibold text-3xl text-gray-600 dark:text-white">Uh oh!</h2>
<p class="max-w-md mx-auto">This user hasn&#39;t set up any event types yet.</p>
</div>
</div>
"#
    .to_string()
}

fn status_page(site: &SiteConfig, code: u16, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{code}: {message} | {app}</title>
<link rel="icon" href="/favicon.ico">
</head>
<body>
<main class="flex h-screen items-center justify-center">
<h1 class="text-2xl font-medium pr-6 mr-5 border-r">{code}</h1>
<h2 class="text-sm">{message}.</h2>
</main>
</body>
</html>
"#,
        app = escape_html(&site.app_name),
    )
}

/// Page served when no user matches the requested username.
pub fn not_found_page(site: &SiteConfig) -> String {
    status_page(site, 404, "This page could not be found")
}

/// Page served when the data phase fails.
pub fn error_page(site: &SiteConfig) -> String {
    status_page(site, 500, "Internal Server Error")
}
