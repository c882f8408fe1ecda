//! Profile avatar with an initials fallback.

use crate::html::{class_names, escape_html};

const FALLBACK_CLASSES: &str =
    "flex items-center justify-center bg-neutral-200 text-neutral-600 font-semibold dark:bg-neutral-700 dark:text-white";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarProps<'a> {
    pub image_src: Option<&'a str>,
    pub display_name: Option<&'a str>,
    pub class: &'a str,
}

/// Up to two upper-cased initials from the whitespace-separated words of `name`.
/// Returns "?" when there are none.
pub fn initials(name: Option<&str>) -> String {
    let initials: String = name
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// Renders the user's image, or their initials when no image is set.
pub fn avatar(props: &AvatarProps<'_>) -> String {
    let alt = props
        .display_name
        .filter(|name| !name.is_empty())
        .unwrap_or("Avatar");

    match props.image_src.filter(|src| !src.is_empty()) {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="{}">"#,
            escape_html(src),
            escape_html(alt),
            escape_html(props.class)
        ),
        None => format!(
            r#"<span role="img" aria-label="{}" class="{}">{}</span>"#,
            escape_html(alt),
            escape_html(&class_names(&[props.class, FALLBACK_CLASSES])),
            escape_html(&initials(props.display_name))
        ),
    }
}
