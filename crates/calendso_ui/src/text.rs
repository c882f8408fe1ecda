//! Text primitives.

use crate::html::{class_names, escape_html};

const FOOTNOTE_CLASSES: &str = "text-base font-normal text-gray-900 dark:text-white";

/// Input of the text primitives: the text content and extra classes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProps<'a> {
    pub children: &'a str,
    pub class: Option<&'a str>,
}

impl<'a> From<&'a str> for TextProps<'a> {
    fn from(children: &'a str) -> Self {
        Self {
            children,
            class: None,
        }
    }
}

/// Renders a footnote paragraph. Content is escaped.
pub fn footnote<'a>(props: impl Into<TextProps<'a>>) -> String {
    let props = props.into();
    format!(
        r#"<p class="{}">{}</p>"#,
        class_names(&[FOOTNOTE_CLASSES, props.class.unwrap_or_default()]),
        escape_html(props.children)
    )
}
