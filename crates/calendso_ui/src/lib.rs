// --- File: crates/calendso_ui/src/lib.rs ---

// Leaf components are pure functions from props to HTML strings.
pub mod avatar;
pub mod html;
pub mod icons;
pub mod text;
pub mod theme;

pub use avatar::{avatar, initials, AvatarProps};
pub use html::{class_names, escape_html};
pub use icons::Icon;
pub use text::{footnote, TextProps};
pub use theme::{Theme, ThemeMode};
