mod docs_header;
mod theme_toggle;

pub use docs_header::DocsHeader;
pub use theme_toggle::ThemeToggle;
