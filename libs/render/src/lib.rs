use thiserror::Error;

pub mod category_page;
pub mod error_page;
pub mod faq_section;
pub mod index_page;
pub mod recipe_card;

pub use self::category_page::*;
pub use self::error_page::*;
pub use self::faq_section::*;
pub use self::index_page::*;
pub use self::recipe_card::*;

pub trait Render {
    fn render(&self) -> String;
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Could not find {0}")]
    NotFound(String),
}

const INCLUDE_PREFIX: &str = "<%= include \"";
const INCLUDE_SUFFIX: &str = "\" %>";

pub fn parse_includes(include_str: &str) -> Option<&str> {
    include_str
        .strip_prefix(INCLUDE_PREFIX)?
        .strip_suffix(INCLUDE_SUFFIX)
}

/// Expands `<%= include "partial" %>` lines. Unknown partials expand to nothing.
pub fn render_includes(ctx: &str) -> String {
    let lines = ctx.lines().map(|line| {
        let line = line.trim();
        match parse_includes(line) {
            Some(partial) => get_template_file(partial)
                .map(str::to_owned)
                .unwrap_or_else(|e| {
                    log::warn!("{}", e);
                    String::with_capacity(0)
                }),
            None => line.to_string(),
        }
    });
    lines.collect::<Vec<String>>().join(" ")
}

/// Loads a template with its includes already expanded.
pub fn load_template(requested_file: &str) -> Result<String, TemplateError> {
    get_template_file(requested_file).map(render_includes)
}

pub fn get_template_file(requested_file: &str) -> Result<&'static str, TemplateError> {
    match requested_file {
        "head" => Ok(include_str!("../templates/head.html")),
        "nav" => Ok(include_str!("../templates/nav.html")),
        "footer" => Ok(include_str!("../templates/footer.html")),
        "index" => Ok(include_str!("../templates/index.html")),
        "category" => Ok(include_str!("../templates/category.html")),
        "faq_section" => Ok(include_str!("../templates/faq_section.html")),
        "error_page" => Ok(include_str!("../templates/error_page.html")),
        _ => Err(TemplateError::NotFound(requested_file.to_owned())),
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
