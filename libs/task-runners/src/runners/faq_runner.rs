use std::path::Path;

use catalog::{faqs_for, page_key};
use persistance::fs::{
    read_faqs, read_page,
    utils::{resolve_site_path, PathError},
    LoadError,
};
use render::{FaqSection, Render};
use thiserror::Error;

pub const FAQ_CONTAINER_ID: &str = "faq-section";

#[derive(Error, Debug)]
pub enum PageError {
    #[error("could not find page {0}")]
    NotFound(String),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Load(LoadError),
}

pub struct FaqRunner {}

impl FaqRunner {
    /// Serves a recipe detail page with its questions filled into the FAQ container. If the FAQ
    /// file can't be loaded the page goes out as it is on disk.
    pub async fn render_page(site: &Path, tail: &str) -> Result<String, PageError> {
        let path = resolve_site_path(site, tail)?;
        let page = read_page(&path).await.map_err(|e| {
            if e.is_not_found() {
                PageError::NotFound(tail.to_owned())
            } else {
                PageError::Load(e)
            }
        })?;
        let key = page_key(tail);
        match read_faqs(site).await {
            Ok(map) => {
                let section = FaqSection::new(faqs_for(&map, &key)).render();
                log::debug!("faqs for {}: {}", key, faqs_for(&map, &key).len());
                match inject_faqs(&page, &section) {
                    Some(injected) => Ok(injected),
                    None => {
                        log::debug!("{} has no {} container", tail, FAQ_CONTAINER_ID);
                        Ok(page)
                    }
                }
            }
            Err(e) => {
                log::error!("FAQ load error: {}", e);
                Ok(page)
            }
        }
    }
}

/// Replaces everything inside the FAQ container with `section`, nested markup included. `None`
/// when the page has no container or the container is never closed.
pub fn inject_faqs(page: &str, section: &str) -> Option<String> {
    let lowered = page.to_ascii_lowercase();
    let attr = find_container_attr(&lowered)?;
    let tag_start = lowered[..attr].rfind('<')?;
    let tag_name = lowered[tag_start + 1..attr]
        .split(|c: char| c.is_ascii_whitespace())
        .next()
        .filter(|name| !name.is_empty())?;
    let open_end = attr + lowered[attr..].find('>')? + 1;
    let close = find_closing_tag(&lowered, open_end, tag_name)?;
    let mut injected = String::with_capacity(page.len() + section.len());
    injected.push_str(&page[..open_end]);
    injected.push_str(section);
    injected.push_str(&page[close..]);
    Some(injected)
}

fn ends_name(rest: &str) -> bool {
    matches!(
        rest.chars().next(),
        None | Some('>') | Some('/') | Some(' ') | Some('\t') | Some('\n') | Some('\r')
    )
}

/// Position of the container's `id` attribute, quoted with either quote or unquoted.
fn find_container_attr(lowered: &str) -> Option<usize> {
    let quoted = [
        format!("id=\"{}\"", FAQ_CONTAINER_ID),
        format!("id='{}'", FAQ_CONTAINER_ID),
    ];
    let unquoted = format!("id={}", FAQ_CONTAINER_ID);
    let mut found = quoted.iter().filter_map(|attr| lowered.find(attr.as_str())).min();
    let mut from = 0;
    while let Some(pos) = lowered[from..].find(&unquoted) {
        let pos = from + pos;
        if ends_name(&lowered[pos + unquoted.len()..]) {
            found = Some(found.map_or(pos, |f| f.min(pos)));
            break;
        }
        from = pos + unquoted.len();
    }
    found
}

/// Start of the tag closing the element opened just before `from`, skipping nested elements
/// with the same name.
fn find_closing_tag(lowered: &str, from: usize, tag_name: &str) -> Option<usize> {
    let opening = format!("<{}", tag_name);
    let closing = format!("</{}", tag_name);
    let mut depth = 1;
    let mut pos = from;
    while let Some(offset) = lowered[pos..].find('<') {
        let at = pos + offset;
        let rest = &lowered[at..];
        if rest.starts_with(&closing) && ends_name(&rest[closing.len()..]) {
            depth -= 1;
            if depth == 0 {
                return Some(at);
            }
        } else if rest.starts_with(&opening) && ends_name(&rest[opening.len()..]) {
            let tag_end = rest.find('>')?;
            if !rest[..tag_end].ends_with('/') {
                depth += 1;
            }
        }
        pos = at + 1;
    }
    None
}
