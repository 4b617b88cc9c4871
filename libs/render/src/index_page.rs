use catalog::CatalogView;
use persistance::fs::config::IndexSections;
use urlencoding::encode;

use crate::{escape_html, load_template, render_cards, Render};

pub const NO_RESULTS: &str =
    "<p class='col-span-4 text-center text-2xl font-bold text-orange-600'>No recipes found.</p>";

pub struct IndexPage<'a> {
    pub view: &'a CatalogView,
    pub categories: Vec<&'a str>,
    pub sections: IndexSections,
}

impl<'a> IndexPage<'a> {
    pub fn new(view: &'a CatalogView, categories: Vec<&'a str>, sections: IndexSections) -> Self {
        IndexPage {
            view,
            categories,
            sections,
        }
    }

    fn render_categories(&self) -> String {
        if !self.sections.categories {
            return String::with_capacity(0);
        }
        let links = self
            .categories
            .iter()
            .map(|name| {
                format!(
                    r#"<a href="/category?name={}" class="block bg-white border-l-4 border-orange-500 rounded-md p-4 shadow hover:shadow-md transition"><span class="font-bold text-gray-800">{}</span></a>"#,
                    encode(name),
                    escape_html(name)
                )
            })
            .collect::<Vec<String>>()
            .join("\n");
        format!(
            r#"<div id="categories" class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">{}</div>"#,
            links
        )
    }

    fn render_search(&self) -> String {
        if !self.sections.search {
            return String::with_capacity(0);
        }
        format!(
            r#"<form action="/" method="get" class="mb-8"><input id="searchInput" type="search" name="term" value="{}" placeholder="Search recipes..." class="w-full p-3 border border-orange-300 rounded-lg"></form>"#,
            escape_html(&self.view.term)
        )
    }

    /// Either the visible cards or the single "no results" message, never both.
    fn render_recipes(&self) -> String {
        if self.view.empty {
            return NO_RESULTS.to_string();
        }
        render_cards(&self.view.recipes)
    }

    fn render_pager(&self) -> String {
        if !self.sections.pager {
            return String::with_capacity(0);
        }
        let mut pager = String::new();
        if self.view.show_more {
            pager.push_str(&format!(
                r#"<a id="viewMoreBtn" href="{}" class="inline-block bg-orange-600 text-white px-6 py-2 rounded-lg">View More</a>"#,
                more_href(&self.view.term, self.view.pages + 1)
            ));
        }
        if self.view.show_less {
            pager.push_str(
                r#"<a id="viewLessBtn" href="/" class="inline-block border border-orange-600 text-orange-600 px-6 py-2 rounded-lg">View Less</a>"#,
            );
        }
        pager
    }
}

fn more_href(term: &str, pages: usize) -> String {
    if term.is_empty() {
        format!("/?pages={}", pages)
    } else {
        format!("/?term={}&amp;pages={}", encode(term), pages)
    }
}

impl<'a> Render for IndexPage<'a> {
    fn render(&self) -> String {
        let ctx = match load_template("index") {
            Ok(ctx) => ctx,
            Err(e) => return e.to_string(),
        };
        ctx.replace("<%= categories %>", &self.render_categories())
            .replace("<%= search %>", &self.render_search())
            .replace("<%= pager %>", &self.render_pager())
            .replace("<%= recipes %>", &self.render_recipes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{CatalogState, Recipe};

    fn recipes(count: usize) -> Vec<Recipe> {
        (0..count)
            .map(|i| Recipe {
                title: format!("Dish {}", i),
                img: format!("{}.jpg", i),
                link: format!("{}.html", i),
            })
            .collect()
    }

    fn render(state: &CatalogState, sections: IndexSections) -> String {
        let view = state.view();
        IndexPage::new(&view, vec!["Mains", "Fish & Chips"], sections).render()
    }

    #[test]
    fn renders_first_page_with_more_link() {
        let state = CatalogState::new(recipes(10));
        let html = render(&state, IndexSections::default());
        assert_eq!(html.matches("View Recipe").count(), 4);
        assert!(html.contains(r#"href="/?pages=2""#));
        assert!(!html.contains("viewLessBtn"));
        assert!(html.contains(r#"href="/category?name=Fish%20%26%20Chips""#));
        assert!(html.contains("Fish &amp; Chips"));
    }

    #[test]
    fn last_page_swaps_controls() {
        let state = CatalogState::replay(recipes(10), "", 3);
        let html = render(&state, IndexSections::default());
        assert_eq!(html.matches("View Recipe").count(), 10);
        assert!(!html.contains("viewMoreBtn"));
        assert!(html.contains(r#"<a id="viewLessBtn" href="/""#));
    }

    #[test]
    fn carries_the_term_through_the_pager() {
        let state = CatalogState::replay(recipes(12), "dish 1", 1);
        let html = render(&state, IndexSections::default());
        assert_eq!(html.matches("View Recipe").count(), 3);
        assert!(html.contains(r#"value="dish 1""#));
        assert!(!html.contains("viewMoreBtn"));

        let state = CatalogState::replay(recipes(12), "dish", 1);
        let html = render(&state, IndexSections::default());
        assert!(html.contains(r#"href="/?term=dish&amp;pages=2""#));
    }

    #[test]
    fn empty_results_render_one_message() {
        let state = CatalogState::replay(recipes(10), "soup", 1);
        let html = render(&state, IndexSections::default());
        assert_eq!(html.matches("No recipes found.").count(), 1);
        assert!(!html.contains("View Recipe"));
        assert!(!html.contains("viewMoreBtn"));
        assert!(!html.contains("viewLessBtn"));
    }

    #[test]
    fn disabled_sections_are_left_out() {
        let state = CatalogState::replay_unpaged(recipes(10), "");
        let sections = IndexSections {
            categories: false,
            search: false,
            pager: false,
        };
        let html = render(&state, sections);
        assert!(!html.contains("id=\"categories\""));
        assert!(!html.contains("searchInput"));
        assert!(!html.contains("viewMoreBtn"));
        assert_eq!(html.matches("View Recipe").count(), 10);
    }
}
