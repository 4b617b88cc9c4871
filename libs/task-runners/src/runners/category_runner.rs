use std::path::Path;

use persistance::fs::read_catalog;
use render::{CategoryPage, ErrorPage, Render};

pub struct CategoryRunner {}

impl CategoryRunner {
    /// Renders the category named exactly `name`. An unknown or missing name gives an empty page.
    pub async fn render(site: &Path, name: Option<&String>) -> String {
        let catalog = match read_catalog(site).await {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("{}", e);
                return ErrorPage::new(String::from("The recipe catalog could not be loaded."))
                    .render();
            }
        };
        let category = name.and_then(|name| match catalog.find_category(name) {
            Ok(category) => Some(category),
            Err(e) => {
                log::debug!("{}", e);
                None
            }
        });
        CategoryPage::new(category).render()
    }
}
