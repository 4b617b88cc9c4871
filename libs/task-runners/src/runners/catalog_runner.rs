use std::{collections::HashMap, path::Path};

use catalog::{CatalogState, CatalogView};
use persistance::fs::{config::IndexSections, read_catalog, LoadError};
use render::{ErrorPage, IndexPage, Render};

pub struct CatalogRunner {}

/// What a visitor asked the index page for: a search term and how many pages they have opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexQuery {
    pub term: String,
    pub pages: usize,
}

impl IndexQuery {
    pub fn from_params(params: &HashMap<String, String>, sections: IndexSections) -> Self {
        let term = if sections.search {
            params.get("term").cloned().unwrap_or_default()
        } else {
            String::new()
        };
        let pages = params
            .get("pages")
            .and_then(|p| p.parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        IndexQuery { term, pages }
    }
}

impl CatalogRunner {
    pub async fn load_state(
        site: &Path,
        query: &IndexQuery,
        sections: IndexSections,
    ) -> Result<(CatalogState, Vec<String>), LoadError> {
        let catalog = read_catalog(site).await?;
        let all = catalog.recipes();
        let state = if sections.pager {
            CatalogState::replay(all, &query.term, query.pages)
        } else {
            CatalogState::replay_unpaged(all, &query.term)
        };
        let names = catalog
            .category_names()
            .into_iter()
            .map(String::from)
            .collect();
        Ok((state, names))
    }

    pub async fn view(
        site: &Path,
        params: HashMap<String, String>,
        sections: IndexSections,
    ) -> Result<CatalogView, LoadError> {
        let query = IndexQuery::from_params(&params, sections);
        let (state, _) = Self::load_state(site, &query, sections).await?;
        Ok(state.view())
    }

    pub async fn render_index(
        site: &Path,
        params: HashMap<String, String>,
        sections: IndexSections,
    ) -> String {
        let query = IndexQuery::from_params(&params, sections);
        log::debug!("index for {:?}", query);
        match Self::load_state(site, &query, sections).await {
            Ok((state, names)) => {
                let view = state.view();
                let categories = names.iter().map(String::as_str).collect();
                IndexPage::new(&view, categories, sections).render()
            }
            Err(e) => {
                log::error!("{}", e);
                ErrorPage::new(String::from("The recipe catalog could not be loaded.")).render()
            }
        }
    }

    pub async fn category_names(site: &Path) -> Result<Vec<String>, LoadError> {
        let catalog = read_catalog(site).await?;
        Ok(catalog
            .category_names()
            .into_iter()
            .map(String::from)
            .collect())
    }
}
