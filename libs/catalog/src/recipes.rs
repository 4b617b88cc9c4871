use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    pub img: String,
    pub link: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// The parsed contents of `recipes.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Could not find category {0}")]
    CategoryNotFound(String),
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Catalog { categories }
    }

    /// Every recipe in document order, category by category.
    pub fn recipes(&self) -> Vec<Recipe> {
        self.categories
            .iter()
            .flat_map(|cat| cat.recipes.iter().cloned())
            .collect()
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// First category whose name matches exactly. No case folding, no trimming.
    pub fn find_category(&self, name: &str) -> Result<&Category, CatalogError> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CatalogError::CategoryNotFound(name.to_owned()))
    }
}
