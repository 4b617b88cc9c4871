pub mod config;
pub mod utils;

use std::path::{Path, PathBuf};

use catalog::{Catalog, FaqMap};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs::read_to_string;

pub const CATALOG_FILE: &str = "recipes.json";
pub const FAQ_FILE: &str = "faqs.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

async fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T, LoadError> {
    let raw = match read_to_string(&path).await {
        Ok(raw) => raw,
        Err(source) => return Err(LoadError::Io { path, source }),
    };
    serde_json::from_str(&raw).map_err(|source| LoadError::Parse { path, source })
}

/// Reads and parses `recipes.json` from the site directory.
pub async fn read_catalog(site: &Path) -> Result<Catalog, LoadError> {
    let catalog: Catalog = read_json(site.join(CATALOG_FILE)).await?;
    log::debug!("loaded {} categories", catalog.categories.len());
    Ok(catalog)
}

/// Reads and parses `faqs.json` from the site directory.
pub async fn read_faqs(site: &Path) -> Result<FaqMap, LoadError> {
    read_json(site.join(FAQ_FILE)).await
}

/// Reads a page below the site directory as text.
pub async fn read_page(path: &Path) -> Result<String, LoadError> {
    read_to_string(path).await.map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("larder-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn reads_catalog_and_faqs() {
        let dir = scratch_dir("read");
        std::fs::write(
            dir.join(CATALOG_FILE),
            r#"{"categories":[{"name":"Bread","recipes":[{"title":"Focaccia","img":"f.jpg","link":"f.html"}]}]}"#,
        )
        .unwrap();
        std::fs::write(dir.join(FAQ_FILE), r#"{"focaccia":[{"q":"Yeast?","a":"Yes."}]}"#)
            .unwrap();
        let catalog = read_catalog(&dir).await.unwrap();
        assert_eq!(catalog.recipes()[0].title, "Focaccia");
        let faqs = read_faqs(&dir).await.unwrap();
        assert_eq!(faqs["focaccia"][0].a, "Yes.");
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn reports_missing_and_malformed_files() {
        let dir = scratch_dir("errors");
        let missing = read_catalog(&dir).await.unwrap_err();
        assert!(missing.is_not_found());
        std::fs::write(dir.join(FAQ_FILE), "{ not json").unwrap();
        let malformed = read_faqs(&dir).await.unwrap_err();
        assert!(matches!(malformed, LoadError::Parse { .. }));
        assert!(!malformed.is_not_found());
        std::fs::remove_dir_all(dir).unwrap();
    }
}
