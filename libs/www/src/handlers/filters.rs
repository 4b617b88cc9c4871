use std::{path::PathBuf, sync::Arc};

use persistance::fs::config::IndexSections;
use thiserror::Error;
use warp::{Filter, Rejection};

#[derive(Error, Debug)]
pub enum PageRejection {
    #[error("could not read page {0}")]
    Unreadable(String),
}

impl warp::reject::Reject for PageRejection {}

pub fn with_site(
    site: Arc<PathBuf>,
) -> impl Filter<Extract = (Arc<PathBuf>,), Error = Rejection> + Clone {
    warp::any().map(move || site.clone()).boxed()
}

pub fn with_sections(
    sections: IndexSections,
) -> impl Filter<Extract = (IndexSections,), Error = Rejection> + Clone {
    warp::any().map(move || sections).boxed()
}
