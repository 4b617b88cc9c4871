use std::{collections::HashMap, path::PathBuf, sync::Arc};

use persistance::fs::config::IndexSections;
use serde::Serialize;
use task_runners::CatalogRunner;
use warp::{filters::BoxedFilter, http::StatusCode, Filter, Reply};

use super::filters::{with_sections, with_site};

#[derive(Serialize)]
struct ApiError {
    error: String,
}

pub struct CatalogRouter {
    pub site: Arc<PathBuf>,
    pub sections: IndexSections,
}

impl CatalogRouter {
    pub fn routes(&self) -> BoxedFilter<(impl Reply,)> {
        self.index()
            .or(self.recipes())
            .or(self.categories())
            .boxed()
    }

    fn index(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(warp::path::end())
            .and(warp::query::<HashMap<String, String>>())
            .and(with_site(self.site.clone()))
            .and(with_sections(self.sections))
            .then(
                |params: HashMap<String, String>,
                 site: Arc<PathBuf>,
                 sections: IndexSections| async move {
                    warp::reply::html(CatalogRunner::render_index(&site, params, sections).await)
                },
            )
            .boxed()
    }

    fn recipes(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(warp::path!("api" / "recipes"))
            .and(warp::query::<HashMap<String, String>>())
            .and(with_site(self.site.clone()))
            .and(with_sections(self.sections))
            .then(
                |params: HashMap<String, String>,
                 site: Arc<PathBuf>,
                 sections: IndexSections| async move {
                    match CatalogRunner::view(&site, params, sections).await {
                        Ok(view) => {
                            warp::reply::with_status(warp::reply::json(&view), StatusCode::OK)
                        }
                        Err(e) => internal_error(e),
                    }
                },
            )
            .boxed()
    }

    fn categories(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(warp::path!("api" / "categories"))
            .and(with_site(self.site.clone()))
            .then(|site: Arc<PathBuf>| async move {
                match CatalogRunner::category_names(&site).await {
                    Ok(names) => {
                        warp::reply::with_status(warp::reply::json(&names), StatusCode::OK)
                    }
                    Err(e) => internal_error(e),
                }
            })
            .boxed()
    }
}

fn internal_error(e: impl std::fmt::Display) -> warp::reply::WithStatus<warp::reply::Json> {
    log::error!("{}", e);
    warp::reply::with_status(
        warp::reply::json(&ApiError {
            error: String::from("the recipe catalog could not be loaded"),
        }),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
}
