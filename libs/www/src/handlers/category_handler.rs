use std::{collections::HashMap, path::PathBuf, sync::Arc};

use task_runners::CategoryRunner;
use warp::{filters::BoxedFilter, Filter, Reply};

use super::filters::with_site;

pub struct CategoryRouter {
    pub site: Arc<PathBuf>,
}

impl CategoryRouter {
    pub fn routes(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(
                warp::path("category")
                    .or(warp::path("category.html"))
                    .unify(),
            )
            .and(warp::path::end())
            .and(warp::query::<HashMap<String, String>>())
            .and(with_site(self.site.clone()))
            .then(
                |params: HashMap<String, String>, site: Arc<PathBuf>| async move {
                    warp::reply::html(CategoryRunner::render(&site, params.get("name")).await)
                },
            )
            .boxed()
    }
}
