use std::{path::PathBuf, sync::Arc};

use task_runners::{FaqRunner, PageError};
use urlencoding::decode;
use warp::{filters::BoxedFilter, path::Tail, Filter, Rejection, Reply};

use super::filters::{with_site, PageRejection};

/// Recipe detail pages, served with their FAQ section filled in. Anything under `recipes/` that
/// isn't HTML falls through to the static file routes.
pub struct RecipePageRouter {
    pub site: Arc<PathBuf>,
}

impl RecipePageRouter {
    pub fn routes(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(warp::path("recipes"))
            .and(warp::path::tail())
            .and(with_site(self.site.clone()))
            .and_then(render_recipe_page)
            .boxed()
    }
}

async fn render_recipe_page(tail: Tail, site: Arc<PathBuf>) -> Result<impl Reply, Rejection> {
    let tail = decode(tail.as_str()).map_err(|_| warp::reject::not_found())?;
    if !tail.ends_with(".html") {
        return Err(warp::reject::not_found());
    }
    match FaqRunner::render_page(&site, &format!("recipes/{}", tail)).await {
        Ok(page) => Ok(warp::reply::html(page)),
        Err(PageError::NotFound(_)) | Err(PageError::Path(_)) => Err(warp::reject::not_found()),
        Err(e) => Err(warp::reject::custom(PageRejection::Unreadable(e.to_string()))),
    }
}
