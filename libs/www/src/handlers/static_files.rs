use std::{path::PathBuf, sync::Arc};

use warp::{filters::BoxedFilter, Filter, Reply};

pub struct StaticFileRouter {
    pub site: Arc<PathBuf>,
}

impl StaticFileRouter {
    pub fn routes(&self) -> BoxedFilter<(impl Reply,)> {
        self.styles().or(self.files()).boxed()
    }

    fn styles(&self) -> BoxedFilter<(impl Reply,)> {
        warp::path("static")
            .and(warp::fs::dir(self.site.join("static")))
            .boxed()
    }

    /// Images and anything else kept alongside `recipes.json`.
    fn files(&self) -> BoxedFilter<(impl Reply,)> {
        warp::get()
            .and(warp::fs::dir(self.site.as_ref().clone()))
            .boxed()
    }
}
