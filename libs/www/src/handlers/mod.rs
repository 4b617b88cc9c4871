pub mod catalog_handler;
pub mod category_handler;
pub mod filters;
pub mod recipe_page_handler;
pub mod static_files;

pub use self::catalog_handler::*;
pub use self::category_handler::*;
pub use self::filters::*;
pub use self::recipe_page_handler::*;
pub use self::static_files::*;

use std::convert::Infallible;

use warp::{
    http::{Response, StatusCode},
    Rejection, Reply,
};

pub async fn handle_rejection(err: Rejection) -> std::result::Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(e) = err.find::<PageRejection>() {
        log::error!("{}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed".to_string(),
        )
    } else {
        log::error!("unhandled error: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    };

    let response = Response::new(message);
    let (mut parts, body) = response.into_parts();
    parts.status = code;
    Ok(Response::from_parts(parts, body))
}
