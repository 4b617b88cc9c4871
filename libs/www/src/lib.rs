pub mod handlers;

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    sync::Arc,
};

use persistance::fs::config::{Config, IndexSections};
use warp::{Filter, Reply};

use crate::handlers::{
    handle_rejection, CatalogRouter, CategoryRouter, RecipePageRouter, StaticFileRouter,
};

pub fn init_logger() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "larder=info,www=info,task_runners=info");
    }
    pretty_env_logger::init();
}

pub fn routes(
    site: Arc<PathBuf>,
    sections: IndexSections,
) -> impl Filter<Extract = impl Reply, Error = std::convert::Infallible> + Clone {
    let catalog = CatalogRouter {
        site: site.clone(),
        sections,
    };
    let category = CategoryRouter { site: site.clone() };
    let recipe_pages = RecipePageRouter { site: site.clone() };
    let static_files = StaticFileRouter { site };
    catalog
        .routes()
        .or(category.routes())
        .or(recipe_pages.routes())
        .or(static_files.routes())
        .recover(handle_rejection)
        .with(warp::log("larder"))
}

pub async fn server(config: Config, site: PathBuf) {
    let addr = bind_address(&config.general.host, config.general.port);
    log::info!("serving {:?}", site);
    log::info!("Starting Server at: http://{}", addr);
    warp::serve(routes(Arc::new(site), config.index))
        .run(addr)
        .await;
}

fn bind_address(host: &str, port: u16) -> SocketAddr {
    let ip = match host {
        "localhost" => IpAddr::V4(Ipv4Addr::LOCALHOST),
        _ => host.parse::<IpAddr>().unwrap_or_else(|_| {
            log::warn!("could not parse host {}, listening on all interfaces", host);
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        }),
    };
    SocketAddr::new(ip, port)
}
