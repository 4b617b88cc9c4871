use std::{path::PathBuf, sync::Arc};

use persistance::fs::config::IndexSections;
use warp::http::StatusCode;
use www::routes;

fn fixture_site() -> Arc<PathBuf> {
    Arc::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site"))
}

async fn get(path: &str) -> (StatusCode, String) {
    get_with(path, IndexSections::default()).await
}

async fn get_with(path: &str, sections: IndexSections) -> (StatusCode, String) {
    let filter = routes(fixture_site(), sections);
    let res = warp::test::request().path(path).reply(&filter).await;
    (
        res.status(),
        String::from_utf8(res.body().to_vec()).unwrap(),
    )
}

fn cards(html: &str) -> usize {
    html.matches("View Recipe").count()
}

#[tokio::test]
async fn index_pages_through_ten_recipes() {
    let (status, html) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cards(&html), 4);
    assert!(html.contains("viewMoreBtn"));
    assert!(!html.contains("viewLessBtn"));

    let (_, html) = get("/?pages=2").await;
    assert_eq!(cards(&html), 8);
    assert!(html.contains(r#"href="/?pages=3""#));
    assert!(html.contains("viewLessBtn"));

    let (_, html) = get("/?pages=3").await;
    assert_eq!(cards(&html), 10);
    assert!(!html.contains("viewMoreBtn"));
    assert!(html.contains(r#"<a id="viewLessBtn" href="/""#));
}

#[tokio::test]
async fn index_searches_titles() {
    let (_, html) = get("/?term=CURRY").await;
    assert_eq!(cards(&html), 2);
    assert!(html.find("Chicken Curry").unwrap() < html.find("Veggie Curry").unwrap());
    assert!(!html.contains("viewMoreBtn"));
    assert!(!html.contains("viewLessBtn"));

    let (_, html) = get("/?term=lasagne").await;
    assert_eq!(cards(&html), 0);
    assert_eq!(html.matches("No recipes found.").count(), 1);
}

#[tokio::test]
async fn index_lists_categories() {
    let (_, html) = get("/").await;
    assert!(html.contains(r#"href="/category?name=Breakfast""#));
    assert!(html.contains(r#"href="/category?name=Fish%20%26%20Chips""#));

    let sections = IndexSections {
        categories: false,
        search: true,
        pager: false,
    };
    let (_, html) = get_with("/", sections).await;
    assert!(!html.contains(r#"id="categories""#));
    assert_eq!(cards(&html), 10);
}

#[tokio::test]
async fn api_returns_the_view() {
    let (status, body) = get("/api/recipes?term=curry").await;
    assert_eq!(status, StatusCode::OK);
    let view: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(view["total"], 2);
    assert_eq!(view["show_more"], false);
    assert_eq!(view["recipes"][1]["title"], "Veggie Curry");

    let (_, body) = get("/api/categories").await;
    let names: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(names, vec!["Breakfast", "Dinner", "Fish & Chips"]);
}

#[tokio::test]
async fn category_page_renders_one_category() {
    let (status, html) = get("/category?name=Dinner").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Dinner Recipes"));
    assert_eq!(cards(&html), 4);

    let (_, html) = get("/category.html?name=Fish%20%26%20Chips").await;
    assert!(html.contains("Fish &amp; Chips Recipes"));
    assert_eq!(cards(&html), 3);

    let (status, html) = get("/category?name=dinner").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cards(&html), 0);
}

#[tokio::test]
async fn recipe_pages_get_their_faqs() {
    let (status, html) = get("/recipes/dinner/curry.html").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Frequently Asked Questions"));
    assert!(html.find("Can I make it milder?").unwrap() < html.find("Does it freeze well?").unwrap());

    let (_, html) = get("/recipes/dinner/stew.html").await;
    assert!(html.contains("Frequently Asked Questions"));
    assert!(!html.contains("milder"));

    let (status, _) = get("/recipes/dinner/lasagne.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn serves_static_files() {
    let (status, body) = get("/static/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("font-family"));
    let (status, body) = get("/img/curry.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<svg"));
    let (status, _) = get("/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
