use catalog::Category;

use crate::{escape_html, load_template, render_cards, Render};

/// A single category, every recipe at once. `None` renders an empty page.
pub struct CategoryPage<'a> {
    pub category: Option<&'a Category>,
}

impl<'a> CategoryPage<'a> {
    pub fn new(category: Option<&'a Category>) -> Self {
        CategoryPage { category }
    }

    fn title(&self) -> String {
        match self.category {
            Some(category) => format!("{} Recipes", escape_html(&category.name)),
            None => String::with_capacity(0),
        }
    }
}

impl<'a> Render for CategoryPage<'a> {
    fn render(&self) -> String {
        let ctx = match load_template("category") {
            Ok(ctx) => ctx,
            Err(e) => return e.to_string(),
        };
        let recipes = self
            .category
            .map(|c| render_cards(&c.recipes))
            .unwrap_or_default();
        ctx.replace("<%= title %>", &self.title())
            .replace("<%= recipes %>", &recipes)
    }
}
