use catalog::Recipe;

use crate::{escape_html, Render};

/// View-model for one card in a recipe grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard<'a> {
    pub title: &'a str,
    pub img: &'a str,
    pub link: &'a str,
}

impl<'a> From<&'a Recipe> for RecipeCard<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        RecipeCard {
            title: &recipe.title,
            img: &recipe.img,
            link: &recipe.link,
        }
    }
}

impl<'a> Render for RecipeCard<'a> {
    fn render(&self) -> String {
        let title = escape_html(self.title);
        format!(
            r#"<div class="bg-white border border-orange-200 shadow-lg rounded-xl overflow-hidden">
<img src="{}" class="w-full h-80 object-cover" alt="{}">
<div class="p-4">
<h3 class="font-bold text-lg mb-2">{}</h3>
<a href="{}" class="text-orange-600 font-semibold">View Recipe →</a>
</div>
</div>"#,
            escape_html(self.img),
            title,
            title,
            escape_html(self.link)
        )
    }
}

/// Renders a whole grid in one pass.
pub fn render_cards(recipes: &[Recipe]) -> String {
    recipes
        .iter()
        .map(|r| RecipeCard::from(r).render())
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> Recipe {
        Recipe {
            title: title.into(),
            img: format!("/img/{}.jpg", title),
            link: format!("/recipes/{}.html", title),
        }
    }

    #[test]
    fn renders_a_card() {
        let recipe = recipe("Tiramisu");
        let html = RecipeCard::from(&recipe).render();
        assert!(html.contains(r#"<img src="/img/Tiramisu.jpg""#));
        assert!(html.contains(r#"alt="Tiramisu""#));
        assert!(html.contains("<h3 class=\"font-bold text-lg mb-2\">Tiramisu</h3>"));
        assert!(html.contains(r#"<a href="/recipes/Tiramisu.html""#));
    }

    #[test]
    fn escapes_card_fields() {
        let recipe = recipe("<script>");
        let html = RecipeCard::from(&recipe).render();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn renders_cards_in_order() {
        let recipes = vec![recipe("one"), recipe("two"), recipe("three")];
        let html = render_cards(&recipes);
        let one = html.find(">one<").unwrap();
        let two = html.find(">two<").unwrap();
        let three = html.find(">three<").unwrap();
        assert!(one < two && two < three);
        assert_eq!(html.matches("View Recipe").count(), 3);
        assert_eq!(render_cards(&[]), "");
    }
}
