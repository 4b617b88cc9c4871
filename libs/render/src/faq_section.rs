use catalog::Faq;

use crate::{escape_html, load_template, Render};

pub struct FaqSection<'a> {
    pub faqs: &'a [Faq],
}

impl<'a> FaqSection<'a> {
    pub fn new(faqs: &'a [Faq]) -> Self {
        FaqSection { faqs }
    }

    fn render_faqs(&self) -> String {
        self.faqs
            .iter()
            .map(|faq| {
                format!(
                    r#"<div class="border-l-4 border-orange-500 pl-4"><h3 class="font-semibold text-gray-800">{}</h3><p class="text-gray-600">{}</p></div>"#,
                    escape_html(&faq.q),
                    escape_html(&faq.a)
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl<'a> Render for FaqSection<'a> {
    fn render(&self) -> String {
        match load_template("faq_section") {
            Ok(ctx) => ctx.replace("<%= faqs %>", &self.render_faqs()),
            Err(e) => e.to_string(),
        }
    }
}
