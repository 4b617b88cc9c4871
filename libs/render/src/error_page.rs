use crate::{escape_html, load_template, Render};

pub struct ErrorPage {
    pub msg: String,
}

impl ErrorPage {
    pub fn new(msg: String) -> Self {
        Self { msg }
    }
}

impl Render for ErrorPage {
    fn render(&self) -> String {
        match load_template("error_page") {
            Ok(ctx) => ctx.replace("<%= msg %>", &escape_html(&self.msg)),
            Err(e) => e.to_string(),
        }
    }
}
