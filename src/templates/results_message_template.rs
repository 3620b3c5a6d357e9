use askama::Template;

/// A single line of text filling the results container.
#[derive(Template)]
#[template(path = "results_message.html")]
pub struct ResultsMessageTemplate<'a> {
    pub class: &'a str,
    pub text: &'a str,
}
