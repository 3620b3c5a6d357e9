use askama::Template;

/// The search page: input, trigger button and the results container.
/// `results_html` is already-rendered container content (possibly empty).
/// The two flags drive the page script: `discard_stale` drops responses of
/// superseded searches, `ignore_empty` makes a blank query a no-op.
#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPageTemplate<'a> {
    pub base_url: &'a str,
    pub backend_hostname: String,
    pub mock_mode: bool,
    pub query: &'a str,
    pub results_html: &'a str,
    pub discard_stale: bool,
    pub ignore_empty: bool,
}
