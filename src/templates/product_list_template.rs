use askama::Template;

/// Display-ready strings for one product card.
///
/// Built by [`crate::render::card_view`]; the `*_text` fields only ever contain
/// digits, currency/percent signs, glyphs and fixed words, so the template
/// emits them unescaped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardView {
    pub has_id: bool,
    pub data_id: String,
    pub name: String,
    pub image_src: String,
    pub has_link: bool,
    pub product_url: String,
    pub price_text: String,
    pub change_class: &'static str,
    pub change_text: String,
    pub has_badge: bool,
    pub badge_text: String,
    pub has_original: bool,
    pub original_text: String,
    pub has_store: bool,
    pub store: String,
}

#[derive(Template)]
#[template(path = "product_list.html")]
pub struct ProductListTemplate<'a> {
    pub cards: &'a [CardView],
}
