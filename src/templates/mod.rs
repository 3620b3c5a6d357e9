// Askama templates; the HTML lives in /templates
pub mod search_page_template;
pub mod results_message_template;
pub mod product_list_template;

pub use search_page_template::SearchPageTemplate;
pub use results_message_template::ResultsMessageTemplate;
pub use product_list_template::{CardView, ProductListTemplate};
