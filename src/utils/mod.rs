// URL and terminal helpers shared by the client, the handlers and the CLI
pub mod query_string;
pub mod table;
pub mod url_parser;

pub use query_string::build_query_string;
pub use table::new_table;
pub use url_parser::hostname_from_url;
