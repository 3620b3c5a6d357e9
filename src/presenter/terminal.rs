use comfy_table::Table;
use std::sync::Mutex;

use super::state::{ResultsKind, ResultsState};
use super::view::ResultsView;
use crate::models::Product;
use crate::render::{format_change, format_price, GENERIC_ERROR_TEXT, LOADING_TEXT, NO_RESULTS_TEXT, UNKNOWN_ERROR_TEXT};
use crate::utils::new_table;

/// Results container for the `search` command: the loading line goes to
/// stderr, terminal states to stdout.
#[derive(Debug)]
pub struct TerminalView {
    last: Mutex<ResultsKind>,
}

impl Default for TerminalView {
    fn default() -> Self {
        TerminalView {
            last: Mutex::new(ResultsKind::Blank),
        }
    }
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_kind(&self) -> ResultsKind {
        *self.last.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn products_table(products: &[Product]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Price", "Change", "Store"]);
    for p in products {
        table.add_row(vec![
            p.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            p.name.clone(),
            format_price(p.current_price),
            format_change(p.price_change, p.price_change_pct),
            p.store.clone().unwrap_or_default(),
        ]);
    }
    table
}

impl ResultsView for TerminalView {
    fn show(&self, state: ResultsState) {
        match &state {
            ResultsState::Loading => eprintln!("{}", yansi::Paint::new(LOADING_TEXT).dim()),
            ResultsState::Empty => println!("{}", yansi::Paint::new(NO_RESULTS_TEXT).yellow()),
            ResultsState::Failed(error) => {
                let error = if error.trim().is_empty() { UNKNOWN_ERROR_TEXT } else { error.as_str() };
                println!("{}: {}", yansi::Paint::new("Error").red(), error);
            }
            ResultsState::Unavailable => println!("{}", yansi::Paint::new(GENERIC_ERROR_TEXT).red()),
            ResultsState::Products(products) => {
                println!("\n{}", products_table(products));
                println!(
                    "{}\n",
                    yansi::Paint::new(format!("{} product(s)", products.len())).dim()
                );
            }
        }
        *self.last.lock().unwrap_or_else(|e| e.into_inner()) = state.kind();
    }
}
