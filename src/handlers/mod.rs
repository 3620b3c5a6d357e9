pub mod helpers;
pub mod search;
pub mod tracking;
pub mod catalog;
pub mod system;
