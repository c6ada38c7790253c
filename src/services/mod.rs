pub mod credentials;
pub mod providers;
pub mod title_search;
