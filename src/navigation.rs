//! Navigation module
//!
//! Routes of the front-end, the [`Navigator`] contract the search box hands
//! its selections to, and the history-keeping [`Router`].

mod route;
mod router;

pub use route::Route;
pub use router::Router;

/// Where the search box sends the user; both calls are fire-and-forget
pub trait Navigator {
    fn go_to_search_results(&mut self, query: &str);
    fn go_to_term_detail(&mut self, id: &str);
}
