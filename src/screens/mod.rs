pub mod detail_screen;
pub mod list_screen;

pub use detail_screen::{BrowsingContext, ContactAction, DetailScreen, DetailView, LoadOutcome, NavigationRequest};
pub use list_screen::{FetchRequest, FilterPanel, ListScreen};
