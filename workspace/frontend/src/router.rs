use common::PageId;
use yew_router::prelude::*;

/// Hash routes, one per page section (`#/predict`, `#/about`, ...).
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/home")]
    Home,
    #[at("/predict")]
    Predict,
    #[at("/submit-data")]
    SubmitData,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<PageId> for Route {
    fn from(page: PageId) -> Self {
        match page {
            PageId::Home => Route::Home,
            PageId::Predict => Route::Predict,
            PageId::SubmitData => Route::SubmitData,
            PageId::About => Route::About,
            PageId::Contact => Route::Contact,
        }
    }
}
