//! Simple Mercari Frontend App
//!
//! Root component: listing form above the item grid.

use leptos::prelude::*;

use crate::components::{Header, ItemList, ListingForm};
use crate::config::Config;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    // Load once on mount, then again after each new listing
    let (reload, set_reload) = signal(true);

    provide_context(AppContext::new(Config::from_build_env()));

    let on_load_completed = Callback::new(move |_: ()| set_reload.set(false));
    let on_listing_completed = Callback::new(move |_: ()| set_reload.set(true));

    view! {
        <div>
            <Header />
            <div>
                <ListingForm on_listing_completed=on_listing_completed />
            </div>
            <div>
                <ItemList reload=reload on_load_completed=on_load_completed />
            </div>
        </div>
    }
}
