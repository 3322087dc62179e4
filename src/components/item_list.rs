//! Item List Component
//!
//! Grid of marketplace items, refetched whenever the parent raises `reload`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::loader::{deliver, load_items, HttpItemSource, ReloadGate};
use crate::models::{item_tiles, Item};

/// Fetches on each rising edge of `reload` and reports back through
/// `on_load_completed` after a successful load. Failed loads are only logged.
#[component]
pub fn ItemList(
    #[prop(into)] reload: Signal<bool>,
    on_load_completed: Callback<()>,
) -> impl IntoView {
    let config = use_app_context().config;

    let (items, set_items) = signal(Vec::<Item>::new());
    let source = Rc::new(HttpItemSource::new(config.clone()));
    let gate = Rc::new(RefCell::new(ReloadGate::new()));

    Effect::new(move |_| {
        let Some(ticket) = gate.borrow_mut().observe(reload.get()) else {
            return;
        };
        let source = Rc::clone(&source);
        let gate = Rc::clone(&gate);
        spawn_local(async move {
            let outcome = load_items(source.as_ref()).await;
            let current = gate.borrow().is_current(ticket);
            deliver(
                outcome,
                current,
                |loaded| set_items.set(loaded),
                || on_load_completed.run(()),
            );
        });
    });

    let tiles = move || item_tiles(&items.get(), &config);

    view! {
        <div class="ItemListContainer">
            <For
                each=tiles
                key=|tile| tile.clone()
                children=move |tile| {
                    let alt = tile.name.clone();
                    view! {
                        <div class="ItemList">
                            <img
                                src=tile.image_url
                                alt=alt
                                style="width: 200px; height: 200px;"
                            />
                            <p>
                                <span>"Name: " {tile.name}</span>
                                <br />
                                <span>"Category: " {tile.category}</span>
                            </p>
                        </div>
                    }
                }
            />
        </div>
    }
}
