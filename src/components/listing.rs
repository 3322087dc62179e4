//! Listing Form Component
//!
//! Form for putting a new item up for sale.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::use_app_context;
use crate::error::ListingError;

/// Form contents before the required-field check
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft<F> {
    pub name: String,
    pub category: String,
    pub image: Option<F>,
}

/// A draft with every required field present
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<F> {
    pub name: String,
    pub category: String,
    pub image: F,
}

impl<F> ListingDraft<F> {
    pub fn validate(self) -> Result<Listing<F>, ListingError> {
        let name = self.name.trim().to_string();
        let category = self.category.trim().to_string();
        if name.is_empty() {
            return Err(ListingError::MissingName);
        }
        if category.is_empty() {
            return Err(ListingError::MissingCategory);
        }
        let image = self.image.ok_or(ListingError::MissingImage)?;
        Ok(Listing { name, category, image })
    }
}

fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Posts a new item, then asks the parent to reload the list
#[component]
pub fn ListingForm(on_listing_completed: Callback<()>) -> impl IntoView {
    let config = use_app_context().config;

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let form_ref = NodeRef::<html::Form>::new();
    let image_ref = NodeRef::<html::Input>::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let image = image_ref
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let draft = ListingDraft {
            name: name.get(),
            category: category.get(),
            image,
        };
        let listing = match draft.validate() {
            Ok(listing) => listing,
            Err(err) => {
                log::error!("POST error: {err}");
                return;
            }
        };

        let config = config.clone();
        spawn_local(async move {
            match api::add_item(&config, &listing.name, &listing.category, &listing.image).await {
                Ok(resp) => {
                    log::info!("POST success: {}", resp.message);
                    set_name.set(String::new());
                    set_category.set(String::new());
                    if let Some(form) = form_ref.get() {
                        form.reset();
                    }
                    on_listing_completed.run(());
                }
                Err(err) => log::error!("POST error: {err}"),
            }
        });
    };

    view! {
        <div class="Listing">
            <form node_ref=form_ref on:submit=submit>
                <div>
                    <input
                        type="text"
                        name="name"
                        id="name"
                        placeholder="name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            if let Some(value) = input_value(&ev) {
                                set_name.set(value);
                            }
                        }
                    />
                    <input
                        type="text"
                        name="category"
                        id="category"
                        placeholder="category"
                        required
                        prop:value=move || category.get()
                        on:input=move |ev| {
                            if let Some(value) = input_value(&ev) {
                                set_category.set(value);
                            }
                        }
                    />
                    <input
                        type="file"
                        name="image"
                        id="image"
                        accept="image/jpeg"
                        required
                        node_ref=image_ref
                    />
                    <button type="submit">"List this item"</button>
                </div>
            </form>
        </div>
    }
}
