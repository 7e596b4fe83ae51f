//! Product Grid Component
//!
//! Renders the fetched catalog as product cards with wishlist and
//! add-to-cart actions.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::catalog::{filter_by_brand, format_price};
use crate::context::{AppContext, ToastKind};
use crate::models::Product;
use crate::store::{store_add_to_cart, store_toggle_wishlist, use_shop_store, ShopStateStoreFields};

const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.jpg";

fn product_image_src(image: &str) -> String {
    format!("/static/images/products/{}", image)
}

/// Swap a broken product image for the placeholder
fn on_image_error(ev: web_sys::ErrorEvent) {
    if let Some(img) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlImageElement>().ok())
    {
        img.set_src(PLACEHOLDER_IMAGE);
    }
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_shop_store();

    // Filtered view of the catalog, recomputed when either the product
    // list or the active filter changes
    let filtered = move || {
        let filter = store.active_filter().read();
        filter_by_brand(&store.products().read(), &filter)
    };

    let toggle_wishlist = move |product_id: u32| {
        if store_toggle_wishlist(&store, product_id) {
            ctx.notify("Added to wishlist", ToastKind::Success);
        } else {
            ctx.notify("Removed from wishlist", ToastKind::Info);
        }
    };

    let add_to_cart = move |product_id: u32| {
        store_add_to_cart(&store, product_id);
        ctx.notify("Added to cart", ToastKind::Success);
    };

    view! {
        <div id="productsGrid" class="products-grid">
            <For
                each=filtered
                key=|product| product.id
                children=move |product: Product| {
                    let product_id = product.id;
                    let image_src = product_image_src(&product.image);
                    view! {
                        <div
                            class="product-card"
                            data-category=product.category.clone()
                            data-brand=product.brand.clone()
                        >
                            <div class="product-image">
                                <img src=image_src alt=product.name.clone() on:error=on_image_error />
                                <div class="product-actions">
                                    <button
                                        class="action-btn"
                                        aria-label="Add to Wishlist"
                                        on:click=move |_| toggle_wishlist(product_id)
                                    >
                                        <i class="fas fa-heart"></i>
                                    </button>
                                    <button
                                        class="action-btn"
                                        aria-label="Add to Cart"
                                        on:click=move |_| add_to_cart(product_id)
                                    >
                                        <i class="fas fa-shopping-cart"></i>
                                    </button>
                                </div>
                            </div>
                            <div class="product-info">
                                <span class="product-brand">{product.brand.clone()}</span>
                                <h3 class="product-name">{product.name.clone()}</h3>
                                <p class="product-description">{product.description.clone()}</p>
                                <div class="product-footer">
                                    <span class="product-price">{format_price(product.price)}</span>
                                    <button class="add-to-cart" on:click=move |_| add_to_cart(product_id)>
                                        "Add to Cart"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
