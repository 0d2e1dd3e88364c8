//! Product tile for the shop grid.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::alert::shop_now_clicked;

/// Click handler for "Shop Now" buttons and links: suppress navigation and
/// show the demo alert.
pub fn on_shop_now(ev: leptos::ev::MouseEvent) {
    ev.prevent_default();
    shop_now_clicked();
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let stock_label = if product.in_stock() { "In stock" } else { "Out of stock" };
    let price = product.display_price();
    let Product { name, description, image_url, category, .. } = product;
    let alt = name.clone();

    view! {
        <article class="product-card">
            {image_url.map(|src| view! { <img class="product-card__image" src=src alt=alt/> })}
            <div class="product-card__body">
                <span class="product-card__category">{category.name}</span>
                <h3 class="product-card__name">{name}</h3>
                {description.map(|text| view! { <p class="product-card__description">{text}</p> })}
                <div class="product-card__footer">
                    <span class="product-card__price">{price}</span>
                    <span class="product-card__stock">{stock_label}</span>
                </div>
                <button class="btn shop-now" on:click=on_shop_now>
                    "Shop Now"
                </button>
            </div>
        </article>
    }
}
