//! Shop page: hero banner plus the product grid.

use leptos::prelude::*;

use crate::components::product_card::{ProductCard, on_shop_now};

/// Product listing at `/`. The catalog is fetched once on mount.
#[component]
pub fn ShopPage() -> impl IntoView {
    let products = LocalResource::new(|| crate::net::api::fetch_products());

    view! {
        <section class="shop-page">
            <div class="shop-hero">
                <h1>"New season, new favourites"</h1>
                <p>"Fresh arrivals across every category."</p>
                <a href="#products" class="btn btn-shop" on:click=on_shop_now>
                    "Shop Now"
                </a>
            </div>

            <div id="products" class="shop-page__grid">
                <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                    {move || {
                        products
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="shop-page__empty">"No products available yet."</p> }
                                        .into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <div class="shop-page__cards">
                                            {list
                                                .into_iter()
                                                .map(|product| view! { <ProductCard product/> })
                                                .collect_view()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="shop-page__error">
                                            {format!("Could not load products: {err}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </section>
    }
}
