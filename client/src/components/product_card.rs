//! Product tile used by the featured-planners grid.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;

/// `$12.00`-style price label.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Whether the card should show a struck-through original price.
pub fn has_discount(product: &Product) -> bool {
    product.discount_percent > 0 && product.discounted_price < product.original_price
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let discounted = has_discount(&product);
    let price = format_price(if discounted { product.discounted_price } else { product.original_price });
    let original = discounted.then(|| format_price(product.original_price));
    let percent = discounted.then_some(product.discount_percent);
    let class = if product.out_of_stock { "product-card product-card--sold-out" } else { "product-card" };

    view! {
        <article class=class>
            {product.badge_text.filter(|b| !b.is_empty()).map(|b| view! { <span class="product-card__badge">{b}</span> })}
            <img class="product-card__image" src=product.img_src alt=product.img_alt/>
            <h3 class="product-card__name">{product.book_name}</h3>
            <p class="product-card__author">{product.author}</p>
            <p class="product-card__price">
                <span class="product-card__price-now">{price}</span>
                {original.map(|o| view! { <s class="product-card__price-was">{o}</s> })}
                {percent.map(|p| view! { <span class="product-card__discount">{format!("{p}% off")}</span> })}
            </p>
            {product.out_of_stock.then(|| view! { <p class="product-card__stock">"Out of stock"</p> })}
        </article>
    }
}
