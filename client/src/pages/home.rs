//! Home landing page: hero, featured planners, planner types, testimonials
//! and a closing call to action.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::footer::Footer;
use crate::components::product_card::ProductCard;
use crate::net::api::ApiClient;
use crate::net::types::Product;

/// Planner categories shown as tiles: (label, blurb).
const PLANNER_TYPES: [(&str, &str); 4] = [
    ("Daily", "Hour-by-hour pages for focused days"),
    ("Weekly", "Spreads that keep the whole week in view"),
    ("Budget", "Trackers for spending, saving and bills"),
    ("Wellness", "Habit, fitness and self-care logs"),
];

async fn load_featured() -> Vec<Product> {
    match ApiClient::browser().fetch_new_arrivals().await {
        Ok(list) => list,
        Err(e) => {
            log::warn!("new arrivals unavailable: {e:?}");
            Vec::new()
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = LocalResource::new(load_featured);

    view! {
        <div class="home-page">
            <section class="home-hero">
                <video class="home-hero__video" autoplay=true loop=true muted=true>
                    <source src="/assets/planner-video-bg.mp4" type="video/mp4"/>
                </video>
                <div class="home-hero__content">
                    <h1>"Elevate Your Planning Game"</h1>
                    <p>
                        "Discover our exquisite collection of digital planners designed to boost your productivity and creativity."
                    </p>
                    <A href="/shop" attr:class="btn btn--primary btn--large">"Explore Planners"</A>
                </div>
            </section>

            <section class="home-section">
                <h2>"Featured Planners"</h2>
                <Suspense fallback=move || view! { <p>"Loading planners..."</p> }>
                    {move || {
                        featured
                            .get()
                            .map(|list| {
                                view! {
                                    <div class="home-section__grid">
                                        {list
                                            .into_iter()
                                            .map(|product| view! { <ProductCard product=product/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="home-section home-section--tinted">
                <h2>"Explore Planner Types"</h2>
                <div class="home-section__grid">
                    {PLANNER_TYPES
                        .iter()
                        .map(|(label, blurb)| {
                            view! {
                                <A href="/shop" attr:class="planner-type">
                                    <h3>{*label}</h3>
                                    <p>{*blurb}</p>
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home-section">
                <h2>"What Our Customers Say"</h2>
                <div class="home-section__grid"></div>
            </section>

            <section class="home-cta">
                <h2>"Ready to Start Planning?"</h2>
                <p>"Join thousands of satisfied customers and transform your planning experience today!"</p>
                <A href="/shop" attr:class="btn btn--light btn--large">"Get Your Planner Now"</A>
            </section>

            <Footer/>
        </div>
    }
}
