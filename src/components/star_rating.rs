//! Star Rating Component

use leptos::prelude::*;

use crate::display::{format_rating_count, star_states};

/// Five stars, filled up to the rounded average, followed by the vote count
#[component]
pub fn StarRating(rate: f64, count: u32) -> impl IntoView {
    let stars = star_states(rate)
        .into_iter()
        .map(|filled| {
            view! {
                <span class=if filled { "star star-filled" } else { "star star-empty" }>"★"</span>
            }
        })
        .collect_view();

    view! {
        <div class="rating-container">
            {stars}
            <span class="rating-count">{format_rating_count(count)}</span>
        </div>
    }
}
