//! Feature grid and card components

use crate::compose::{GridRegion, GridSlot};
use leptos::prelude::*;

/// Responsive grid of feature cards, one per slot in slot order.
#[component]
pub fn FeatureGrid(grid: GridRegion) -> impl IntoView {
    let columns = grid.layout.wide_columns.to_string();
    let rows = grid.rows.to_string();

    view! {
        <section class="feature-grid" data-columns=columns data-rows=rows>
            {grid.slots.into_iter().map(|card| {
                view! { <FeatureCardView card=card /> }
            }).collect::<Vec<_>>()}
        </section>
    }
}

/// A single bordered card: accented sub-heading, then body text
#[component]
pub fn FeatureCardView(card: GridSlot) -> impl IntoView {
    let class = format!("feature-card {}", card.theme.class);
    let position = card.index.to_string();

    view! {
        <article class=class data-slot=position data-accent=card.accent.as_str()>
            <h2>{card.heading}</h2>
            <p>{card.body}</p>
        </article>
    }
}
