//! Heading and introduction regions

use crate::compose::{HeadingRegion, IntroductionRegion};
use leptos::prelude::*;

/// Page title followed by the introductory paragraph.
///
/// An empty introduction still renders its `<p>` so the grid keeps its
/// vertical position.
#[component]
pub fn PageHeader(heading: HeadingRegion, introduction: IntroductionRegion) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">{heading.text}</h1>
            <p class="page-intro">{introduction.text}</p>
        </header>
    }
}
