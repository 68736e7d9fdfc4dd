//! Root document component - the complete HTML page
//!
//! Backdrop, centred panel, then the three regions in order.

use super::{FeatureGrid, PageHeader};
use crate::DocumentOptions;
use crate::compose::RenderedPage;
use crate::styles::{CSP, stylesheet};
use leptos::prelude::*;

/// The complete HTML document for a composed page
#[component]
pub fn PageDocument(page: RenderedPage, options: DocumentOptions) -> impl IntoView {
    let RenderedPage {
        heading,
        introduction,
        grid,
    } = page;

    let document_title = options
        .document_title
        .clone()
        .unwrap_or_else(|| heading.text.clone());
    // inner_html keeps caller CSS (child combinators etc.) unescaped
    let css = stylesheet(&grid.layout, options.extra_css.as_deref());

    view! {
        <html lang=options.lang>
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{document_title}</title>
                <style inner_html=css></style>
            </head>
            <body>
                <div class="page-container">
                    <main class="page-panel">
                        <PageHeader heading=heading introduction=introduction />
                        <FeatureGrid grid=grid />
                    </main>
                </div>
            </body>
        </html>
    }
}
