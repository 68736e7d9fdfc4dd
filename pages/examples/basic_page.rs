//! Basic page generation example.
//!
//! Run with: `cargo run --example basic_page`

use page_leptos::compose::GridLayout;
use page_leptos::types::{Accent, FeatureCard, PageContent};
use page_leptos::{DocumentOptions, compose_and_render};

fn main() {
    let content = PageContent {
        title: "Welcome".into(),
        introduction: "A platform for technical interviews.".into(),
        sections: vec![
            FeatureCard::new("Interview", "Generate questions and record answers.", Accent::Primary),
            FeatureCard::new("Settings", "Tune recording and answer length.", Accent::Secondary),
            FeatureCard::new("History", "Review past interviews.", Accent::Tertiary),
        ],
    };

    let options = DocumentOptions {
        lang: "en".into(),
        ..Default::default()
    };

    let html = compose_and_render(&content, &GridLayout::default(), &options)
        .expect("example content is valid");

    let output_path = "basic_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
