use leptos::{either::Either, prelude::*};

use crate::{icons::Icon, theme::Theme};

#[component]
pub fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let label = icon.label();
    let aria_hidden = if label.is_empty() { "true" } else { "false" };
    match icon.class() {
        Some(font_class) => Either::Left(view! {
            <i class=format!("{font_class} {class}") aria-hidden=aria_hidden></i>
        }),
        None => Either::Right(view! {
            <span class=class role="img" aria-hidden=aria_hidden>
                {icon.glyph()}
            </span>
        }),
    }
}

#[component]
pub fn SectionDivider() -> impl IntoView {
    view! {
        <div class="w-full max-w-7xl mx-auto px-6 lg:px-12" aria-hidden="true">
            <div class="h-px bg-gradient-to-r from-transparent via-muted/30 to-transparent"></div>
        </div>
    }
}

#[component]
pub fn SectionHeading(
    #[prop(into)] lead: String,
    #[prop(into)] highlight: String,
) -> impl IntoView {
    let theme = expect_context::<Theme>();
    let animation = theme.style().animation.class();
    view! {
        <h2 class=format!(
            "text-4xl md:text-5xl lg:text-6xl font-bold font-heading text-center mb-16 {animation}",
        )>
            {lead}
            " "
            <span class="text-primary">{highlight}</span>
        </h2>
    }
}
