use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

use super::components::IconView;
use crate::{
    data::{PROFILE, SOCIALS},
    icons::Icon,
};

/// Year the site was built, used for the copyright line.
fn build_year() -> i32 {
    match DateTime::parse_from_rfc3339(env!("BUILD_TIME")) {
        Ok(dt) => dt.year(),
        Err(_) => Utc::now().year(),
    }
}

fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative overflow-hidden border-t border-muted/20">
            <div class="absolute bottom-0 left-1/2 -translate-x-1/2 w-[600px] h-[200px] bg-primary/5 blur-[100px] rounded-full"></div>
            <div class="relative z-10 max-w-7xl mx-auto px-6 lg:px-12 py-16 flex flex-col items-center text-center">
                <button
                    class="mb-8 p-4 rounded-full bg-surface text-2xl text-muted hover:bg-primary/20 hover:text-primary transition-all duration-300"
                    aria-label="Scroll to top"
                    on:click=move |_| scroll_to_top()
                >
                    <IconView icon=Icon::ArrowUp />
                </button>
                <div class="flex gap-3 mb-12">
                    {SOCIALS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.name
                                    class="flex items-center justify-center w-12 h-12 rounded-full bg-surface text-muted hover:bg-primary/20 hover:text-primary transition-all duration-300"
                                >
                                    <IconView icon=social.icon() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="w-32 h-px bg-gradient-to-r from-transparent via-muted/40 to-transparent mb-8"></div>
                <p class="text-muted/60 text-xs">
                    {format!("© {} {}. Crafted with passion.", build_year(), PROFILE.name)}
                </p>
                <A href="/privacy" attr:class="mt-4 text-muted/60 text-xs hover:text-primary">
                    "Privacy"
                </A>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_year_is_plausible() {
        assert!(build_year() >= 2024);
    }
}
