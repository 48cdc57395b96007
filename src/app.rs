mod certifications;
mod components;
mod designs;
mod footer;
mod hero;
mod navbar;
mod privacy;
mod projects;
mod skills;
mod timeline;
mod tracker;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_params_map, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{spy::SpyConfig, theme::Theme};

use certifications::Certifications;
use components::SectionDivider;
use designs::DesignsPage;
use footer::Footer;
use hero::{Hero, StatsStrip};
use navbar::Navbar;
use privacy::PrivacyPage;
use projects::Projects;
use skills::Skills;
use timeline::Timeline;
use tracker::use_section_tracker;

pub const LAST_DESIGN_KEY: &str = "last_design";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/png" href="/assets/img/logo-new.png" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SpyConfig::default());

    view! {
        <Title formatter=|title| format!("Radu Chiriac - {title}") />
        <Meta
            name="description"
            content="Portfolio of Radu Chiriac: HPC engineer, Linux enthusiast, Python tinkerer."
        />

        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=|| view! { <Portfolio theme=Theme::Glass /> } />
                <Route path=path!("/designs") view=DesignsPage />
                <Route path=path!("/design/:theme") view=DesignPage />
                <Route path=path!("/privacy") view=PrivacyPage />
            </Routes>
        </Router>
    }
}

#[component]
fn DesignPage() -> impl IntoView {
    let params = use_params_map();
    let theme = move || params.get().get("theme").unwrap_or_default().parse::<Theme>();
    move || match theme() {
        Ok(theme) => view! { <Portfolio theme /> }.into_any(),
        Err(e) => {
            log::debug!("{e}");
            view! { <NotFound /> }.into_any()
        }
    }
}

/// One template for every design; the theme only changes styling.
#[component]
fn Portfolio(theme: Theme) -> impl IntoView {
    let config = use_context::<SpyConfig>().unwrap_or_default();
    let tracker = use_section_tracker(config);
    provide_context(tracker);
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    {
        let (_, set_last_design, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>(LAST_DESIGN_KEY);
        set_last_design.set(theme);
    }

    let style = theme.style();
    let root_class = format!(
        "min-h-screen overflow-x-hidden bg-background text-foreground font-body theme-{}",
        theme.slug()
    );

    view! {
        <Title text=theme.name() />
        <div class=root_class style=style.css_vars()>
            <Navbar />
            <main class="w-full">
                <Hero />
                <StatsStrip />
                <SectionDivider />
                <Projects />
                <SectionDivider />
                <Timeline />
                <SectionDivider />
                <Skills />
                <SectionDivider />
                <Certifications />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center gap-6 bg-black text-white">
            <h1 class="text-6xl font-bold">"404"</h1>
            <p class="text-zinc-400">"Nothing lives at this address."</p>
            <A href="/" attr:class="text-purple-400 hover:underline">
                "Back home"
            </A>
        </div>
    }
}
