use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use super::LAST_DESIGN_KEY;
use crate::theme::Theme;

/// Gallery of every design, with the last one visited marked.
#[component]
pub fn DesignsPage() -> impl IntoView {
    let last_design = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, _, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(LAST_DESIGN_KEY);
        Effect::watch(
            || (),
            move |_, _, _| last_design.set(stored.get_untracked()),
            true,
        );
    }

    view! {
        <Title text="Designs" />
        <div class="min-h-screen bg-zinc-950 text-zinc-100 px-6 py-20">
            <div class="max-w-6xl mx-auto">
                <h1 class="text-5xl md:text-7xl font-bold mb-4">"Designs"</h1>
                <p class="text-zinc-400 mb-12 max-w-2xl">
                    "The same portfolio, six ways. Pick one to see it in full."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {Theme::ALL
                        .into_iter()
                        .map(|theme| {
                            let palette = theme.style().palette;
                            let swatch = format!(
                                "background: linear-gradient(135deg, {} 0%, {} 50%, {} 100%);",
                                palette.background,
                                palette.primary,
                                palette.accent,
                            );
                            view! {
                                <A
                                    href=theme.href()
                                    attr:class="group block rounded-2xl overflow-hidden border border-zinc-800 hover:border-zinc-500 transition-colors"
                                >
                                    <div class="h-32" style=swatch></div>
                                    <div class="p-6 space-y-2">
                                        <div class="flex items-center justify-between">
                                            <h2 class="text-xl font-semibold">{theme.name()}</h2>
                                            <Show when=move || last_design.get() == theme>
                                                <span class="text-xs uppercase tracking-widest text-emerald-400">
                                                    "Last viewed"
                                                </span>
                                            </Show>
                                        </div>
                                        <p class="text-sm text-zinc-400">{theme.description()}</p>
                                        <p class="text-xs text-zinc-600">
                                            {if theme.is_light() { "Light" } else { "Dark" }}
                                        </p>
                                    </div>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
