use leptos::{either::Either, ev::MouseEvent, html, prelude::*};
use leptos_router::components::A;
use leptos_use::on_click_outside;

use super::{components::IconView, tracker::SectionTracker};
use crate::{
    icons::Icon,
    nav::{NavItem, NAV_ITEMS},
    spy::MenuState,
    theme::Theme,
};

#[component]
pub fn Navbar() -> impl IntoView {
    let tracker = expect_context::<SectionTracker>();
    let theme = expect_context::<Theme>();
    let (menu, set_menu) = signal(MenuState::default());
    let header_ref = NodeRef::<html::Header>::new();

    let _ = on_click_outside(header_ref, move |_| {
        if menu.get_untracked().is_open() {
            set_menu.update(|m| *m = m.dismiss());
        }
    });

    let header_class = move || {
        if tracker.is_scrolled().get() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-3 bg-surface backdrop-blur-md border-b border-muted/10 shadow-lg"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-300 py-5 bg-transparent"
        }
    };

    view! {
        <header node_ref=header_ref class=header_class>
            <nav class="container mx-auto px-6 flex items-center justify-between">
                <A
                    href="/designs"
                    attr:class="font-heading font-bold text-lg hover:text-primary transition-colors"
                    attr:title="Browse designs"
                >
                    {theme.name()}
                </A>
                <ul class="hidden md:flex items-center gap-2">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <NavLink item=*item on_select=move || {} />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="md:hidden p-2 text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu.update(|m| *m = m.toggle())
                >
                    {move || {
                        if menu.get().is_open() {
                            view! { <IconView icon=Icon::Close /> }
                        } else {
                            view! { <IconView icon=Icon::Menu /> }
                        }
                    }}
                </button>
            </nav>
            <Show when=move || menu.get().is_open()>
                <div class="md:hidden bg-surface backdrop-blur-md border-t border-muted/10">
                    <ul class="container mx-auto px-6 py-4 flex flex-col gap-2">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <NavLink
                                            item=*item
                                            on_select=move || set_menu.update(|m| *m = m.select_item())
                                        />
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </header>
    }
}

/// One entry, either a section button or an external link. `on_select`
/// runs after navigation starts.
#[component]
fn NavLink<F>(item: NavItem, on_select: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let tracker = expect_context::<SectionTracker>();
    match item.section_id() {
        Some(id) => {
            let class = move || {
                let base = "relative px-5 py-2.5 rounded-full text-sm font-medium transition-colors duration-200 block";
                if item.is_active(tracker.active().get().as_deref()) {
                    format!("{base} text-primary bg-primary/10")
                } else {
                    format!("{base} text-muted hover:text-foreground")
                }
            };
            Either::Left(view! {
                <a
                    href=item.href()
                    class=class
                    aria-current=move || {
                        if item.is_active(tracker.active().get().as_deref()) {
                            Some("location")
                        } else {
                            None
                        }
                    }
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        tracker.activate(id);
                        on_select();
                    }
                >
                    {item.label}
                </a>
            })
        }
        None => Either::Right(view! {
            <a
                href=item.href()
                target="_blank"
                rel="noopener noreferrer"
                class="relative px-5 py-2.5 rounded-full text-sm font-medium text-muted hover:text-foreground transition-colors duration-200 block"
                on:click=move |_| on_select()
            >
                {item.label}
            </a>
        }),
    }
}
