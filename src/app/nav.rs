use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::content::{FULL_NAME, NAV_LINKS};
use super::icons::{Icon, IconGlyph};
use super::theme::ThemeToggle;

/// Scroll depth (px) past which the fixed header gets a solid background.
const SCROLL_THRESHOLD: f64 = 50.0;

#[component]
pub fn Navigation() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    let bar_class = move || {
        if scroll_y.get() > SCROLL_THRESHOLD {
            "transition-all duration-300 bg-white dark:bg-dark-900 shadow-lg"
        } else {
            "transition-all duration-300 bg-transparent"
        }
    };

    let panel_class = move || {
        if menu_open.get() {
            "fixed right-0 top-0 h-full w-64 bg-white dark:bg-dark-900 shadow-2xl z-50 overflow-y-auto transition-transform duration-300 translate-x-0"
        } else {
            "fixed right-0 top-0 h-full w-64 bg-white dark:bg-dark-900 shadow-2xl z-50 overflow-y-auto transition-transform duration-300 translate-x-full"
        }
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50">
            <div class=bar_class>
                <div class="container-custom">
                    <div class="flex justify-between items-center h-20">
                        <a
                            href="#top"
                            class="text-2xl font-bold text-gray-900 dark:text-gray-100 hover:text-primary-600 dark:hover:text-primary-400 transition-colors duration-200"
                        >
                            {FULL_NAME}
                        </a>

                        <div class="hidden md:flex items-center space-x-8">
                            {NAV_LINKS
                                .iter()
                                .map(|(label, href)| {
                                    view! {
                                        <a
                                            href=*href
                                            class="text-gray-700 dark:text-gray-300 hover:text-primary-600 dark:hover:text-primary-400 transition-colors duration-200 font-medium"
                                        >
                                            {*label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <ThemeToggle />
                        </div>

                        <div class="md:hidden flex items-center space-x-4">
                            <ThemeToggle />
                            <button
                                type="button"
                                class="p-2 text-gray-700 dark:text-gray-300"
                                aria-label="Toggle menu"
                                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            >
                                {move || {
                                    if menu_open.get() {
                                        view! { <IconGlyph icon=Icon::Close /> }
                                    } else {
                                        view! { <IconGlyph icon=Icon::Menu /> }
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div
                                class="fixed inset-0 bg-black/50 z-40"
                                on:click=move |_| set_menu_open.set(false)
                            ></div>
                        }
                    })
            }}

            <div class=panel_class>
                <div class="p-6">
                    <div class="flex justify-end mb-8">
                        <button
                            type="button"
                            class="p-2 text-gray-700 dark:text-gray-300"
                            aria-label="Close menu"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            <IconGlyph icon=Icon::Close />
                        </button>
                    </div>
                    <div class="space-y-4">
                        {NAV_LINKS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class="block w-full text-left px-4 py-3 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-dark-700 rounded-lg transition-colors duration-200 font-medium"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
