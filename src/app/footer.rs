use leptos::prelude::*;

use super::content::{FULL_NAME, NAV_LINKS, SOCIAL_LINKS};
use super::icons::{Icon, IconGlyph};

/// Year stamped by the build script for the copyright line.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-dark-900 text-gray-300">
            <div class="container-custom">
                <div class="py-16">
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        <div class="lg:col-span-2">
                            <h3 class="text-2xl font-bold text-white mb-4">{FULL_NAME}</h3>
                            <p class="text-gray-400 mb-6 max-w-md">
                                "Passionate software developer creating innovative solutions with "
                                "modern technologies. Let's build something amazing together."
                            </p>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.url
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.name
                                                class="p-2 text-gray-400 hover:text-white transition-colors duration-200 text-xl"
                                            >
                                                <IconGlyph icon=social.icon />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div>
                            <h4 class="text-lg font-semibold text-white mb-4">"Quick Links"</h4>
                            <div class="space-y-2">
                                {NAV_LINKS
                                    .iter()
                                    .map(|(label, href)| {
                                        view! {
                                            <a
                                                href=*href
                                                class="block text-gray-400 hover:text-white transition-colors duration-200"
                                            >
                                                {*label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div>
                            <h4 class="text-lg font-semibold text-white mb-4">"Back to Top"</h4>
                            <a
                                href="#top"
                                aria-label="Back to top"
                                class="inline-flex items-center gap-2 p-3 bg-dark-700 hover:bg-dark-600 rounded-lg text-gray-300 hover:text-white transition-colors duration-200"
                            >
                                <IconGlyph icon=Icon::ArrowUp />
                                "Top"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="py-6 border-t border-dark-700 flex flex-col sm:flex-row items-center justify-between gap-2 text-sm text-gray-400">
                    <div>"© " {BUILD_YEAR} " " {FULL_NAME} ". All rights reserved."</div>
                    <div class="flex items-center gap-1">
                        "Made with"
                        <IconGlyph icon=Icon::Heart />
                        "and Rust"
                    </div>
                </div>
            </div>
        </footer>
    }
}
