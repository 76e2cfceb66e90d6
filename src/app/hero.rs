use leptos::prelude::*;

use super::content::{FULL_NAME, RESUME_FILENAME, RESUME_PATH, ROLE, SOCIAL_LINKS};
use super::icons::{Icon, IconGlyph};

/// Landing section. Animates on load rather than on reveal, so it only
/// carries the stylesheet's entrance classes.
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            id="top"
            class="min-h-screen flex items-center justify-center section-padding bg-gradient-to-br from-gray-50 to-gray-100 dark:from-dark-900 dark:to-dark-800"
        >
            <div class="container-custom">
                <div class="text-center lg:text-left fade-up">
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-gray-900 dark:text-gray-100 mb-6">
                        "Hello there!"
                        <br />
                        "I'm "
                        <span class="text-primary-600 dark:text-primary-400">{FULL_NAME}</span>
                    </h1>
                    <h2 class="text-xl md:text-2xl text-gray-600 dark:text-gray-300 mb-8">{ROLE}</h2>
                    <p class="text-lg text-gray-600 dark:text-gray-400 mb-8 max-w-2xl">
                        "Passionate about leveraging cutting-edge AI technologies and modern software "
                        "development to create intelligent solutions. I specialize in building AI-powered "
                        "applications, web development, and exploring the intersection of artificial "
                        "intelligence with practical software solutions."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                        <a
                            href="#contact"
                            class="btn-primary flex items-center justify-center gap-2 px-8 py-3 text-lg"
                        >
                            "Get In Touch"
                            <IconGlyph icon=Icon::Email />
                        </a>
                        <a
                            href=RESUME_PATH
                            download=RESUME_FILENAME
                            class="btn-secondary flex items-center justify-center gap-2 px-8 py-3 text-lg"
                        >
                            "Download Resume"
                            <IconGlyph icon=Icon::Download />
                        </a>
                    </div>

                    <div class="flex justify-center lg:justify-start gap-6 mt-8">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.name
                                        class="text-gray-600 dark:text-gray-400 hover:text-primary-600 dark:hover:text-primary-400 transition-colors duration-200 text-2xl"
                                    >
                                        <IconGlyph icon=social.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
