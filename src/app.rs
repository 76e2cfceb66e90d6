mod about;
pub mod contact;
pub mod content;
mod experience;
pub mod filter;
mod footer;
mod hero;
pub mod icons;
mod nav;
mod projects;
pub mod reveal;
mod skills;
pub mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use nav::Navigation;
use projects::ProjectsSection;
use skills::SkillsSection;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-50 dark:bg-dark-900 text-gray-900 dark:text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // The theme controller owns the persisted preference and the root marker.
    provide_theme();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", content::FULL_NAME) />
        <Meta
            name="description"
            content="Personal portfolio of Apostolos Bletsas: projects, experience, skills, and contact."
        />

        <Router>
            <Navigation />
            <main class="min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=content::ROLE />
        <HeroSection />
        <AboutSection />
        <ProjectsSection />
        <ExperienceSection />
        <SkillsSection />
        <ContactSection />
    }
}
