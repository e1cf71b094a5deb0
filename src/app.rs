mod contact;
mod nav;
mod overview;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::OWNER_NAME;
use contact::ContactSection;
use nav::{use_scroll_spy, NavigationBar, SectionRefs};
use overview::OverviewSection;
use sections::{AboutSection, CharacterSection, ProjectsSection, SkillsSection};

pub use contact::SendMessage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#0a0a0a] text-[#ededed] scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=OWNER_NAME />
        <Meta name="description" content="michael baterna - software developer, in development." />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole portfolio is one page; the nav bar renders last so it sits on top.
#[component]
fn HomePage() -> impl IntoView {
    let refs = SectionRefs::new();
    let spy = use_scroll_spy(&refs);

    view! {
        <div>
            <OverviewSection node_ref=refs.get("overview") />
            <AboutSection node_ref=refs.get("about-me") />
            <CharacterSection node_ref=refs.get("character") />
            <SkillsSection node_ref=refs.get("technical-skills") />
            <ProjectsSection node_ref=refs.get("projects") />
            <ContactSection node_ref=refs.get("contact") />
            <NavigationBar spy />
        </div>
    }
}
