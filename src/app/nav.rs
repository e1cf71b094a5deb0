use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::content::{Section, PERSONAL, SECTIONS};
use crate::scroll_spy::{nav_link_class, ScrollSpy, Visibility, VISIBILITY_THRESHOLD};

/// One node ref per navigable section, in page order.
#[derive(Clone)]
pub struct SectionRefs {
    refs: Vec<(&'static str, NodeRef<html::Section>)>,
}

impl SectionRefs {
    pub fn new() -> Self {
        Self {
            refs: SECTIONS.iter().map(|s| (s.id, NodeRef::new())).collect(),
        }
    }

    /// Sections without an entry get a detached ref that is never observed.
    pub fn get(&self, id: &str) -> NodeRef<html::Section> {
        self.refs
            .iter()
            .find_map(|(sid, r)| (*sid == id).then_some(*r))
            .unwrap_or_else(NodeRef::new)
    }
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}

/// Watches every section and keeps the highlight on the one in view.
/// Observers stop when the calling component is disposed.
pub fn use_scroll_spy(refs: &SectionRefs) -> RwSignal<ScrollSpy> {
    let spy = RwSignal::new(ScrollSpy::new(SECTIONS));
    for (id, node_ref) in refs.refs.iter().copied() {
        use_intersection_observer_with_options(
            node_ref,
            move |entries, _| {
                for entry in entries {
                    let seen = Visibility::new(entry.is_intersecting(), entry.intersection_ratio());
                    spy.maybe_update(|s| s.observe(id, seen));
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![VISIBILITY_THRESHOLD]),
        );
    }
    spy
}

#[component]
pub fn NavigationBar(spy: RwSignal<ScrollSpy>) -> impl IntoView {
    view! {
        <nav class="z-30 fixed top-0 w-full px-6 py-4 flex justify-between bg-[#0a0a0a]/80 backdrop-blur-sm border-b border-neutral-800">
            <div class="flex items-center">
                <span class="font-mono font-bold text-[#ededed]">
                    {PERSONAL.name}
                    <span class="inline-block w-[0.5em] h-[1.1em] ml-[2px] animate-[blink_1s_steps(2)_infinite]">
                        "_"
                    </span>
                </span>
            </div>
            <div class="flex gap-6">
                {SECTIONS.iter().map(|section| view! { <NavLink section spy /> }).collect_view()}
            </div>
        </nav>
    }
}

#[component]
fn NavLink(section: &'static Section, spy: RwSignal<ScrollSpy>) -> impl IntoView {
    let id = section.id;
    view! {
        <a
            href=section.href()
            class=move || nav_link_class(spy.with(|s| s.is_active(id)))
            aria-current=move || spy.with(|s| s.is_active(id)).then_some("true")
        >
            {section.label}
        </a>
    }
}
