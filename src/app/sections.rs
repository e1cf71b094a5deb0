use leptos::{html, prelude::*};

use crate::content::{CHARACTERISTICS, PROJECTS, SKILLS};

#[component]
pub fn AboutSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="about-me" node_ref=node_ref class="bg-[#0a0a0a] py-20">
            <div class="max-w-7xl mx-auto px-8">
                <div class="flex flex-col md:flex-row gap-12">
                    <div class="md:w-1/4 flex flex-col items-center justify-center gap-6">
                        <img
                            src="/wait-a-minute-who-are-you.gif"
                            alt="wait a minute... who are you?"
                            class="w-full max-w-[300px] rounded-lg"
                            width="300"
                            height="169"
                        />
                        <p class="font-mono italic text-neutral-200 text-xl text-center">
                            "\"wait, who are you anyway?\""
                        </p>
                    </div>
                    <div class="md:w-3/4 text-neutral-300 space-y-6">
                        <p class="leading-relaxed">
                            "Hello! I'm " <b>"Michael C. Baterna"</b>
                            ", otherwise known by my online handle as " <b>"ALinuxPerson"</b>
                            " (even though I use a Mac now). I have a deep and undying love for computers, technology, and software development, even as a young child, and see them as tools that can change the world for the better despite their many challenges. I specialize in making desktop-oriented applications and embedded programming, but I'm not afraid to dabble in the occasional web and game development."
                        </p>
                        <p class="leading-relaxed">
                            "I believe there is a logical and scientific explanation for everything in this world, even for things that cannot be solved with the scientific method. Because of this belief, I have become a naturally curious and logical thinker, which drew me to software development like flies to an apple pie. When I'm not developing "
                            <i>"The Next Big Thing™"</i>
                            ", I'm typically out enjoying nature and going on walks. And when I'm stuck inside my house, I dabble in some casual gaming, such as Minecraft, Deltarune, and others."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CharacterSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="character" node_ref=node_ref class="bg-white py-20">
            <div class="max-w-7xl mx-auto px-8">
                <div class="flex flex-col md:flex-row gap-12">
                    <div class="md:w-3/4 space-y-8">
                        {CHARACTERISTICS
                            .iter()
                            .map(|c| {
                                view! {
                                    <div class="characteristic-card bg-gradient-to-br from-gray-50 to-gray-100 p-6 rounded-xl shadow-lg border border-gray-200 transform hover:scale-105 transition-transform duration-300 flex items-center gap-4">
                                        <img
                                            src=c.image
                                            alt=c.title
                                            class="w-64 h-16 rounded-md shadow-md"
                                            width=c.width.to_string()
                                            height=c.height.to_string()
                                        />
                                        <div>
                                            <h3 class="text-2xl font-bold mb-3 bg-gradient-to-r from-gray-800 to-gray-600 bg-clip-text text-transparent">
                                                {c.title}
                                            </h3>
                                            <p class="text-gray-700 leading-relaxed">{c.description}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="md:w-1/4 flex flex-col items-center justify-center">
                        <img
                            src="/the-office-eli5.gif"
                            alt="why don't you explain this to me like i'm 5?"
                            class="w-full max-w-[600px] rounded-lg shadow-lg mb-6"
                            width="600"
                            height="338"
                        />
                        <p class="font-mono italic text-gray-700 text-xl text-center">
                            "\"curious, open-minded, and ambitious... can you explain what that means?\""
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="technical-skills" node_ref=node_ref class="bg-black py-20 text-white">
            <div class="text-center font-mono italic text-2xl mb-12">
                "\"alright, but what can you do?\""
            </div>
            <div class="flex flex-wrap justify-center gap-12">
                {SKILLS
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="flex flex-col items-center text-center max-w-xs">
                                <img
                                    src=skill.image
                                    alt=skill.title
                                    class="w-48 h-48 mb-4"
                                    width=skill.width.to_string()
                                    height=skill.height.to_string()
                                />
                                <h3 class="text-xl font-bold mb-2">{skill.title}</h3>
                                <p class="text-gray-300">{skill.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id="projects" node_ref=node_ref class="bg-[#0a0a0a] py-20">
            <div class="max-w-7xl mx-auto px-8">
                <div class="text-center font-mono italic text-2xl text-neutral-200 mb-12">
                    "\"show me, don't tell me.\""
                </div>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <a
                                    href=project.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="block bg-neutral-900/50 p-6 rounded-lg border border-neutral-800 hover:border-neutral-600 transition-colors duration-200"
                                >
                                    <h3 class="text-xl font-bold font-mono text-neutral-200 mb-2">
                                        {project.name}
                                    </h3>
                                    <p class="text-neutral-400 mb-4 leading-relaxed">
                                        {project.description}
                                    </p>
                                    <div>
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="rounded-md px-2 py-1 bg-neutral-800 text-neutral-300 mr-2 text-sm">
                                                        {*tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
