use leptos::prelude::*;

use crate::content::{Skill, SkillCategory, SKILLS};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="section-title scroll-reveal">"Skills"</h2>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {SKILLS.iter().map(|category| view! { <Category category /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Category(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="skill-category scroll-reveal">
            <h3 class="text-lg font-bold mb-4">{category.title}</h3>
            <ul class="space-y-3">
                {category.skills.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let level = skill.level;
    view! {
        <li>
            <div class="flex justify-between text-sm mb-1">
                <span>{skill.name}</span>
                <span class="text-gray-500">{level.label()}</span>
            </div>
            <div class="h-2 rounded bg-gray-200" role="presentation">
                <div
                    class=format!("h-2 rounded {}", level.bar_class())
                    style:width=format!("{}%", level.percent())
                ></div>
            </div>
        </li>
    }
}
