//! The portfolio page: every section in scroll order.

use leptos::prelude::*;

use crate::components::{
    about_section::AboutSection, contact_section::ContactSection, footer::Footer, hero_section::HeroSection,
    navbar::Navbar, projects_section::ProjectsSection, skills_section::SkillsSection, toast::ToastViewport,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar transparent=true/>
            <main>
                <HeroSection/>
                <ProjectsSection/>
                <SkillsSection/>
                <AboutSection/>
                <ContactSection/>
            </main>
            <Footer/>
            <ToastViewport/>
        </div>
    }
}
