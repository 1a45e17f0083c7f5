//! Static portfolio content.
//!
//! DESIGN
//! ======
//! Every record is a `'static` literal: the site has no persistence or
//! editing, so views borrow straight from these tables and the structs stay
//! `Copy`. The section components take slices so tests can substitute their
//! own fixtures.

mod profile;
mod projects;
mod skills;

pub use profile::{EDUCATION, EXPERIENCE, INTERESTS, PROFILE};
pub use projects::PROJECTS;
pub use skills::SKILLS;

/// A named technology tag with the chip color used to render it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    /// Any CSS color value.
    pub color: &'static str,
}

/// A portfolio project shown in the gallery and its detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub thumbnail: &'static str,
    /// Gallery images. Empty means the thumbnail is the only image.
    pub images: &'static [&'static str],
    pub technologies: &'static [Technology],
    pub category: &'static str,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
}

/// A skill with a proficiency percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// 0–100.
    pub proficiency: u8,
    pub category: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLinks {
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
}

/// Identity and copy shared by the hero, about, contact and footer sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub introduction: &'static str,
    pub hero_background: &'static str,
    pub about_title: &'static str,
    pub about_subtitle: &'static str,
    pub bio: &'static str,
    pub photo_url: &'static str,
    pub email: &'static str,
    pub resume_url: &'static str,
    pub social: SocialLinks,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub position: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
