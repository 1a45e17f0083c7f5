//! Skills panel grouping.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::content::Skill;

/// One card on the skills panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: Vec<Skill>,
}

/// Group skills by category, ordering groups by first appearance and
/// keeping the input order inside each group.
#[must_use]
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(*skill),
            None => groups.push(SkillGroup { category: skill.category, skills: vec![*skill] }),
        }
    }
    groups
}

/// Progress bar fill, clamped to 100.
#[must_use]
pub fn bar_width_percent(proficiency: u8) -> u8 {
    proficiency.min(100)
}
