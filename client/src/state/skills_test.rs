use super::*;
use crate::content::SKILLS;

const fn s(name: &'static str, proficiency: u8, category: &'static str) -> Skill {
    Skill { name, proficiency, category }
}

#[test]
fn groups_follow_first_appearance_order() {
    let skills = [s("a", 10, "X"), s("b", 20, "Y"), s("c", 30, "X")];
    let groups = group_by_category(&skills);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].category, "X");
    assert_eq!(groups[0].skills.iter().map(|s| s.name).collect::<Vec<_>>(), vec!["a", "c"]);
    assert_eq!(groups[1].category, "Y");
}

#[test]
fn empty_input_has_no_groups() {
    assert!(group_by_category(&[]).is_empty());
}

#[test]
fn site_skills_form_seven_groups() {
    let groups = group_by_category(SKILLS);
    let names: Vec<_> = groups.iter().map(|g| g.category).collect();
    assert_eq!(names, vec!["Frontend", "Backend", "Database", "API", "DevOps", "Cloud", "Tools"]);
    assert_eq!(groups[0].skills.len(), 3);
    assert_eq!(groups[0].skills[2].name, "Tailwind CSS");
}

#[test]
fn bar_width_clamps_above_hundred() {
    assert_eq!(bar_width_percent(0), 0);
    assert_eq!(bar_width_percent(85), 85);
    assert_eq!(bar_width_percent(100), 100);
    assert_eq!(bar_width_percent(250), 100);
}
