use super::*;

#[test]
fn project_ids_are_unique() {
    let mut ids: Vec<&str> = PROJECTS.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PROJECTS.len());
}

#[test]
fn projects_cover_two_categories() {
    assert_eq!(PROJECTS.len(), 4);
    assert!(PROJECTS.iter().all(|p| p.category == ".NET" || p.category == "Laravel"));
}

#[test]
fn every_project_has_something_to_show_in_gallery() {
    for project in PROJECTS {
        assert!(!project.thumbnail.is_empty(), "{} has no thumbnail", project.title);
        assert!(!project.technologies.is_empty(), "{} has no technologies", project.title);
    }
}

#[test]
fn skill_proficiency_within_percent_range() {
    assert_eq!(SKILLS.len(), 12);
    assert!(SKILLS.iter().all(|s| s.proficiency <= 100));
}

#[test]
fn profile_mailto_prefixes_address() {
    assert_eq!(PROFILE.mailto(), "mailto:mohamedoo1997@hotmail.com");
}

#[test]
fn about_lists_are_populated() {
    assert_eq!(EDUCATION.len(), 2);
    assert_eq!(EXPERIENCE.len(), 2);
    assert_eq!(INTERESTS.len(), 5);
}
