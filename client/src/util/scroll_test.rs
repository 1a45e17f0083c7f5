use super::*;

#[test]
fn nav_links_follow_page_order() {
    let ids: Vec<_> = NAV_LINKS.iter().map(|l| l.section_id).collect();
    assert_eq!(ids, vec!["home", "projects", "skills", "about", "contact"]);
}

#[test]
fn nav_link_href_is_fragment() {
    assert_eq!(NAV_LINKS[1].href(), "#projects");
}

#[test]
fn normalize_section_id_strips_hash() {
    assert_eq!(normalize_section_id("#contact"), "contact");
    assert_eq!(normalize_section_id("contact"), "contact");
}

#[test]
fn scroll_offset_is_zero_without_browser() {
    assert!(scroll_offset().abs() < f64::EPSILON);
}
