use super::*;

#[test]
fn copyright_line_formats_year_and_name() {
    assert_eq!(copyright_line(2025, "Mohamed Bayomy"), "© 2025 Mohamed Bayomy. All rights reserved.");
}
