//! Project gallery filtering: free-text search plus category tabs.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::content::Project;

/// Synthetic category that matches every project.
pub const ALL_CATEGORY: &str = "all";

/// Tab labels: `"all"` first, then each distinct category in first-seen order.
#[must_use]
pub fn categories(projects: &[Project]) -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORY];
    for project in projects {
        if !out.contains(&project.category) {
            out.push(project.category);
        }
    }
    out
}

/// Current search text and selected category tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    pub search: String,
    pub category: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self { search: String::new(), category: ALL_CATEGORY.to_owned() }
    }
}

impl ProjectFilter {
    /// Case-insensitive substring match on title or description, AND the
    /// category gate.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = project.title.to_lowercase().contains(&needle)
            || project.description.to_lowercase().contains(&needle);
        let matches_category = self.category == ALL_CATEGORY || project.category == self.category;
        matches_search && matches_category
    }

    /// Visible projects in input order.
    #[must_use]
    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        projects
            .iter()
            .filter(|p| self.matches(p))
            .copied()
            .collect()
    }

    /// Reset to an empty search on the `"all"` tab.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
