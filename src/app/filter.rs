use super::content::{Category, ProjectEntry, PROJECTS};

/// Client-side predicate narrowing the project list by its category tag.
/// `All` is the no-filtering sentinel. The selection is never persisted, so a
/// reload starts back at `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    /// Every selectable filter, `All` first, in button render order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(Self::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    pub fn matches(self, entry: &ProjectEntry) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => entry.category == category,
        }
    }
}

/// Projects passing the filter, in original insertion order. An empty result
/// is a legitimate outcome and rendered as an explicit empty state.
pub fn visible_projects(filter: CategoryFilter) -> Vec<&'static ProjectEntry> {
    filtered(&PROJECTS, filter)
}

fn filtered(entries: &[ProjectEntry], filter: CategoryFilter) -> Vec<&ProjectEntry> {
    entries.iter().filter(|p| filter.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::icons::Icon;

    #[test]
    fn test_all_sentinel_keeps_original_order() {
        let visible = visible_projects(CategoryFilter::All);
        assert_eq!(visible.len(), PROJECTS.len());
        for (shown, original) in visible.iter().zip(PROJECTS.iter()) {
            assert_eq!(shown.title, original.title);
        }
    }

    #[test]
    fn test_category_filter_matches_only_that_category() {
        for category in Category::ALL {
            let visible = visible_projects(CategoryFilter::Only(category));
            assert!(visible.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn test_ai_ml_scenario_three_entries_in_relative_order() {
        // fixed 8-item list with exactly 3 AI/ML-tagged entries
        assert_eq!(PROJECTS.len(), 8);
        let expected: Vec<&str> = PROJECTS
            .iter()
            .filter(|p| p.category == Category::AiMl)
            .map(|p| p.title)
            .collect();
        assert_eq!(expected.len(), 3);

        let visible = visible_projects(CategoryFilter::Only(Category::AiMl));
        let shown: Vec<&str> = visible.iter().map(|p| p.title).collect();
        assert_eq!(shown, expected);
    }

    #[test]
    fn test_empty_result_is_representable() {
        let entries = [ProjectEntry {
            title: "Solo",
            description: "only entry",
            technologies: &[],
            github: "https://example.com",
            live: None,
            category: Category::Java,
            icon: Icon::Java,
        }];
        let visible = filtered(&entries, CategoryFilter::Only(Category::Frontend));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_default_filter_is_all() {
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_options_start_with_all_sentinel() {
        let options: Vec<_> = CategoryFilter::options().collect();
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options.len(), 1 + Category::ALL.len());
    }
}
