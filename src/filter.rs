pub const FILTER_ALL: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSelection(String);

impl Default for FilterSelection {
    fn default() -> Self {
        Self(FILTER_ALL.to_string())
    }
}

impl FilterSelection {
    pub fn new(filter: impl Into<String>) -> Self {
        Self(filter.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_button_active(&self, button_filter: &str) -> bool {
        self.0 == button_filter
    }

    pub fn shows(&self, category: &str) -> bool {
        self.0 == FILTER_ALL || self.0 == category
    }

    pub fn item_style(&self, category: &str) -> &'static str {
        if self.shows(category) {
            "display: block; animation: fadeInUp 0.5s ease-out;"
        } else {
            "display: none;"
        }
    }

    pub fn visible_count<'a>(&self, categories: impl IntoIterator<Item = &'a str>) -> usize {
        categories
            .into_iter()
            .filter(|category| self.shows(category))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTONS: [&str; 4] = ["all", "web", "mobile", "design"];
    const ITEMS: [&str; 5] = ["web", "mobile", "web", "design", "branding"];

    #[test]
    fn default_selection_shows_everything() {
        let selection = FilterSelection::default();

        assert_eq!(selection.visible_count(ITEMS), ITEMS.len());
        assert!(selection.is_button_active("all"));
    }

    #[test]
    fn each_click_leaves_exactly_one_active_button() {
        for clicked in BUTTONS {
            let selection = FilterSelection::new(clicked);
            let active = BUTTONS
                .iter()
                .filter(|button| selection.is_button_active(button))
                .count();

            assert_eq!(active, 1);
            for category in ITEMS {
                assert_eq!(
                    selection.shows(category),
                    clicked == FILTER_ALL || clicked == category
                );
            }
        }
    }

    #[test]
    fn item_style_hides_other_categories() {
        let selection = FilterSelection::new("web");

        assert_eq!(selection.item_style("mobile"), "display: none;");
        assert!(selection.item_style("web").contains("fadeInUp 0.5s ease-out"));
        assert_eq!(selection.visible_count(ITEMS), 2);
    }
}
