use std::collections::BTreeSet;

use crate::config::ScrollThresholds;
use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElementBox {
    pub key: String,
    pub top: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometrySnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub sections: Vec<SectionBox>,
    pub watched: Vec<ElementBox>,
    pub skills_top: Option<f64>,
}

// Later sections win when ranges overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBox], look_ahead: f64) -> Option<&str> {
    let offset = scroll_y + look_ahead;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(offset))
        .map(|section| section.id.as_str())
}

// Gaps between sections keep the previous link.
pub fn next_active_section(
    previous: Option<String>,
    scroll_y: f64,
    sections: &[SectionBox],
    look_ahead: f64,
) -> Option<String> {
    active_section(scroll_y, sections, look_ahead)
        .map(str::to_string)
        .or(previous)
}

pub fn is_link_active(active: Option<&str>, href: &str) -> bool {
    match (active, href.strip_prefix('#')) {
        (Some(active), Some(anchor)) => active == anchor,
        _ => false,
    }
}

pub fn reveal_candidates<'a>(
    watched: &'a [ElementBox],
    viewport_height: f64,
    offset: f64,
) -> impl Iterator<Item = &'a str> + 'a {
    let line = viewport_height - offset;
    watched
        .iter()
        .filter(move |element| element.top < line)
        .map(|element| element.key.as_str())
}

// Keys are only ever added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: BTreeSet<String>,
}

impl RevealSet {
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn reveal<I, S>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for key in keys {
            let key = key.as_ref();
            if !self.revealed.contains(key) {
                self.revealed.insert(key.to_string());
                added += 1;
            }
        }
        added
    }
}

pub fn progress_fill_due(skills_top: Option<f64>, viewport_height: f64, offset: f64) -> bool {
    skills_top.is_some_and(|top| top < viewport_height - offset)
}

pub fn parse_bar_width(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .map_or(0.0, |value| value.min(100.0))
}

pub fn bar_style(width: f64, filled: bool) -> String {
    if filled {
        format!("width: {width}%;")
    } else {
        "width: 0%;".to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChromeState {
    #[default]
    Resting,
    Scrolled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderChrome {
    pub state: ChromeState,
    pub theme: Theme,
}

impl HeaderChrome {
    pub fn evaluate(scroll_y: f64, threshold: f64, theme: Theme) -> Self {
        let state = if scroll_y > threshold {
            ChromeState::Scrolled
        } else {
            ChromeState::Resting
        };
        Self { state, theme }
    }

    pub fn class(self) -> Option<&'static str> {
        (self.state == ChromeState::Scrolled).then_some("scrolled")
    }

    // Always sets both `background` and `box-shadow`.
    pub fn inline_style(self) -> &'static str {
        match (self.theme, self.state) {
            (Theme::Light, ChromeState::Resting) => {
                "background: rgba(255, 255, 255, 0.95); box-shadow: none;"
            }
            (Theme::Light, ChromeState::Scrolled) => {
                "background: rgba(255, 255, 255, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);"
            }
            (Theme::Dark, ChromeState::Resting) => {
                "background: rgba(17, 24, 39, 0.95); box-shadow: none;"
            }
            (Theme::Dark, ChromeState::Scrolled) => {
                "background: rgba(17, 24, 39, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.4);"
            }
        }
    }
}

pub fn section_reveal_style(revealed: bool) -> &'static str {
    if revealed {
        "opacity: 1; transform: translateY(0); transition: all 0.6s ease-out;"
    } else {
        "opacity: 0; transform: translateY(50px); transition: all 0.6s ease-out;"
    }
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * -0.5
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUiState {
    pub active_section: Option<String>,
    pub revealed: RevealSet,
    pub bars_filled: bool,
    pub chrome: HeaderChrome,
    pub parallax: f64,
}

impl ScrollUiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            active_section: None,
            revealed: RevealSet::default(),
            bars_filled: false,
            chrome: HeaderChrome {
                state: ChromeState::Resting,
                theme,
            },
            parallax: 0.0,
        }
    }
}

pub fn synchronize(
    previous: &ScrollUiState,
    snapshot: &GeometrySnapshot,
    theme: Theme,
    thresholds: &ScrollThresholds,
) -> ScrollUiState {
    let active_section = next_active_section(
        previous.active_section.clone(),
        snapshot.scroll_y,
        &snapshot.sections,
        thresholds.active_look_ahead,
    );

    let mut revealed = previous.revealed.clone();
    revealed.reveal(reveal_candidates(
        &snapshot.watched,
        snapshot.viewport_height,
        thresholds.reveal_offset,
    ));

    let bars_filled = previous.bars_filled
        || progress_fill_due(
            snapshot.skills_top,
            snapshot.viewport_height,
            thresholds.progress_offset,
        );

    ScrollUiState {
        active_section,
        revealed,
        bars_filled,
        chrome: HeaderChrome::evaluate(snapshot.scroll_y, thresholds.header_scrolled_after, theme),
        parallax: parallax_offset(snapshot.scroll_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox {
                id: "home".into(),
                top: 0.0,
                height: 600.0,
            },
            SectionBox {
                id: "about".into(),
                top: 600.0,
                height: 500.0,
            },
            // gap between 1100 and 1200
            SectionBox {
                id: "skills".into(),
                top: 1200.0,
                height: 700.0,
            },
        ]
    }

    fn snapshot(scroll_y: f64) -> GeometrySnapshot {
        GeometrySnapshot {
            scroll_y,
            viewport_height: 800.0,
            sections: sections(),
            watched: vec![
                ElementBox {
                    key: "card-a".into(),
                    top: 600.0 - scroll_y,
                },
                ElementBox {
                    key: "card-b".into(),
                    top: 1400.0 - scroll_y,
                },
            ],
            skills_top: Some(1200.0 - scroll_y),
        }
    }

    #[test]
    fn look_ahead_selects_section_containing_biased_offset() {
        let sections = sections();

        assert_eq!(active_section(0.0, &sections, 100.0), Some("home"));
        assert_eq!(active_section(499.0, &sections, 100.0), Some("home"));
        assert_eq!(active_section(500.0, &sections, 100.0), Some("about"));
        assert_eq!(active_section(1150.0, &sections, 100.0), Some("skills"));
        assert_eq!(active_section(1050.0, &sections, 100.0), None);
    }

    #[test]
    fn exactly_one_link_is_active_inside_a_section() {
        let hrefs = ["#home", "#about", "#skills", "#contact"];
        for scroll_y in [0.0, 250.0, 700.0, 1300.0, 1799.0] {
            let active = next_active_section(None, scroll_y, &sections(), 100.0);
            let marked: Vec<_> = hrefs
                .iter()
                .filter(|href| is_link_active(active.as_deref(), href))
                .collect();

            assert_eq!(marked.len(), 1, "scroll_y = {scroll_y}");
        }
    }

    #[test]
    fn gap_keeps_previous_active_link() {
        let kept = next_active_section(Some("about".into()), 1050.0, &sections(), 100.0);
        assert_eq!(kept.as_deref(), Some("about"));

        let none = next_active_section(None, 1050.0, &[], 100.0);
        assert_eq!(none, None);
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let overlapping = vec![
            SectionBox {
                id: "a".into(),
                top: 0.0,
                height: 500.0,
            },
            SectionBox {
                id: "b".into(),
                top: 400.0,
                height: 500.0,
            },
        ];

        assert_eq!(active_section(350.0, &overlapping, 100.0), Some("b"));
    }

    #[test]
    fn reveal_and_fill_never_revert() {
        let thresholds = ScrollThresholds::default();
        let start = ScrollUiState::new(Theme::Light);

        let scrolled = synchronize(&start, &snapshot(900.0), Theme::Light, &thresholds);
        assert!(scrolled.revealed.is_revealed("card-a"));
        assert!(scrolled.revealed.is_revealed("card-b"));
        assert!(scrolled.bars_filled);

        let back_to_top = synchronize(&scrolled, &snapshot(0.0), Theme::Light, &thresholds);
        assert!(back_to_top.revealed.is_revealed("card-a"));
        assert!(back_to_top.revealed.is_revealed("card-b"));
        assert!(back_to_top.bars_filled);
        assert_eq!(back_to_top.chrome.state, ChromeState::Resting);
    }

    #[test]
    fn first_pass_catches_up_with_a_page_opened_mid_scroll() {
        let thresholds = ScrollThresholds::default();
        let fresh = ScrollUiState::new(Theme::Dark);

        let mounted = synchronize(&fresh, &snapshot(900.0), Theme::Dark, &thresholds);
        assert_eq!(mounted.active_section.as_deref(), Some("about"));
        assert_eq!(mounted.revealed.len(), 2);
        assert!(mounted.bars_filled);
        assert_eq!(mounted.chrome.state, ChromeState::Scrolled);
    }

    #[test]
    fn reveal_uses_viewport_offset_line() {
        let watched = vec![
            ElementBox {
                key: "above".into(),
                top: 649.0,
            },
            ElementBox {
                key: "on-line".into(),
                top: 650.0,
            },
        ];
        let keys: Vec<_> = reveal_candidates(&watched, 800.0, 150.0).collect();

        assert_eq!(keys, vec!["above"]);
    }

    #[test]
    fn reveal_set_is_idempotent() {
        let mut set = RevealSet::default();

        assert_eq!(set.reveal(["about", "card-1"]), 2);
        assert_eq!(set.reveal(["card-1"]), 0);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn missing_skills_section_skips_fill() {
        assert!(!progress_fill_due(None, 800.0, 200.0));
        assert!(!progress_fill_due(Some(600.0), 800.0, 200.0));
        assert!(progress_fill_due(Some(599.0), 800.0, 200.0));
    }

    #[test]
    fn bar_width_is_clamped_percentage() {
        assert_eq!(parse_bar_width("85"), 85.0);
        assert_eq!(parse_bar_width(" 72.6 "), 72.6);
        assert_eq!(parse_bar_width("140"), 100.0);
        assert_eq!(parse_bar_width("-3"), 0.0);
        assert_eq!(parse_bar_width("wide"), 0.0);
        assert_eq!(bar_style(85.0, true), "width: 85%;");
        assert_eq!(bar_style(85.0, false), "width: 0%;");
    }

    #[test]
    fn fractional_bar_width_renders_unrounded() {
        assert_eq!(bar_style(parse_bar_width("72.6"), true), "width: 72.6%;");
        assert_eq!(bar_style(parse_bar_width("-0"), true), "width: 0%;");
    }

    #[test]
    fn header_chrome_toggles_at_boundary_for_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let resting = HeaderChrome::evaluate(99.0, 100.0, theme);
            let boundary = HeaderChrome::evaluate(100.0, 100.0, theme);
            let scrolled = HeaderChrome::evaluate(101.0, 100.0, theme);

            assert_eq!(resting.state, ChromeState::Resting);
            assert_eq!(boundary.state, ChromeState::Resting);
            assert_eq!(scrolled.state, ChromeState::Scrolled);
            assert_eq!(scrolled.class(), Some("scrolled"));
            assert_eq!(resting.class(), None);
            assert_ne!(resting.inline_style(), scrolled.inline_style());
        }

        assert_ne!(
            HeaderChrome::evaluate(101.0, 100.0, Theme::Light).inline_style(),
            HeaderChrome::evaluate(101.0, 100.0, Theme::Dark).inline_style()
        );
    }

    #[test]
    fn hidden_sections_start_offset() {
        assert!(section_reveal_style(false).contains("translateY(50px)"));
        assert!(section_reveal_style(true).starts_with("opacity: 1;"));
    }

    #[test]
    fn synchronize_reads_theme_at_each_call() {
        let thresholds = ScrollThresholds::default();
        let state = ScrollUiState::new(Theme::Light);

        let dark = synchronize(&state, &snapshot(300.0), Theme::Dark, &thresholds);
        assert_eq!(dark.chrome.theme, Theme::Dark);
        assert_eq!(dark.parallax, -150.0);
    }
}
