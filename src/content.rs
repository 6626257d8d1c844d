pub const OWNER_NAME: &str = "Alex Morgan";
pub const OWNER_ROLE: &str = "Frontend developer & UI designer";

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        href: "#home",
        label: "Home",
    },
    NavLink {
        href: "#about",
        label: "About",
    },
    NavLink {
        href: "#skills",
        label: "Skills",
    },
    NavLink {
        href: "#portfolio",
        label: "Portfolio",
    },
    NavLink {
        href: "#contact",
        label: "Contact",
    },
];

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I design and build fast, accessible interfaces for the web, from first sketch to production.",
    "Lately I have been focused on design systems, motion, and keeping pages light on slow networks.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        value: "5+",
        label: "Years of experience",
    },
    Stat {
        value: "40+",
        label: "Projects shipped",
    },
    Stat {
        value: "25+",
        label: "Happy clients",
    },
];

pub struct SkillBar {
    pub name: &'static str,
    pub width: &'static str,
}

pub struct SkillCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub bars: &'static [SkillBar],
}

pub const SKILL_CARDS: [SkillCard; 3] = [
    SkillCard {
        title: "Frontend",
        icon: "fas fa-code",
        bars: &[
            SkillBar {
                name: "HTML & CSS",
                width: "95",
            },
            SkillBar {
                name: "JavaScript",
                width: "90",
            },
            SkillBar {
                name: "Rust & WebAssembly",
                width: "75",
            },
        ],
    },
    SkillCard {
        title: "Design",
        icon: "fas fa-palette",
        bars: &[
            SkillBar {
                name: "Figma",
                width: "88",
            },
            SkillBar {
                name: "Motion",
                width: "70",
            },
        ],
    },
    SkillCard {
        title: "Tooling",
        icon: "fas fa-tools",
        bars: &[
            SkillBar {
                name: "Git",
                width: "92",
            },
            SkillBar {
                name: "CI pipelines",
                width: "65",
            },
        ],
    },
];

pub struct FilterButton {
    pub filter: &'static str,
    pub label: &'static str,
}

pub const FILTER_BUTTONS: [FilterButton; 4] = [
    FilterButton {
        filter: "all",
        label: "All",
    },
    FilterButton {
        filter: "web",
        label: "Web",
    },
    FilterButton {
        filter: "mobile",
        label: "Mobile",
    },
    FilterButton {
        filter: "design",
        label: "Design",
    },
];

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub live_url: &'static str,
    pub source_url: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Storefront",
        category: "web",
        description: "Headless shop front with instant search.",
        image: "images/storefront.jpg",
        live_url: "https://example.com/storefront",
        source_url: "https://github.com/example/storefront",
    },
    Project {
        title: "Trail Log",
        category: "mobile",
        description: "Offline-first hiking journal.",
        image: "images/trail-log.jpg",
        live_url: "https://example.com/trail-log",
        source_url: "https://github.com/example/trail-log",
    },
    Project {
        title: "Studio Identity",
        category: "design",
        description: "Brand system for a small architecture studio.",
        image: "images/studio.jpg",
        live_url: "https://example.com/studio",
        source_url: "https://github.com/example/studio",
    },
    Project {
        title: "Metrics Board",
        category: "web",
        description: "Realtime dashboard for a logistics team.",
        image: "images/metrics.jpg",
        live_url: "https://example.com/metrics",
        source_url: "https://github.com/example/metrics",
    },
    Project {
        title: "Pocket Budget",
        category: "mobile",
        description: "Envelope budgeting in two taps.",
        image: "images/budget.jpg",
        live_url: "https://example.com/budget",
        source_url: "https://github.com/example/budget",
    },
    Project {
        title: "Type Specimen",
        category: "design",
        description: "Interactive specimen for a variable font.",
        image: "images/specimen.jpg",
        live_url: "https://example.com/specimen",
        source_url: "https://github.com/example/specimen",
    },
];

pub const HERO_AVATAR: &str = "images/avatar.jpg";
pub const ABOUT_PHOTO: &str = "images/about.jpg";

pub const CONTACT_EMAIL: &str = "hello@example.com";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FILTER_ALL;
    use crate::nav::anchor_target;
    use crate::sync::parse_bar_width;

    const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "portfolio", "contact"];

    #[test]
    fn every_nav_link_targets_a_rendered_section() {
        for link in &NAV_LINKS {
            let target = anchor_target(link.href).expect("in-page anchor");
            assert!(SECTION_IDS.contains(&target), "{} has no section", link.href);
        }
    }

    #[test]
    fn every_project_category_has_a_filter_button() {
        for project in &PROJECTS {
            assert!(FILTER_BUTTONS
                .iter()
                .any(|button| button.filter == project.category));
        }
        assert_eq!(FILTER_BUTTONS[0].filter, FILTER_ALL);
    }

    #[test]
    fn skill_widths_are_percentages() {
        for card in &SKILL_CARDS {
            for bar in card.bars {
                assert_eq!(parse_bar_width(bar.width).to_string(), bar.width);
            }
        }
    }
}
