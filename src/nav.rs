#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn on_key(self, key: &str) -> Self {
        if key == "Escape" {
            self.closed()
        } else {
            self
        }
    }

    pub fn class(self, base: &'static str) -> String {
        if self.open {
            format!("{base} active")
        } else {
            base.to_string()
        }
    }
}

pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_target(section_offset_top: f64, header_height: f64) -> f64 {
    section_offset_top - header_height
}
