const CURSOR_RADIUS: f64 = 10.0;
const CURSOR_OPACITY: f64 = 0.7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn full(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let shown = chars.len();
        Self { chars, shown }
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub inside: bool,
}

impl CursorState {
    pub fn moved(self, client_x: i32, client_y: i32) -> Self {
        Self {
            x: f64::from(client_x) - CURSOR_RADIUS,
            y: f64::from(client_y) - CURSOR_RADIUS,
            inside: true,
        }
    }

    pub fn style(self) -> String {
        let opacity = if self.inside { CURSOR_OPACITY } else { 0.0 };
        format!(
            "position: fixed; width: 20px; height: 20px; background: var(--primary-color); \
             border-radius: 50%; pointer-events: none; z-index: 9999; \
             transition: transform 0.1s ease; left: {:.0}px; top: {:.0}px; opacity: {opacity};",
            self.x, self.y
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSlot {
    HeroAvatar,
    AboutPhoto,
}

impl ImageSlot {
    pub fn fallback_icon(self) -> &'static str {
        match self {
            Self::HeroAvatar => "fas fa-user",
            Self::AboutPhoto => "fas fa-camera",
        }
    }
}

pub const FALLBACK_TILE_STYLE: &str =
    "background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));";
