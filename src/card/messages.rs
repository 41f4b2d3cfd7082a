/// Rotating list of personal phrases shown over the heart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageDeck {
    phrases: Vec<String>,
    index: usize,
}

impl MessageDeck {
    /// Parse comma-separated phrases. Returns `None` when nothing but
    /// separators and whitespace was entered.
    pub fn parse(input: &str) -> Option<Self> {
        let phrases: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases, index: 0 })
    }

    /// Current phrase; the cursor then moves on, wrapping at the end.
    pub fn next_phrase(&mut self) -> Option<&str> {
        if self.phrases.is_empty() {
            return None;
        }
        let i = self.index;
        self.index = (self.index + 1) % self.phrases.len();
        Some(&self.phrases[i])
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Which side of the canvas the phrase overlay slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlaySide {
    #[default]
    Left,
    Right,
}

impl OverlaySide {
    pub fn flipped(self) -> Self {
        match self {
            OverlaySide::Left => OverlaySide::Right,
            OverlaySide::Right => OverlaySide::Left,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            OverlaySide::Left => "left",
            OverlaySide::Right => "right",
        }
    }
}
