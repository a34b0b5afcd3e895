/// Navbar appearance, switched by scroll depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarStyle {
    #[default]
    Translucent,
    Solid,
}

impl NavbarStyle {
    pub fn background(self) -> &'static str {
        match self {
            NavbarStyle::Translucent => "rgba(1, 68, 33, 0.95)",
            NavbarStyle::Solid => "rgba(1, 68, 33, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarStyle::Translucent => "none",
            NavbarStyle::Solid => "0 2px 20px rgba(0, 0, 0, 0.3)",
        }
    }
}

pub struct MenuState {
    pub(in crate::app) open: bool,
}

pub struct FormState {
    /// Label to restore once the simulated send completes.
    pub(in crate::app) pending_label: Option<String>,
}

pub struct TypewriterState {
    pub(in crate::app) text: Vec<char>,
    pub(in crate::app) revealed: usize,
    pub(in crate::app) finished: bool,
}

impl TypewriterState {
    pub(in crate::app) fn new() -> Self {
        Self {
            text: Vec::new(),
            revealed: 0,
            finished: false,
        }
    }

    pub(in crate::app) fn restart(&mut self, text: &str) {
        self.text = text.chars().collect();
        self.revealed = 0;
        self.finished = false;
    }

    /// Reveal the next character; `None` once the text is exhausted.
    pub(in crate::app) fn advance(&mut self) -> Option<String> {
        if self.revealed >= self.text.len() {
            return None;
        }
        self.revealed += 1;
        Some(self.text[..self.revealed].iter().collect())
    }
}

pub struct RevealState {
    pub(in crate::app) revealed: Vec<bool>,
}

impl RevealState {
    /// Marks `element` revealed; `false` if it already was.
    pub(in crate::app) fn mark(&mut self, element: usize) -> bool {
        if element >= self.revealed.len() {
            self.revealed.resize(element + 1, false);
        }
        !std::mem::replace(&mut self.revealed[element], true)
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealState, TypewriterState};

    #[test]
    fn typewriter_reveals_whole_characters() {
        let mut typewriter = TypewriterState::new();
        typewriter.restart("Bio🧬");
        let frames: Vec<String> = std::iter::from_fn(|| typewriter.advance()).collect();
        assert_eq!(frames, vec!["B", "Bi", "Bio", "Bio🧬"]);
        assert_eq!(typewriter.advance(), None);
    }

    #[test]
    fn reveal_marks_each_element_once() {
        let mut reveal = RevealState {
            revealed: vec![false; 2],
        };
        assert!(reveal.mark(1));
        assert!(!reveal.mark(1));
        assert!(reveal.mark(4));
        assert_eq!(reveal.revealed.len(), 5);
    }
}
