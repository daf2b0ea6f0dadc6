/// Snippet typed into the hero code block.
pub const HERO_SNIPPET: &str = r#"# AI/ML Engineer

import coffee
from brain import ideas

while coffee.level > 0:
    ideas.generate()
    bugs.fix()
    models.train()

if success:
    print("Let's build something cool!")
else:
    coffee.refill()"#;

/// Reveals a fixed text one character per tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    // byte offset of the next character to reveal
    cursor: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    /// Reveal the next character, or `None` once the text is exhausted.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.text[self.cursor..].chars().next()?;
        self.cursor += ch.len_utf8();
        Some(ch)
    }

    #[inline]
    pub fn typed(&self) -> &str {
        &self.text[..self.cursor]
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.text.len()
    }

    pub fn remaining_chars(&self) -> usize {
        self.text[self.cursor..].chars().count()
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(HERO_SNIPPET)
    }
}
