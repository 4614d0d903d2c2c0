// Typewriter headline: types a phrase out, holds it, deletes it and moves on
// to the next one.

#[derive(Clone, Debug, PartialEq)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    // Pause once a phrase is fully typed
    pub hold_delay_ms: u32,
    // Pause once a phrase is fully deleted
    pub next_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingConfig {
            phrases: vec![
                "Full Stack Developer".to_owned(),
                "Tech Enthusiast".to_owned(),
                "Creative Coder".to_owned(),
                "Problem Solver".to_owned(),
            ],
            type_delay_ms: 100,
            delete_delay_ms: 50,
            hold_delay_ms: 2000,
            next_delay_ms: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

pub struct Typewriter {
    config: TypingConfig,
    phrase: usize,
    // Counted in chars, not bytes
    visible: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(config: TypingConfig) -> Self {
        Typewriter {
            config,
            phrase: 0,
            visible: 0,
            deleting: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    // Types or deletes one character. Returns the text to show and how long
    // to wait before the next step.
    pub fn step(&mut self) -> TypingFrame {
        let phrase = match self.config.phrases.get(self.phrase) {
            Some(phrase) => phrase,
            None => {
                return TypingFrame {
                    text: String::new(),
                    delay_ms: self.config.hold_delay_ms,
                }
            }
        };
        let len = phrase.chars().count();

        if self.deleting {
            self.visible = self.visible.saturating_sub(1);
        } else {
            self.visible = (self.visible + 1).min(len);
        }
        let text: String = phrase.chars().take(self.visible).collect();

        let mut delay_ms = if self.deleting {
            self.config.delete_delay_ms
        } else {
            self.config.type_delay_ms
        };
        if !self.deleting && self.visible == len {
            delay_ms = self.config.hold_delay_ms;
            self.deleting = true;
        } else if self.deleting && self.visible == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.config.phrases.len();
            delay_ms = self.config.next_delay_ms;
        }

        TypingFrame { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short() -> TypingConfig {
        TypingConfig {
            phrases: vec!["ab".to_owned(), "xyz".to_owned()],
            ..TypingConfig::default()
        }
    }

    fn frame(text: &str, delay_ms: u32) -> TypingFrame {
        TypingFrame {
            text: text.to_owned(),
            delay_ms,
        }
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut typewriter = Typewriter::new(short());
        assert_eq!(typewriter.step(), frame("a", 100));
        assert_eq!(typewriter.step(), frame("ab", 2000));
        assert!(typewriter.is_deleting());
        assert_eq!(typewriter.step(), frame("a", 50));
        assert_eq!(typewriter.step(), frame("", 500));
        assert!(!typewriter.is_deleting());
        assert_eq!(typewriter.phrase_index(), 1);
        assert_eq!(typewriter.step(), frame("x", 100));
        assert_eq!(typewriter.step(), frame("xy", 100));
        assert_eq!(typewriter.step(), frame("xyz", 2000));
    }

    #[test]
    fn wraps_to_first_phrase() {
        let mut typewriter = Typewriter::new(short());
        // "ab": 2 typed + 2 deleted, "xyz": 3 typed + 3 deleted
        for _ in 0..10 {
            typewriter.step();
        }
        assert_eq!(typewriter.phrase_index(), 0);
        assert_eq!(typewriter.step(), frame("a", 100));
    }

    #[test]
    fn handles_multibyte_phrases() {
        let mut typewriter = Typewriter::new(TypingConfig {
            phrases: vec!["héé".to_owned()],
            ..TypingConfig::default()
        });
        assert_eq!(typewriter.step().text, "h");
        assert_eq!(typewriter.step().text, "hé");
        assert_eq!(typewriter.step(), frame("héé", 2000));
    }

    #[test]
    fn default_phrases() {
        let mut typewriter = Typewriter::new(TypingConfig::default());
        let mut last = typewriter.step();
        while last.delay_ms != 2000 {
            last = typewriter.step();
        }
        assert_eq!(last.text, "Full Stack Developer");
    }

    #[test]
    fn no_phrases_shows_nothing() {
        let mut typewriter = Typewriter::new(TypingConfig {
            phrases: Vec::new(),
            ..TypingConfig::default()
        });
        assert_eq!(typewriter.step().text, "");
    }
}
