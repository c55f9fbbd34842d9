//! On-screen keyboard model.
//!
//! Holds the value being edited plus the keyboard's own UI state (shift,
//! active layer). Front-ends render [`OnScreenKeyboard::rows`] and feed the
//! pressed [`Key`] back through [`OnScreenKeyboard::press`].

const ROW1: &str = "qwertyuiop";
const ROW2: &str = "asdfghjkl";
const ROW3: &str = "zxcvbnm";
const ROW4: &str = "1234567890";
const SYMBOLS: &str = "@.-_!#$*";

const MASK_GLYPH: char = '•';
const PIN_PLACEHOLDER: char = '·';
const DEFAULT_PIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMode {
    /// Letters with a secondary digits/symbols layer.
    Text,
    /// PIN keypad, digits only.
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Letters,
    Symbols,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Space,
    Backspace,
    Shift,
    /// Switch between the letter and digits/symbols layers.
    ToggleLayer,
    Submit,
}

/// What a key press did to the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Edited,
    LayoutChanged,
    Submitted,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnScreenKeyboard {
    value: String,
    mode: KeyboardMode,
    layer: Layer,
    shift: bool,
    max_length: Option<usize>,
    masked: bool,
}

impl OnScreenKeyboard {
    pub fn text() -> Self {
        Self {
            value: String::new(),
            mode: KeyboardMode::Text,
            layer: Layer::Letters,
            shift: false,
            max_length: None,
            masked: false,
        }
    }

    pub fn numeric(max_length: usize) -> Self {
        Self {
            mode: KeyboardMode::Numeric,
            max_length: Some(max_length),
            ..Self::text()
        }
    }

    /// Render one glyph per character instead of the value.
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn shift(&self) -> bool {
        self.shift
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn set_value(&mut self, value: &str) {
        self.value.clear();
        for c in value.chars() {
            self.insert(c);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Append a character, truncating to `max_length`. Numeric keyboards drop
    /// anything that is not an ASCII digit.
    pub fn insert(&mut self, c: char) -> bool {
        if self.mode == KeyboardMode::Numeric && !c.is_ascii_digit() {
            return false;
        }

        self.value.push(c);
        if let Some(max) = self.max_length {
            if self.value.chars().count() > max {
                self.value = self.value.chars().take(max).collect();
                return false;
            }
        }
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn press(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Char(c) => {
                let c = if self.shift { c.to_ascii_uppercase() } else { c };
                if self.insert(c) {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Space => {
                if self.mode == KeyboardMode::Text && self.insert(' ') {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Backspace => {
                if self.backspace() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Shift => {
                if self.mode != KeyboardMode::Text {
                    return KeyOutcome::Ignored;
                }
                self.shift = !self.shift;
                KeyOutcome::LayoutChanged
            }
            Key::ToggleLayer => {
                if self.mode != KeyboardMode::Text {
                    return KeyOutcome::Ignored;
                }
                self.layer = match self.layer {
                    Layer::Letters => Layer::Symbols,
                    Layer::Symbols => Layer::Letters,
                };
                KeyOutcome::LayoutChanged
            }
            Key::Submit => KeyOutcome::Submitted,
        }
    }

    /// Feed typed text key by key, as if each character had been tapped.
    /// Shift is ignored so the text lands as typed.
    pub fn type_text(&mut self, text: &str) -> bool {
        let mut edited = false;
        for c in text.chars() {
            let key = if c == ' ' { Key::Space } else { Key::Char(c) };
            let shift = std::mem::replace(&mut self.shift, false);
            edited |= self.press(key) == KeyOutcome::Edited;
            self.shift = shift;
        }
        edited
    }

    /// Text shown in the keyboard's display field.
    pub fn display(&self) -> String {
        match self.mode {
            KeyboardMode::Numeric => {
                let width = self.max_length.unwrap_or(DEFAULT_PIN_LENGTH);
                let mut shown: String = self.value.clone();
                let len = shown.chars().count();
                shown.extend(std::iter::repeat(PIN_PLACEHOLDER).take(width.saturating_sub(len)));
                shown
            }
            KeyboardMode::Text if self.masked => {
                std::iter::repeat(MASK_GLYPH).take(self.value.chars().count()).collect()
            }
            KeyboardMode::Text if self.value.is_empty() => " ".to_string(),
            KeyboardMode::Text => self.value.clone(),
        }
    }

    /// Whether the submit key is available given the caller's own disabled flag.
    pub fn submit_enabled(&self, caller_disabled: bool) -> bool {
        if caller_disabled {
            return false;
        }
        match (self.mode, self.max_length) {
            (KeyboardMode::Numeric, Some(max)) => self.value.chars().count() == max,
            _ => true,
        }
    }

    /// Key layout for the current mode and layer, top row first.
    pub fn rows(&self) -> Vec<Vec<Key>> {
        let chars = |row: &str| row.chars().map(Key::Char).collect::<Vec<_>>();

        match (self.mode, self.layer) {
            (KeyboardMode::Numeric, _) => vec![
                chars("123"),
                chars("456"),
                chars("789"),
                vec![Key::Backspace, Key::Char('0')],
            ],
            (KeyboardMode::Text, Layer::Letters) => {
                let mut row3 = chars(ROW3);
                row3.push(Key::Backspace);
                vec![
                    chars(ROW1),
                    chars(ROW2),
                    row3,
                    vec![Key::Shift, Key::ToggleLayer, Key::Space],
                ]
            }
            (KeyboardMode::Text, Layer::Symbols) => {
                let mut symbols = chars(SYMBOLS);
                symbols.push(Key::Backspace);
                vec![chars(ROW4), symbols, vec![Key::ToggleLayer]]
            }
        }
    }

    /// Label printed on a key cap.
    pub fn key_label(&self, key: Key) -> String {
        match key {
            Key::Char(c) if self.shift => c.to_ascii_uppercase().to_string(),
            Key::Char(c) => c.to_string(),
            Key::Space => "space".to_string(),
            Key::Backspace => "⌫".to_string(),
            Key::Shift if self.shift => "ABC".to_string(),
            Key::Shift => "abc".to_string(),
            Key::ToggleLayer => match self.layer {
                Layer::Letters => "123".to_string(),
                Layer::Symbols => "ABC".to_string(),
            },
            Key::Submit => "Done".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut kb = OnScreenKeyboard::text();
        kb.press(Key::Char('h'));
        kb.press(Key::Char('i'));
        assert_eq!(kb.value(), "hi");

        assert_eq!(kb.press(Key::Backspace), KeyOutcome::Edited);
        assert_eq!(kb.value(), "h");
        kb.press(Key::Backspace);
        assert_eq!(kb.press(Key::Backspace), KeyOutcome::Ignored);
        assert_eq!(kb.value(), "");
    }

    #[test]
    fn test_shift_uppercases_letters() {
        let mut kb = OnScreenKeyboard::text();
        kb.press(Key::Shift);
        kb.press(Key::Char('a'));
        kb.press(Key::Shift);
        kb.press(Key::Char('b'));
        assert_eq!(kb.value(), "Ab");
    }

    #[test]
    fn test_max_length_truncates() {
        let mut kb = OnScreenKeyboard::text().with_max_length(3);
        kb.type_text("abcdef");
        assert_eq!(kb.value(), "abc");
    }

    #[test]
    fn test_masked_display_keeps_value() {
        let mut kb = OnScreenKeyboard::text().masked(true);
        kb.type_text("secret");
        assert_eq!(kb.display(), "••••••");
        assert_eq!(kb.value(), "secret");
    }

    #[test]
    fn test_empty_text_display_is_blank() {
        assert_eq!(OnScreenKeyboard::text().display(), " ");
    }

    #[test]
    fn test_numeric_pads_and_rejects_letters() {
        let mut kb = OnScreenKeyboard::numeric(4);
        kb.type_text("1a2");
        assert_eq!(kb.value(), "12");
        assert_eq!(kb.display(), "12··");
        assert!(!kb.submit_enabled(false));

        kb.type_text("345");
        assert_eq!(kb.value(), "1234");
        assert!(kb.submit_enabled(false));
        assert!(!kb.submit_enabled(true));
    }

    #[test]
    fn test_layer_toggle_changes_rows() {
        let mut kb = OnScreenKeyboard::text();
        assert_eq!(kb.rows()[0].len(), 10);
        assert_eq!(kb.key_label(Key::ToggleLayer), "123");

        assert_eq!(kb.press(Key::ToggleLayer), KeyOutcome::LayoutChanged);
        assert_eq!(kb.layer(), Layer::Symbols);
        assert_eq!(kb.rows()[0][0], Key::Char('1'));
        assert!(kb.rows()[1].contains(&Key::Char('@')));
        assert_eq!(kb.key_label(Key::ToggleLayer), "ABC");
    }

    #[test]
    fn test_numeric_ignores_layout_keys() {
        let mut kb = OnScreenKeyboard::numeric(4);
        assert_eq!(kb.press(Key::Shift), KeyOutcome::Ignored);
        assert_eq!(kb.press(Key::Space), KeyOutcome::Ignored);
        assert_eq!(kb.rows().len(), 4);
    }

    #[test]
    fn test_type_text_ignores_shift() {
        let mut kb = OnScreenKeyboard::text();
        kb.press(Key::Shift);
        kb.type_text("a@b.com");
        assert_eq!(kb.value(), "a@b.com");
        assert!(kb.shift());
    }
}
