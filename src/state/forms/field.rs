//! Text input field value objects

/// Represents a single text input with its label and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    /// Secret fields render masked unless revealed
    pub is_secret: bool,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            is_secret: false,
        }
    }

    /// Create a new secret (password) field
    pub fn secret(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label, placeholder)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering
    pub fn display_value(&self, reveal_secret: bool) -> String {
        if self.is_secret && !reveal_secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
