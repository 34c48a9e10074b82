/// Short-lived user-facing message.
///
/// Every `show` bumps a generation; `dismiss` only clears the message it was
/// scheduled for, so a newer message survives an older timer.
#[derive(Debug, Clone, Default)]
pub struct FlashMessage {
    text: Option<String>,
    generation: u64,
}

impl FlashMessage {
    pub fn show<S: Into<String>>(&mut self, text: S) -> u64 {
        self.generation += 1;
        self.text = Some(text.into());
        self.generation
    }

    pub fn dismiss(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.text.is_none() {
            return false;
        }
        self.text = None;
        true
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
