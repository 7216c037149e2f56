//! Hover tooltip state.
//!
//! The tooltip fades in quickly and out slowly; the host animates the
//! opacity change over [`Tooltip::fade_ms`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub category: String,
    /// Formatted count line, e.g. `1,234 startups`
    pub count_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    content: Option<TooltipContent>,
    opacity: f64,
    fade_ms: f64,
    position: (f64, f64),
    offset: (f64, f64),
}

impl Tooltip {
    /// A hidden tooltip that keeps `offset` away from the pointer.
    pub fn new(offset: (f64, f64)) -> Self {
        Self {
            content: None,
            opacity: 0.0,
            fade_ms: 0.0,
            position: (0.0, 0.0),
            offset,
        }
    }

    pub fn show(&mut self, content: TooltipContent, fade_in_ms: f64) {
        self.content = Some(content);
        self.opacity = 1.0;
        self.fade_ms = fade_in_ms;
    }

    /// Start fading out. The content stays so the fade has something to show.
    pub fn hide(&mut self, fade_out_ms: f64) {
        self.opacity = 0.0;
        self.fade_ms = fade_out_ms;
    }

    /// Track the pointer's page position.
    pub fn move_to(&mut self, page_x: f64, page_y: f64) {
        self.position = (page_x + self.offset.0, page_y + self.offset.1);
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    /// Target opacity the host fades towards.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn fade_ms(&self) -> f64 {
        self.fade_ms
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Top-left corner in page coordinates.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> TooltipContent {
        TooltipContent {
            category: "SaaS".to_string(),
            count_label: "1,234 startups".to_string(),
        }
    }

    #[test]
    fn show_then_hide_returns_to_transparent() {
        let mut tooltip = Tooltip::new((15.0, -28.0));
        assert!(!tooltip.is_visible());

        tooltip.show(content(), 200.0);
        assert_eq!(tooltip.opacity(), 1.0);
        assert_eq!(tooltip.fade_ms(), 200.0);

        tooltip.hide(500.0);
        assert_eq!(tooltip.opacity(), 0.0);
        assert_eq!(tooltip.fade_ms(), 500.0);
        assert_eq!(tooltip.content(), Some(&content()));
    }

    #[test]
    fn follows_pointer_with_offset() {
        let mut tooltip = Tooltip::new((15.0, -28.0));
        tooltip.move_to(100.0, 200.0);
        assert_eq!(tooltip.position(), (115.0, 172.0));
    }
}
