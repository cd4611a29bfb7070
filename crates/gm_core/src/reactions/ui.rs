//! Momentum bar rendering and quick-time prompts.
//!
//! Pure presentation sink: the controller keeps the last rendered bar and
//! prompt so callers (and tests) can inspect what was shown.

use crate::constants::momentum;
use crate::sink::PresentationSink;

const BAR_CELLS: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct UIController {
    momentum_bar: String,
    hype_prompt: String,
}

impl UIController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the meter value as a fixed-width bar and push it to the sink.
    pub fn update_ui(&mut self, momentum_value: i32, sink: &mut dyn PresentationSink) {
        self.momentum_bar = render_bar(momentum_value);
        sink.present(&format!("Momentum {momentum_value:+} {}", self.momentum_bar));
    }

    pub fn show_quick_time_event(&mut self, action_type: &str, sink: &mut dyn PresentationSink) {
        self.hype_prompt = format!("Quick time event: {action_type}");
        sink.present(&self.hype_prompt);
    }

    pub fn momentum_bar(&self) -> &str {
        &self.momentum_bar
    }

    pub fn hype_prompt(&self) -> &str {
        &self.hype_prompt
    }
}

/// Map [-100, 100] onto a fixed number of filled cells.
fn render_bar(value: i32) -> String {
    let clamped = value.clamp(momentum::MIN, momentum::MAX);
    let span = (momentum::MAX - momentum::MIN) as usize;
    let filled = ((clamped - momentum::MIN) as usize * BAR_CELLS) / span;

    let mut bar = String::with_capacity(BAR_CELLS + 2);
    bar.push('[');
    for i in 0..BAR_CELLS {
        bar.push(if i < filled { '#' } else { '.' });
    }
    bar.push(']');
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    #[test]
    fn test_update_ui_reports_the_value_it_was_given() {
        let mut sink = RecordingSink::new();
        let mut ui = UIController::new();

        ui.update_ui(61, &mut sink);
        assert!(sink.saw("+61"));
        assert_eq!(ui.momentum_bar().len(), 22);
    }

    #[test]
    fn test_bar_extremes() {
        assert_eq!(render_bar(-100), "[....................]");
        assert_eq!(render_bar(100), "[####################]");
        assert_eq!(render_bar(0), "[##########..........]");
    }

    #[test]
    fn test_bar_render_clamps_out_of_range_values() {
        assert_eq!(render_bar(250), render_bar(100));
        assert_eq!(render_bar(-250), render_bar(-100));
    }

    #[test]
    fn test_quick_time_prompt_names_the_action() {
        let mut sink = RecordingSink::new();
        let mut ui = UIController::new();

        ui.show_quick_time_event("Celebration", &mut sink);
        assert_eq!(ui.hype_prompt(), "Quick time event: Celebration");
        assert!(sink.saw("Celebration"));
    }
}
