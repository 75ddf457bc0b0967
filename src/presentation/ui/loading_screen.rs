//! Loading screen shown while the catalog and images are fetched.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
const SPINNER_FRAME_TIME: Duration = Duration::from_millis(120);

/// Progress flags of the loading screen.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// Both fetch phases are done.
    pub data_ready: bool,
    /// The outro has finished; the gallery may take over.
    pub animation_complete: bool,
    pub intro_finished: bool,
}

/// Spinner, message and detail line with optional intro and outro effects.
pub struct LoadingScreen {
    title: String,
    message: String,
    detail: String,
    intro_effect: Option<Effect>,
    outro_effect: Option<Effect>,
    pub state: LoadingState,
    pending_duration: Duration,
    elapsed: Duration,
}

impl LoadingScreen {
    /// Creates the screen; with `animate` off it completes as soon as data is ready.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>, animate: bool) -> Self {
        let (intro_effect, outro_effect) = if animate {
            (
                Some(fx::coalesce((800, Interpolation::CircOut))),
                Some(fx::dissolve((600, Interpolation::CircIn))),
            )
        } else {
            (None, None)
        };

        Self {
            title: title.into(),
            message: message.into(),
            detail: String::new(),
            intro_effect,
            outro_effect,
            state: LoadingState {
                intro_finished: !animate,
                ..LoadingState::default()
            },
            pending_duration: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the spinner and effects by `duration`.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
        self.elapsed = self.elapsed.saturating_add(duration);
    }

    /// Sets the line under the message, e.g. the current phase.
    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = detail.into();
    }

    /// Starts the outro, or completes at once without animations.
    pub fn set_data_ready(&mut self) {
        self.state.data_ready = true;
        if self.outro_effect.is_none() {
            self.state.animation_complete = true;
        }
    }

    /// Returns true once the gallery may replace this screen.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.state.animation_complete
    }

    fn spinner(&self) -> &'static str {
        let frame = self.elapsed.as_millis() / SPINNER_FRAME_TIME.as_millis();
        let index = usize::try_from(frame % SPINNER_FRAMES.len() as u128).unwrap_or(0);
        SPINNER_FRAMES[index]
    }
}

impl Widget for &mut LoadingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(vec![
            Line::styled(
                self.title.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(
                format!("{} {}", self.spinner(), self.message),
                Style::default().fg(Color::White),
            ),
            Line::styled(self.detail.as_str(), Style::default().fg(Color::DarkGray)),
        ])
        .centered();

        let text_height = u16::try_from(text.lines.len()).unwrap_or(0);
        let [_, center_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(text_height.min(area.height)),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(text).render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if !self.state.intro_finished {
            if let Some(intro) = self.intro_effect.as_mut() {
                let overflow = intro.process(duration.into(), buf, center_area);
                if overflow.is_some() {
                    self.state.intro_finished = true;
                }
            }
        } else if self.state.data_ready
            && let Some(outro) = self.outro_effect.as_mut()
        {
            let overflow = outro.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.state.animation_complete = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_static_screen_completes_when_ready() {
        let mut screen = LoadingScreen::new("Sweater List", "Please wait", false);
        assert!(!screen.is_complete());

        screen.set_data_ready();

        assert!(screen.is_complete());
    }

    #[test]
    fn test_animated_screen_waits_for_outro() {
        let mut screen = LoadingScreen::new("Sweater List", "Please wait", true);

        screen.set_data_ready();

        assert!(!screen.is_complete());
    }

    #[test]
    fn test_renders_message_and_detail() {
        let mut screen = LoadingScreen::new("Sweater List", "Please wait", false);
        screen.set_detail("loading-records");
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        (&mut screen).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Sweater List"));
        assert!(text.contains("Please wait"));
        assert!(text.contains("loading-records"));
    }

    #[test]
    fn test_spinner_advances_with_ticks() {
        let mut screen = LoadingScreen::new("t", "m", false);
        let first = screen.spinner();

        screen.tick(SPINNER_FRAME_TIME);

        assert_ne!(first, screen.spinner());
    }
}
