use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Intent};
use crate::audio::AudioBackend;
use crate::config;
use crate::player::Direction;
use crate::ui;

/// Main terminal event loop: advances the player timers, draws, and turns key
/// presses into intents. Returns `Ok(())` when the user quits.
pub fn run<B: AudioBackend>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if app.should_quit() {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(intent) = intent_for_key(key, app.showing_splash()) {
                    app.apply(intent);
                }
            }
        }
    }

    Ok(())
}

/// Map a key press to an intent. While the splash is up every key dismisses it.
pub(crate) fn intent_for_key(key: KeyEvent, splash: bool) -> Option<Intent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Intent::Quit);
    }

    let intent = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => Intent::TogglePlayPause,
        KeyCode::Char('l') | KeyCode::Right => Intent::Skip(Direction::Forward),
        KeyCode::Char('h') | KeyCode::Left => Intent::Skip(Direction::Back),
        KeyCode::Char('j') | KeyCode::Down => Intent::CursorNext,
        KeyCode::Char('k') | KeyCode::Up => Intent::CursorPrev,
        KeyCode::Enter => Intent::PlaySelected,
        KeyCode::Char('t') => Intent::AddSleepTime,
        KeyCode::Char('s') => Intent::Stop,
        // 1..9 pick the first nine tracks, 0 the tenth.
        KeyCode::Char(c @ '0'..='9') => {
            let n = c.to_digit(10).unwrap_or(0) as usize;
            Intent::PlayIndex(if n == 0 { 9 } else { n - 1 })
        }
        _ if splash => Intent::DismissSplash,
        _ => return None,
    };

    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn transport_keys_map_to_intents() {
        assert_eq!(
            intent_for_key(key(KeyCode::Char(' ')), false),
            Some(Intent::TogglePlayPause)
        );
        assert_eq!(
            intent_for_key(key(KeyCode::Right), false),
            Some(Intent::Skip(Direction::Forward))
        );
        assert_eq!(
            intent_for_key(key(KeyCode::Char('h')), false),
            Some(Intent::Skip(Direction::Back))
        );
        assert_eq!(
            intent_for_key(key(KeyCode::Char('t')), false),
            Some(Intent::AddSleepTime)
        );
    }

    #[test]
    fn digits_pick_tracks_with_zero_as_tenth() {
        assert_eq!(
            intent_for_key(key(KeyCode::Char('1')), false),
            Some(Intent::PlayIndex(0))
        );
        assert_eq!(
            intent_for_key(key(KeyCode::Char('0')), false),
            Some(Intent::PlayIndex(9))
        );
    }

    #[test]
    fn unknown_keys_only_matter_on_the_splash() {
        assert_eq!(intent_for_key(key(KeyCode::Char('x')), false), None);
        assert_eq!(
            intent_for_key(key(KeyCode::Char('x')), true),
            Some(Intent::DismissSplash)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(intent_for_key(ev, false), Some(Intent::Quit));
    }
}
