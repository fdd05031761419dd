use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Quit,
    Redraw,
    ToggleHud,
    Resize(u16, u16),
}

/// Drain pending terminal events without blocking longer than `max_wait`.
pub(crate) fn collect_actions(max_wait: Duration) -> anyhow::Result<Vec<Action>> {
    let mut out = Vec::new();

    // poll with a tiny timeout so rendering keeps going
    let timeout = std::cmp::min(Duration::from_millis(1), max_wait);
    while event::poll(timeout)? {
        if let Some(action) = map_event(event::read()?) {
            out.push(action);
            if out.len() >= 32 {
                break;
            }
        }
    }
    Ok(out)
}

pub(crate) fn map_event(ev: Event) -> Option<Action> {
    match ev {
        Event::Key(k) => map_key(k),
        Event::Resize(c, r) => Some(Action::Resize(c, r)),
        _ => None,
    }
}

fn map_key(k: KeyEvent) -> Option<Action> {
    if k.kind != KeyEventKind::Press {
        return None;
    }
    if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    match k.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Redraw),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Action::ToggleHud),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_event(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_event(press(KeyCode::Char('Q'))), Some(Action::Quit));
        assert_eq!(map_event(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn redraw_hud_and_resize() {
        assert_eq!(map_event(press(KeyCode::Char('r'))), Some(Action::Redraw));
        assert_eq!(map_event(press(KeyCode::Char('h'))), Some(Action::ToggleHud));
        assert_eq!(map_event(Event::Resize(120, 40)), Some(Action::Resize(120, 40)));
    }

    #[test]
    fn releases_and_unbound_keys_are_ignored() {
        assert_eq!(
            map_event(key(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release)),
            None
        );
        assert_eq!(map_event(press(KeyCode::Char('c'))), None);
        assert_eq!(map_event(press(KeyCode::Left)), None);
        assert_eq!(map_event(Event::FocusGained), None);
    }
}
