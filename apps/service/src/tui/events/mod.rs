use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Handle a terminal event and return true if the UI should quit
pub fn handle_event(event: Event) -> bool {
    match event {
        Event::Key(k) => {
            // Only process key press events, ignore releases and repeats
            if k.kind != KeyEventKind::Press {
                return false;
            }

            match k.code {
                KeyCode::Char('q') | KeyCode::Esc => true,
                KeyCode::Char('c') => k.modifiers.contains(KeyModifiers::CONTROL),
                _ => false,
            }
        }
        _ => false,
    }
}
