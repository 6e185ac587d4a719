use std::time::Duration;

use crossterm::event::{self, Event};

/// `timeout` 동안 이벤트를 기다린다. 시간 안에 이벤트가 없으면 `None`.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
