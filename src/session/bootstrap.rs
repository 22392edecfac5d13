//! Loading the stored session before an interview begins

use crate::error::Result;
use crate::session::positions::position_for;
use crate::session::types::Session;
use crate::storage::{RecordStore, SESSION_KEY};
use log::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum Bootstrap {
    Ready(Session),
    /// No usable session; the candidate has to register first
    RedirectToEntry,
}

pub fn bootstrap<S: RecordStore>(store: &mut S) -> Result<Bootstrap> {
    let raw = match store.get(SESSION_KEY)? {
        Some(raw) => raw,
        None => {
            info!("No stored interview session");
            return Ok(Bootstrap::RedirectToEntry);
        }
    };

    let mut session: Session = match serde_json::from_str(&raw) {
        Ok(session) => session,
        Err(e) => {
            warn!("Ignoring malformed interview session record: {}", e);
            return Ok(Bootstrap::RedirectToEntry);
        }
    };

    if !session.is_valid() {
        warn!("Ignoring interview session record without candidate identity");
        return Ok(Bootstrap::RedirectToEntry);
    }

    if session.candidate_position.is_none() {
        if let Some(position) = position_for(&session.candidate_name) {
            info!("Resolved position for {}: {}", session.candidate_name, position);
            session.candidate_position = Some(position.to_string());
            if let Err(e) = store.set_json(SESSION_KEY, &session) {
                warn!("Could not persist resolved position: {}", e);
            }
        }
    }

    Ok(Bootstrap::Ready(session))
}
