/// The seven transport controls, in the order they are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAction {
    ToggleRepeat,
    Previous,
    SeekBackward,
    TogglePlay,
    SeekForward,
    Next,
    Shuffle,
}

impl TransportAction {
    pub const ALL: [TransportAction; 7] = [
        TransportAction::ToggleRepeat,
        TransportAction::Previous,
        TransportAction::SeekBackward,
        TransportAction::TogglePlay,
        TransportAction::SeekForward,
        TransportAction::Next,
        TransportAction::Shuffle,
    ];

    /// DOM id of the button bound to this action.
    pub fn button_id(&self) -> &'static str {
        match self {
            TransportAction::ToggleRepeat => "repeat-btn",
            TransportAction::Previous => "prev-btn",
            TransportAction::SeekBackward => "rewind-btn",
            TransportAction::TogglePlay => "play-pause-btn",
            TransportAction::SeekForward => "forward-btn",
            TransportAction::Next => "next-btn",
            TransportAction::Shuffle => "shuffle-btn",
        }
    }
}

/// Map a keyboard event to a transport action.
///
/// `key` is the `KeyboardEvent.key` value; `command` is true when Ctrl or Meta is held.
pub fn shortcut_action(key: &str, command: bool, alt: bool) -> Option<TransportAction> {
    match key {
        "MediaPlayPause" | "MediaPlay" | "MediaPause" => return Some(TransportAction::TogglePlay),
        "MediaTrackNext" | "MediaNextTrack" => return Some(TransportAction::Next),
        "MediaTrackPrevious" | "MediaPreviousTrack" => return Some(TransportAction::Previous),
        _ => {}
    }

    if alt {
        return None;
    }

    if command {
        return match key {
            "ArrowRight" => Some(TransportAction::Next),
            "ArrowLeft" => Some(TransportAction::Previous),
            _ => None,
        };
    }

    match key {
        " " | "Spacebar" => Some(TransportAction::TogglePlay),
        "ArrowRight" => Some(TransportAction::SeekForward),
        "ArrowLeft" => Some(TransportAction::SeekBackward),
        "r" | "R" => Some(TransportAction::ToggleRepeat),
        "s" | "S" => Some(TransportAction::Shuffle),
        _ => None,
    }
}
