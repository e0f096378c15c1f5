/// What a key does in the gallery, independent of the DOM event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Fire at the tracked fingertip (or screen center without a hand).
    Fire,
    StartMatch,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " | "f" | "F" => Some(KeyAction::Fire),
        "Enter" => Some(KeyAction::StartMatch),
        _ => None,
    }
}
