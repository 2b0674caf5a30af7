// Pure key mapping, kept free of web-sys so host tests can include it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePlay,
    ToggleLayout,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        " " | "Spacebar" => Some(KeyCommand::TogglePlay),
        "g" | "G" => Some(KeyCommand::ToggleLayout),
        _ => None,
    }
}
