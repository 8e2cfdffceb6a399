//! Seam to the host game's console.
//!
//! The overlay never talks to the game process directly. Preview and equip
//! actions are turned into console command strings and handed to a
//! [`HostConsole`], so an in-process build can forward them to the real
//! console while the standalone binary falls back to logging them.

use tracing::info;

/// Build the console command that previews a loadout without equipping it.
pub fn preview_command(loadout_code: &str) -> String {
    format!("cl_itemmod preview {loadout_code}")
}

/// Build the console command that equips a loadout.
pub fn apply_command(loadout_code: &str) -> String {
    format!("cl_itemmod apply {loadout_code}")
}

/// Sink for console commands issued by the overlay.
pub trait HostConsole {
    /// Submit one command to the host game's console.
    fn execute(&mut self, command: &str);
}

/// Fallback console used when no game process is attached.
///
/// Commands are recorded through tracing; the overlay also places the
/// loadout code on the clipboard so the user can paste it into the host
/// console by hand.
#[derive(Debug, Default)]
pub struct LoggingConsole;

impl HostConsole for LoggingConsole {
    fn execute(&mut self, command: &str) {
        info!(%command, "host console command");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingConsole {
        commands: Vec<String>,
    }

    impl HostConsole for RecordingConsole {
        fn execute(&mut self, command: &str) {
            self.commands.push(command.to_string());
        }
    }

    #[test]
    fn preview_command_wraps_code() {
        assert_eq!(preview_command("AAAA-BBBB"), "cl_itemmod preview AAAA-BBBB");
    }

    #[test]
    fn apply_command_wraps_code() {
        assert_eq!(apply_command("AAAA-BBBB"), "cl_itemmod apply AAAA-BBBB");
    }

    #[test]
    fn console_receives_commands_in_order() {
        let mut console = RecordingConsole { commands: Vec::new() };
        console.execute(&preview_command("X"));
        console.execute(&apply_command("X"));
        assert_eq!(
            console.commands,
            vec!["cl_itemmod preview X", "cl_itemmod apply X"]
        );
    }
}
