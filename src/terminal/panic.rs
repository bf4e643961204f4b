//! Panic hook that hands the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Install before creating the `TerminalManager`. Chains to the previous
/// hook (color-eyre's, when installed) after restoring the terminal.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
