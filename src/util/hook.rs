use crate::ui::tui::Tui;

/// Puts the terminal back into cooked mode before the default panic report
/// is printed.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = Tui::restore() {
            eprintln!("failed to restore terminal: {e}");
        }
        hook(panic_info);
    }));
}
