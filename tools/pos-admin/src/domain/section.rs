//! Keyboard shortcuts for dashboard sections.

use pos_client::View;

/// Hotkey of a section: `1` to `8` in menu order.
pub fn hotkey(view: View) -> char {
    match view {
        View::Articles => '1',
        View::Categories => '2',
        View::Providers => '3',
        View::Sales => '4',
        View::Purchases => '5',
        View::Extractions => '6',
        View::Statistics => '7',
        View::Users => '8',
    }
}

pub fn view_for_hotkey(key: char) -> Option<View> {
    View::ALL.into_iter().find(|view| hotkey(*view) == key)
}
