//! Accessibility attribute injectors.
//!
//! Four independent single-pass rewrites, each adding an attribute only when
//! it is absent. The order is fixed (buttons, tab order, icons, typography):
//! later passes must see attributes added by earlier ones so they do not
//! inject duplicates.

mod buttons;
mod icons;
mod tabindex;
mod typography;

pub use buttons::label_buttons;
pub use icons::label_icons;
pub use tabindex::add_tab_order;
pub use typography::label_typography;

/// Run all injector passes in their fixed order.
pub fn apply_injectors(text: &str) -> String {
    let text = label_buttons(text);
    let text = add_tab_order(&text);
    let text = label_icons(&text);
    label_typography(&text)
}
