pub mod selector_button;

pub use selector_button::SelectorButton;
