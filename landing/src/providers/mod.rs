// Process-wide UI context: notifications and tooltips

mod toaster;
mod tooltip;

pub use toaster::{Toaster, Toasts, use_toasts};
pub use tooltip::Tooltip;
