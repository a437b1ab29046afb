mod color_dialog;

pub use color_dialog::{ColorDialog, DialogResponse};
