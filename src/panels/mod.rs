mod central_panel;
mod controls_panel;
mod gallery_panel;

pub use central_panel::central_panel;
pub use controls_panel::controls_panel;
pub use gallery_panel::gallery_panel;
