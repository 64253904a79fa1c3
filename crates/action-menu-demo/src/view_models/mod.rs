//! View models pre-compute display data, separating data preparation from
//! rendering.

pub mod items_view_model;
pub mod menu_overlay_view_model;

pub use items_view_model::ItemsViewModel;
pub use menu_overlay_view_model::{MenuOverlayViewModel, MenuRow};
