mod nav;
mod plot_area;
mod status_box;
mod theme_toggle;

pub use nav::Nav;
pub use plot_area::PlotArea;
pub use status_box::StatusBox;
pub use theme_toggle::ThemeToggle;
