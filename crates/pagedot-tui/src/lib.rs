pub mod app;
pub mod event;
pub mod input;
pub mod pager;
pub mod painter;
pub mod placement;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use pager::{Pager, PagerConfig};
pub use painter::HalfBlockPainter;
pub use theme::{load_theme, Theme};
