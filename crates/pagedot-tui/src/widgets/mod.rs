mod carousel;
mod help;
mod indicator;
mod status_bar;

pub use carousel::CarouselWidget;
pub use help::HelpWidget;
pub use indicator::IndicatorWidget;
pub use status_bar::StatusBarWidget;
