//! Result presentation: the pure record → card mapping and the components that show it.

pub mod card;
pub use card::BookCard;

mod grid;
pub use grid::BookGrid;

mod status;
pub use status::StatusPanel;
