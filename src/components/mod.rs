//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod game_card;
mod game_grid;
mod platform_modal;
mod search_bar;
mod task_checklist;
mod toaster;

pub use delete_confirm_button::DeleteConfirmButton;
pub use game_card::GameCard;
pub use game_grid::GameGrid;
pub use platform_modal::PlatformModal;
pub use search_bar::SearchBar;
pub use task_checklist::TaskChecklist;
pub use toaster::Toaster;
