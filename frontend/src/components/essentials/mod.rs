pub mod add_form;
pub mod checklist;
pub mod filter_bar;

pub use add_form::EssentialsAddForm;
pub use checklist::EssentialsChecklist;
pub use filter_bar::EssentialsFilterBar;
