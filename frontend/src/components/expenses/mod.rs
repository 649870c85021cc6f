pub mod edit_row;
pub mod expense_list;

pub use edit_row::EditRow;
pub use expense_list::ExpenseList;
