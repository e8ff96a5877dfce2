pub mod list;

pub use list::TodoList;
