pub mod detail;
pub mod edit;
pub mod list;
pub mod new;

pub use detail::DetailPage;
pub use edit::EditPage;
pub use list::ListPage;
pub use new::NewPage;
