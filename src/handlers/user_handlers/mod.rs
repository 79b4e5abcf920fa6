pub mod crud;
pub mod list;

pub use crud::{check_email, create, delete, set_status, update};
pub use list::list;
