mod users;
pub use users::*;

mod customers;
pub use customers::*;
