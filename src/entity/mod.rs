pub mod freets;
pub mod likes;
pub mod users;

pub use freets::Entity as Freets;
pub use likes::Entity as Likes;
pub use users::Entity as Users;
