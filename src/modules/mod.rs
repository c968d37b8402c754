pub mod auth;
pub mod surveys;
pub mod users;
