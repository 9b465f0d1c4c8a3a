pub mod auth;
pub mod banners;
pub mod cart;
pub mod catalog;
pub mod likes;
pub mod products;
pub mod users;
pub mod variations;
