pub mod addresses;
pub mod audit_logs;
pub mod banners;
pub mod brands;
pub mod cart_items;
pub mod categories;
pub mod colors;
pub mod likes;
pub mod product_configurations;
pub mod product_items;
pub mod products;
pub mod users;
pub mod variation_options;
pub mod variations;

pub use addresses::Entity as Addresses;
pub use audit_logs::Entity as AuditLogs;
pub use banners::Entity as Banners;
pub use brands::Entity as Brands;
pub use cart_items::Entity as CartItems;
pub use categories::Entity as Categories;
pub use colors::Entity as Colors;
pub use likes::Entity as Likes;
pub use product_configurations::Entity as ProductConfigurations;
pub use product_items::Entity as ProductItems;
pub use products::Entity as Products;
pub use users::Entity as Users;
pub use variation_options::Entity as VariationOptions;
pub use variations::Entity as Variations;
