pub mod auth_handlers;
pub mod order_handlers;
pub mod product_handlers;
pub mod profile_handlers;

pub use auth_handlers::{login_handler, register_handler};
pub use order_handlers::{list_orders_handler, place_order_handler};
pub use product_handlers::{
    create_product_handler, delete_product_handler, list_products_handler, my_products_handler,
};
pub use profile_handlers::{get_profile_handler, update_profile_handler};
