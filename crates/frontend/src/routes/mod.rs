pub mod routes;

pub use routes::{create_resource_locator_string, AppRoutes, Location, RouteName};
