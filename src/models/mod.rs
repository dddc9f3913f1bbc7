pub mod galaxy;
pub mod planet;
pub mod route;

pub use galaxy::Galaxy;
pub use planet::Planet;
pub use route::{Route, RouteError};
