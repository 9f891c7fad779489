mod float_type;
mod point;
mod points;
mod statistics;

pub use self::float_type::*;
pub use self::point::*;
pub use self::points::*;
pub use self::statistics::*;
