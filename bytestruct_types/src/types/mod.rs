mod descriptor;
mod error;
mod scalar;
mod schema;
mod value;

pub use descriptor::*;
pub use error::*;
pub use scalar::*;
pub use schema::*;
pub use value::*;
