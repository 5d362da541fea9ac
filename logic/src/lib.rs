mod dispatch;
mod validate;
mod vector;

pub use dispatch::*;
pub use validate::*;
pub use vector::*;
