pub mod cupcake;
pub mod shared;
