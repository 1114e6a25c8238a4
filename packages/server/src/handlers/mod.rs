pub mod cupcake;
pub mod pages;
