pub mod cupcake;
