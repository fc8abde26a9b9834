pub mod check;
pub mod normalize;
