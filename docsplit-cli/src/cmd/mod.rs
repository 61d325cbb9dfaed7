pub mod check;
pub mod split;
