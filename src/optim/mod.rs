pub mod gd;

pub use gd::GradientDescent;
