pub mod renderer;
pub mod visibility;
