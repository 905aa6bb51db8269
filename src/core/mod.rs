pub mod materialize;
pub mod parse;
pub mod render;
pub mod walk;
