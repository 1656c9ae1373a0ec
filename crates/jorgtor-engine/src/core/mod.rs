pub mod level;
pub mod physics;
pub mod rect;
pub mod time;
pub mod world;
