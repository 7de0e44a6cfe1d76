pub mod assets;
pub mod camera;
pub mod core;
pub mod interaction;
pub mod loading;
pub mod mesh;
pub mod scene;
pub mod systems;

pub mod shaders;
