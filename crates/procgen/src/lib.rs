//! Procedural generation for planetary systems: orbits, planet meshes,
//! texture assignment and planet records.

pub mod error;
pub mod orbit;
pub mod planet;
pub mod sphere;
pub mod textures;

pub use error::*;
pub use orbit::*;
pub use planet::*;
pub use sphere::*;
pub use textures::*;
