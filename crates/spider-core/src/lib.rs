//! Simulation core for the spider-web background: drifting particles pushed
//! around by the pointer and joined by fading lines.
//!
//! Nothing here touches the browser. Hosts feed a surface size and pointer
//! position and receive draw calls through [`DrawSurface`].

pub mod config;
pub mod connections;
pub mod constants;
pub mod error;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod surface;

pub use config::*;
pub use connections::{connection_opacity, Connection};
pub use constants::*;
pub use error::*;
pub use field::*;
pub use particle::*;
pub use pointer::*;
pub use surface::*;
