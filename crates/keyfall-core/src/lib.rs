pub mod color;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod event;
pub mod hands;
pub mod lanes;
pub mod layout;
pub mod particles;
pub mod render;
pub mod state;
pub mod viewport;
pub mod virtual_list;
pub mod visible;

pub use color::{pick_hex, Rgb};
pub use config::RendererConfig;
pub use draw::Surface;
pub use error::{Result, VizError};
pub use event::*;
pub use hands::*;
pub use lanes::*;
pub use particles::{Particle, ParticleSystem};
pub use render::Renderer;
pub use state::*;
pub use viewport::*;
pub use virtual_list::{ListWindow, VirtualList};
pub use visible::*;
