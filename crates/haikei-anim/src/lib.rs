//! Background animation engine for haikei.
//!
//! Six animation styles render onto a full-screen cell [`Surface`], driven
//! by a [`Controller`] that owns the render loop lifecycle: starting a style
//! for a palette, ticking one frame at a time, tracking resizes, and
//! guaranteeing that switching styles never leaves two animations drawing
//! onto the same surface.

mod animations;
mod chars;
mod color;
mod controller;
mod surface;

pub use animations::Generator;
pub use color::parse_hex;
pub use controller::Controller;
pub use surface::Surface;
