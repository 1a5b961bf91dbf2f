//! Resume data model and rendering engine.
//!
//! Build or load a [`Resume`], persist it with [`write`] / [`read`], turn it
//! into a self-contained print document with [`render`], or condense it with
//! [`summarize`]. Everything here is pure and synchronous; callers own any
//! I/O and any shared editing state.

pub mod error;
pub mod escape;
pub mod model;
pub mod preview;
pub mod render;
pub mod serializer;
pub mod validation;

pub use error::{Result, ResumeError};
pub use model::{Contact, Education, Entry, Experience, Project, Resume, Section, SkillGroup};
pub use preview::{preview, summarize, PreviewSummary};
pub use render::render;
pub use serializer::{read, write};
