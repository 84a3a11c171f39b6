//! vboedit - derived channels for Racelogic VBOX telemetry
//!
//! This library reads `.vbo` files, adds computed channels (GPS heading,
//! rotation speed, oversteer, fuel consumption, video sync time) and writes
//! them back in VBOX layout.
//!
//! # Example
//!
//! ```no_run
//! use vboedit::transform::Oversteer;
//! use vboedit::vbo::VboFile;
//!
//! let mut file = VboFile::open("session.vbo")?;
//! file.add_column(&Oversteer::default())?;
//! file.write("session_modified.vbo")?;
//! # Ok::<(), vboedit::VboError>(())
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod geo;
pub mod logging;
pub mod physics;
pub mod smoothing;
pub mod table;
pub mod timecode;
pub mod transform;
pub mod vbo;

pub use error::{VboError, VboResult};

/// Version of the vboedit library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
