//! Pixeltone CLI library.
//!
//! The `pixeltone` binary is a thin dispatcher over this crate. Everything
//! the codec core treats as an external collaborator lives here: image
//! loading and saving ([`img`]), the WAV container with its embedded
//! metadata chunk ([`wav`]), and the user-facing commands ([`commands`]).

pub mod cli_args;
pub mod commands;
pub mod img;
pub mod wav;
