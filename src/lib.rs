//! prompal: terminal prompt palette.
//!
//! The engine lives in `prompal-core` and the picker in `prompal-tui`. This
//! crate only holds the command-line surface so integration tests can drive
//! the subcommands without spawning the binary.
//!
//! ```text
//! prompal                    ──► picker (prompal-tui)
//! prompal search|suggest|complete ──► cli ──► SearchEngine (prompal-core)
//! ```

pub mod cli;
