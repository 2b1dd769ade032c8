//! User interface module.
//!
//! The updater runs unattended in a release pipeline, so there are no
//! prompts; this module only formats what happened.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success,
    display_update_summary, format_update_summary,
};
