//! Domain records shared by the repository and the controller.
//!
//! Search results and full lookups have distinct shapes: `NoteSummary`
//! carries only what a result list shows, `Note` carries the body too.

pub mod note;
