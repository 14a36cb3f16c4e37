//! Role-specific dashboard views over hardcoded sample content.
//!
//! SYSTEM CONTEXT
//! ==============
//! The platform has no backend, so each dashboard renders a static data
//! set that demonstrates the role's workflow. Only the identity fields
//! (name, UHID, facility, insurer) come from the live session.

pub mod doctor;
pub mod hospital;
pub mod insurance;
pub mod patient;
