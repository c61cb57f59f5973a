//! Domain types for the lab site
//!
//! This crate provides the typed content records the site is built from:
//! - Publication: journal/conference/workshop papers and preprints
//! - Person, PeopleIndex, FurryMember: lab members
//! - Project: research projects
//! - Course: teaching
//! - LabInfo: lab lead, mission, university
//! - JsonProfile: layout-driven person/project pages

pub mod course;
pub mod lab_info;
pub mod person;
pub mod profile;
pub mod project;
pub mod publication;
pub mod validation;

pub use course::*;
pub use lab_info::*;
pub use person::*;
pub use profile::*;
pub use project::*;
pub use publication::*;
pub use validation::*;
