//! # Representing linear programs
//!
//! This module contains the representation of a linear program as provided by the user, the
//! building blocks used to describe it, and the representation of a solution.
pub mod elements;
pub mod general_form;
pub mod solution;
