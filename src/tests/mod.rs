//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn general_form()`
//! * `fn matrix_data_form()`
//! * `fn artificial_tableau_form()`
//! * `fn tableau_form()`
