//! Unit test modules.

mod hevy_export_test;
mod one_rep_max_test;
mod sun_times_test;
