mod common;
mod load_tests;
mod session_tests;
