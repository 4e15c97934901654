// Test modules for the site client
// Cross-module tests; unit tests live next to the code they cover

mod submission_tests;
mod tui_tests;
