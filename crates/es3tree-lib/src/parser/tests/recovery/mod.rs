mod resync_tests;
mod unexpected_tests;
