mod expressions_tests;
mod functions_tests;
mod literals_tests;
mod statements_tests;
