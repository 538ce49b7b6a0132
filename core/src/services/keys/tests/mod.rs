mod generator_tests;
mod loader_tests;
