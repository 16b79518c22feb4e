
mod concurrent_tests;
mod sequence_tests;
