// Test module for lexer
//
// Unit tests for the calculator lexer, organized by category.

mod normalize_tests;
mod token_tests;
