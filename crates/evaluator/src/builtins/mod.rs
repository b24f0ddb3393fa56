// Built-in constants and functions of the calculator
//
// This module contains the implementations bound into the evaluation context.

pub mod math;
