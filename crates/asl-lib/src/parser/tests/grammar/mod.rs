mod action_tests;
mod condition_tests;
mod layer_tests;
mod series_tests;
mod source_tests;
