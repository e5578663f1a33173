mod utils;

mod parse_error_tests;
mod token_stream_tests;
mod tokenizer_string_tests;
mod tokenizer_tests;
