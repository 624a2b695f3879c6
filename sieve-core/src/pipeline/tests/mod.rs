mod processor_tests;
mod reader_tests;
