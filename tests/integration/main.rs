mod account_tests;
mod common;
mod order_tests;
mod response_tests;
mod stream_tests;
mod trade_tests;
