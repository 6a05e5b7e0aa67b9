mod application;
mod model;
mod presentation;
mod test_error;
mod utils;
