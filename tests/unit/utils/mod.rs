mod test_config;
mod test_id;
mod test_time;
