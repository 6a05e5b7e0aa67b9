mod test_endpoints;
mod test_requests;
