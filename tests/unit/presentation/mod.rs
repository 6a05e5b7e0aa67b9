mod test_account;
mod test_decimal;
mod test_transaction;
