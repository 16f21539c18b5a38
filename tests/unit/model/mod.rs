mod test_query;
mod test_retry;
