/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Endpoint descriptor and its validation
pub mod endpoint;
/// Descriptor constructors, one per API operation
pub mod endpoints;
/// HTTP executor with rate limiting and retry
pub mod http;
/// Query parameters of list operations
pub mod query;
/// Request models for API calls
pub mod requests;
/// Response envelope models
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
