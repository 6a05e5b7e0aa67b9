/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Request path templates of every operation
pub mod endpoints;
/// HTTP transport with rate limiting
pub mod http;
/// Outbound request description
pub mod request;
/// Query parameters and request bodies
pub mod requests;
/// Response envelope and status-keyed decoding
pub mod response;
/// Response shapes of every operation
pub mod responses;
/// Newline-delimited JSON record streams
pub mod stream;
