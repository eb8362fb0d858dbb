/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Sign-in request and response models
pub mod auth;
/// HTTP transport abstraction and its reqwest implementation
pub mod http;
/// The `Result` object and response decoding
pub mod responses;
