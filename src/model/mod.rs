/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Verbs, parameters and URL helpers
pub mod http;
/// Raw responses and the last-call record
pub mod responses;
/// HTTP transport seam and its `reqwest` implementation
pub mod transport;
