pub mod sse_server;
pub mod stdio;
