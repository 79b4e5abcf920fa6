pub mod middleware;
pub mod mock_idp;
pub mod session;
