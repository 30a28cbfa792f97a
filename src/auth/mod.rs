mod claims;
mod session;
mod token;

pub use claims::Claims;
pub use session::{AccessTokenSession, Credentials, SessionContext, SessionError};
pub use token::AccessTokenDecoder;
