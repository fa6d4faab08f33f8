//! Authentication service layer.
//!
//! Login builds the provider's authorization URL. Callback exchanges the authorization
//! code for an access token, fetches the user's profile and stores the user.

pub mod callback;
pub mod login;
