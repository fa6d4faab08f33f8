//! Tests for the authentication endpoints: login, OAuth callback, current user and logout.

mod login;
mod logout;
mod me;

use super::*;
