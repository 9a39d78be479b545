//! Credential primitives: Argon2id hashing in [`password`], access and
//! refresh tokens in [`jwt`].

pub mod jwt;
pub mod password;
