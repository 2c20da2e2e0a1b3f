//! Backend for the S–N curve explorer: a single chat endpoint that grounds a
//! Gemini-powered fatigue tutor in the caller's graph JSON.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
