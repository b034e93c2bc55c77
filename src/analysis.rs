//! Text analysis module for Glint.
//!
//! Analysis here is limited to character filtering: turning a raw document
//! into the plain-text view that words are located in and excerpts are cut
//! from.

pub mod char_filter;
