//! Doc-comment parsing core.
//!
//! Pipeline: [`fence`] splits raw text into alternating prose/code parts,
//! [`comment`] runs the line-oriented state machine over the prose using
//! [`classify`], and [`markup`] decomposes prose parts into typed nodes.

pub mod classify;
pub mod comment;
pub mod fence;
pub mod markup;
