//! Terminal front end for the binary: message printing (the notifier) and
//! table/record rendering (the view). Nothing here mutates directory state.

pub(crate) mod print;
pub(crate) mod render;
