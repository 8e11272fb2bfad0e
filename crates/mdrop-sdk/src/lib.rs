//! mdrop SDK: workflow logic behind the `mdrop` CLI.

pub mod commands;
pub mod common;
