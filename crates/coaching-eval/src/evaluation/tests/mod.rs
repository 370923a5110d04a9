mod common;
mod recommendations;
